//! Load-time configuration. There is no runtime reconfiguration; the front-end
//! builds a `LoungeConfig`, validates it once, and hands it to the session.

use crate::constants::*;
use crate::error::ConfigError;
use crate::tracks::{AudioHandle, Track, TrackId, TrackSet};
use crate::transform::{Mode, ModeTable};
use crate::tween::Easing;
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct AnalysisConfig {
    pub fft_size: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { fft_size: FFT_SIZE }
    }
}

impl AnalysisConfig {
    #[inline]
    pub fn frequency_bin_count(&self) -> usize {
        (self.fft_size / 2) as usize
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let ok = self.fft_size.is_power_of_two()
            && (FFT_SIZE_MIN..=FFT_SIZE_MAX).contains(&self.fft_size);
        if ok {
            Ok(())
        } else {
            Err(ConfigError::FftSize(self.fft_size))
        }
    }
}

/// Durations and endpoints of the entry animations.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionConfig {
    pub camera_from: Vec3,
    pub camera_to: Vec3,
    pub camera_secs: f32,
    pub fade_secs: f32,
    /// Zero disables the text-to-field morph.
    pub morph_secs: f32,
    pub easing: Easing,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            camera_from: Vec3::new(0.0, 0.0, CAMERA_INTRO_Z),
            camera_to: Vec3::new(0.0, 0.0, CAMERA_ACTIVE_Z),
            camera_secs: CAMERA_MOVE_SECS,
            fade_secs: INTRO_FADE_SECS,
            morph_secs: MORPH_SECS,
            easing: Easing::CubicInOut,
        }
    }
}

impl TransitionConfig {
    /// Length of the whole transition (the longest animation).
    pub fn total_secs(&self) -> f32 {
        self.camera_secs.max(self.fade_secs).max(self.morph_secs)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, v) in [
            ("camera_secs", self.camera_secs),
            ("fade_secs", self.fade_secs),
            ("morph_secs", self.morph_secs),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(ConfigError::Duration(name));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct TrackConfig {
    pub id: u32,
    pub audio_handle: String,
    pub mode: Mode,
    pub tint: [f32; 3],
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoungeConfig {
    pub analysis: AnalysisConfig,
    pub element_count: usize,
    pub field_spread: f32,
    pub seed: u64,
    pub tracks: Vec<TrackConfig>,
    pub initial_track: u32,
    pub modes: ModeTable,
    pub transition: TransitionConfig,
    /// Text sampled into the intro point cloud; `None` skips the intro shape.
    pub intro_text: Option<String>,
}

impl Default for LoungeConfig {
    fn default() -> Self {
        let modes = [Mode::NebulaDrift, Mode::Vortex, Mode::TunnelWobble];
        let tracks = (1..=TRACK_COUNT)
            .zip(modes)
            .zip(TRACK_TINTS)
            .map(|((id, mode), tint)| TrackConfig {
                id,
                audio_handle: format!("audio-{id}"),
                mode,
                tint,
            })
            .collect();
        Self {
            analysis: AnalysisConfig::default(),
            element_count: ELEMENT_COUNT,
            field_spread: FIELD_SPREAD,
            seed: ELEMENT_SEED,
            tracks,
            initial_track: 1,
            modes: ModeTable::default(),
            transition: TransitionConfig::default(),
            intro_text: Some(INTRO_TEXT.to_string()),
        }
    }
}

impl LoungeConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.analysis.validate()?;
        self.transition.validate()?;
        if self.element_count == 0 {
            return Err(ConfigError::NoElements);
        }
        for (mode, p) in self.modes.iter() {
            if !(p.normalization.is_finite() && p.normalization > 0.0) {
                return Err(ConfigError::Normalization {
                    mode: mode.name(),
                    value: p.normalization,
                });
            }
        }
        let set = self.track_set()?;
        if !set.contains(TrackId(self.initial_track)) {
            return Err(ConfigError::UnknownInitialTrack(self.initial_track));
        }
        Ok(())
    }

    pub fn track_set(&self) -> Result<TrackSet, ConfigError> {
        TrackSet::new(self.tracks.iter().map(|t| Track {
            id: TrackId(t.id),
            audio_handle: AudioHandle(t.audio_handle.clone()),
            mode: t.mode,
            tint: t.tint,
        }))
    }
}
