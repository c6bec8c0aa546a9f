//! Track playback and the single analysis session.
//!
//! The host audio graph is hidden behind [`AudioBackend`]. The controller
//! guarantees that at most one analysis session is ever opened and that at
//! most one track plays at a time.

use crate::config::AnalysisConfig;
use crate::drive::DriveSignalReducer;
use crate::error::{ConfigError, PlaybackError};
use crate::spectrum::{SpectrumSampler, SpectrumSource};
use crate::tracks::{Track, TrackId, TrackSet};

/// Current time and duration of a track, in seconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaybackPosition {
    pub current_secs: f64,
    pub duration_secs: f64,
}

impl PlaybackPosition {
    /// Fraction played in `[0, 1]`, or `None` while the duration is unknown.
    pub fn progress(&self) -> Option<f32> {
        if self.duration_secs.is_finite() && self.duration_secs > 0.0 {
            Some((self.current_secs / self.duration_secs).clamp(0.0, 1.0) as f32)
        } else {
            None
        }
    }
}

pub trait AudioBackend {
    type Analysis: SpectrumSource;

    /// Whether the track's audio resource exists. Checked once at startup.
    fn has_resource(&self, track: &Track) -> bool;

    /// Create the analysis session and splice it between `first`'s source and
    /// the output. Called at most once, from inside a user gesture.
    fn open_session(&mut self, first: &Track, fft_size: u32) -> Result<Self::Analysis, PlaybackError>;

    /// Begin playback. The track's source is routed through the existing
    /// session if it is not already.
    fn play(&mut self, track: &Track) -> Result<(), PlaybackError>;

    /// Pause and rewind to the start.
    fn stop(&mut self, track: &Track);

    /// Whether the host is still playing `track`. Hosts that reject playback
    /// after `play` has returned report it here.
    fn is_playing(&self, track: &Track) -> bool;

    fn position(&self, track: &Track) -> Option<PlaybackPosition>;
}

pub struct PlaybackController<B: AudioBackend> {
    backend: B,
    tracks: TrackSet,
    current: TrackId,
    fft_size: u32,
    sampler: SpectrumSampler<B::Analysis>,
    playing: bool,
    sessions_opened: u32,
}

impl<B: AudioBackend> PlaybackController<B> {
    pub fn new(
        backend: B,
        tracks: TrackSet,
        initial: TrackId,
        analysis: &AnalysisConfig,
    ) -> Result<Self, ConfigError> {
        if !tracks.contains(initial) {
            return Err(ConfigError::UnknownInitialTrack(initial.0));
        }
        if let Some(missing) = tracks.iter().find(|t| !backend.has_resource(t)) {
            return Err(ConfigError::MissingAudio(missing.id));
        }
        Ok(Self {
            backend,
            tracks,
            current: initial,
            fft_size: analysis.fft_size,
            sampler: SpectrumSampler::new(analysis.frequency_bin_count()),
            playing: false,
            sessions_opened: 0,
        })
    }

    /// Start `id`, opening the analysis session on first use. A different
    /// track that is still playing is stopped and rewound first.
    ///
    /// Returns whether playback was accepted. Failures are logged and left
    /// for the next user gesture to retry.
    pub fn start(&mut self, id: TrackId) -> bool {
        if !self.tracks.contains(id) {
            log::error!("[audio] {}", PlaybackError::UnknownTrack(id));
            return false;
        }
        if self.playing && id != self.current {
            self.stop();
        }
        let Some(track) = self.tracks.get(id) else {
            return false;
        };
        if !self.sampler.is_attached() {
            match self.backend.open_session(track, self.fft_size) {
                Ok(analysis) => {
                    self.sessions_opened += 1;
                    self.sampler.attach(analysis);
                    log::info!(
                        "[audio] analysis session open (fft={}, bins={})",
                        self.fft_size,
                        self.sampler.bin_count()
                    );
                }
                Err(e) => {
                    log::error!("[audio] {}", e);
                    self.playing = false;
                    return false;
                }
            }
        }
        self.current = id;
        match self.backend.play(track) {
            Ok(()) => {
                self.playing = true;
                log::info!("[audio] playing track {} ({})", id, track.mode.name());
                true
            }
            Err(e) => {
                self.playing = false;
                log::warn!("[audio] track {}: {}", id, e);
                false
            }
        }
    }

    /// Stop the current track, rewind it, and start `id` on the same session.
    pub fn switch_to(&mut self, id: TrackId) -> bool {
        if !self.tracks.contains(id) {
            log::error!("[audio] {}", PlaybackError::UnknownTrack(id));
            return false;
        }
        self.stop();
        self.current = id;
        self.start(id)
    }

    /// Advance cyclically to the next track and start it.
    pub fn switch_to_next(&mut self) -> TrackId {
        let next = self.tracks.next_after(self.current);
        self.switch_to(next);
        next
    }

    pub fn stop(&mut self) {
        if let Some(track) = self.tracks.get(self.current) {
            self.backend.stop(track);
        }
        self.playing = false;
    }

    /// Latest spectrum snapshot; zeros before the session exists.
    pub fn sample(&mut self) -> &[u8] {
        self.sampler.sample()
    }

    /// Sample and reduce in one step. Zero while nothing is playing.
    pub fn drive(&mut self, normalization: f32) -> f32 {
        if !self.is_playing() {
            return 0.0;
        }
        DriveSignalReducer::new(normalization).reduce(self.sampler.sample())
    }

    pub fn position(&self) -> Option<PlaybackPosition> {
        self.tracks
            .get(self.current)
            .and_then(|t| self.backend.position(t))
    }

    pub fn current_id(&self) -> TrackId {
        self.current
    }

    pub fn current_track(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    pub fn tracks(&self) -> &TrackSet {
        &self.tracks
    }

    /// Playback was accepted and the host has not rejected it since.
    pub fn is_playing(&self) -> bool {
        self.playing
            && self
                .tracks
                .get(self.current)
                .is_some_and(|t| self.backend.is_playing(t))
    }

    pub fn has_session(&self) -> bool {
        self.sampler.is_attached()
    }

    pub fn sessions_opened(&self) -> u32 {
        self.sessions_opened
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
