//! The session context: one object owning playback, the entry sequence and
//! the frame scheduler. Front-ends share it between their gesture handlers
//! and their refresh callback.

use crate::config::LoungeConfig;
use crate::elements::ElementBuffer;
use crate::entry::{EntrySequencer, EntryState, GestureOutcome};
use crate::error::ConfigError;
use crate::lyrics::LyricSheet;
use crate::playback::{AudioBackend, PlaybackController};
use crate::scheduler::{FrameScheduler, FrameSummary, Renderer};
use crate::tracks::TrackId;
use glam::Vec3;
use instant::Instant;
use std::time::Duration;

/// Monotonic clock anchored at session start.
#[derive(Clone, Copy, Debug)]
pub struct SessionClock {
    started: Instant,
}

impl SessionClock {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}

/// Text-side state for the overlay: caption line and progress bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hud<'a> {
    pub track: TrackId,
    pub lyric: Option<&'a str>,
    pub progress: Option<f32>,
}

pub struct Session<B: AudioBackend> {
    playback: PlaybackController<B>,
    entry: EntrySequencer,
    scheduler: FrameScheduler,
    lyrics: LyricSheet,
}

impl<B: AudioBackend> Session<B> {
    /// Validate `config` and build every component. A missing audio resource
    /// for any track is fatal here.
    pub fn new(config: &LoungeConfig, backend: B, intro_points: &[Vec3]) -> Result<Self, ConfigError> {
        config.validate()?;
        let playback = PlaybackController::new(
            backend,
            config.track_set()?,
            TrackId(config.initial_track),
            &config.analysis,
        )?;
        let elements = ElementBuffer::generate(
            config.element_count,
            config.field_spread,
            intro_points,
            config.seed,
        );
        log::info!(
            "[session] {} elements, {} tracks, initial track {}",
            elements.len(),
            playback.tracks().len(),
            config.initial_track
        );
        Ok(Self {
            playback,
            entry: EntrySequencer::new(config.transition.clone()),
            scheduler: FrameScheduler::new(elements, config.modes.clone()),
            lyrics: LyricSheet::default(),
        })
    }

    pub fn with_lyrics(mut self, lyrics: LyricSheet) -> Self {
        self.lyrics = lyrics;
        self
    }

    /// Setup work is done; the entry sequence may now accept a gesture.
    pub fn assets_ready(&mut self) -> bool {
        self.entry.arm()
    }

    /// Pointer-down/click. Must be called from inside the host's gesture
    /// callback: it opens the audio session synchronously.
    ///
    /// A later gesture retries playback if the first start was blocked.
    pub fn handle_gesture(&mut self, now: Duration) -> GestureOutcome {
        let outcome = self.entry.on_gesture(now);
        match outcome {
            GestureOutcome::Started => {
                let id = self.playback.current_id();
                self.playback.start(id);
            }
            GestureOutcome::AlreadyStarted if !self.playback.is_playing() => {
                let id = self.playback.current_id();
                log::info!("[session] retrying playback of track {}", id);
                self.playback.start(id);
            }
            _ => {}
        }
        outcome
    }

    /// Explicit next-track control. Ignored until the entry sequence has
    /// started.
    pub fn next_track(&mut self) -> Option<TrackId> {
        if self.entry.state() < EntryState::Transitioning {
            log::debug!("[session] next-track before entry; ignored");
            return None;
        }
        Some(self.playback.switch_to_next())
    }

    pub fn frame<R: Renderer>(&mut self, now: Duration, renderer: &mut R) -> FrameSummary {
        self.scheduler
            .tick(now, &mut self.entry, &mut self.playback, renderer)
    }

    pub fn hud(&self) -> Hud<'_> {
        let track = self.playback.current_id();
        let position = self.playback.position();
        Hud {
            track,
            lyric: position.and_then(|p| self.lyrics.line_at(track, p.current_secs)),
            progress: position.and_then(|p| p.progress()),
        }
    }

    pub fn entry(&self) -> &EntrySequencer {
        &self.entry
    }

    pub fn playback(&self) -> &PlaybackController<B> {
        &self.playback
    }

    pub fn scheduler(&self) -> &FrameScheduler {
        &self.scheduler
    }
}
