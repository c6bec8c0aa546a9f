use crate::tracks::TrackId;
use thiserror::Error;

/// Problems with the static setup. These are fatal at startup.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("fft size {0} must be a power of two in 32..=32768")]
    FftSize(u32),
    #[error("element count must be greater than zero")]
    NoElements,
    #[error("no tracks configured")]
    NoTracks,
    #[error("track ids must run 1..=N in order; found {found} at position {position}")]
    TrackIds { position: usize, found: u32 },
    #[error("initial track {0} is not in the track set")]
    UnknownInitialTrack(u32),
    #[error("audio resource for track {0} is missing")]
    MissingAudio(TrackId),
    #[error("normalization constant for {mode} must be positive, got {value}")]
    Normalization { mode: &'static str, value: f32 },
    #[error("transition duration `{0}` must be finite and non-negative")]
    Duration(&'static str),
}

/// Non-fatal playback failures. Logged, never retried automatically.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlaybackError {
    #[error("audio session could not be created: {0}")]
    Session(String),
    #[error("playback blocked by host policy: {0}")]
    Blocked(String),
    #[error("unknown track {0}")]
    UnknownTrack(TrackId),
}

/// The intro point cloud could not be produced; callers substitute a fallback.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PointCloudError {
    #[error("sampler unavailable: {0}")]
    Unavailable(String),
    #[error("sampled text produced no points")]
    Empty,
}
