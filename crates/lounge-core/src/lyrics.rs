use crate::constants::{LYRIC_FADE_SECS, LYRIC_RISE_PX};
use crate::tracks::TrackId;
use crate::tween::{Easing, Tween};
use fnv::FnvHashMap;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct LyricCue {
    pub at_secs: f64,
    pub text: String,
}

/// Timed caption lines per track.
#[derive(Clone, Debug, Default)]
pub struct LyricSheet {
    cues: FnvHashMap<TrackId, Vec<LyricCue>>,
}

impl LyricSheet {
    /// Replace the cues for `track`. Cues are kept sorted by time.
    pub fn insert(&mut self, track: TrackId, mut cues: Vec<LyricCue>) {
        cues.sort_by(|a, b| a.at_secs.total_cmp(&b.at_secs));
        self.cues.insert(track, cues);
    }

    /// The last cue at or before `time_secs`, or the first cue if playback
    /// has not reached any of them yet.
    pub fn line_at(&self, track: TrackId, time_secs: f64) -> Option<&str> {
        let cues = self.cues.get(&track)?;
        let first = cues.first()?;
        let line = cues
            .iter()
            .take_while(|c| c.at_secs <= time_secs)
            .last()
            .unwrap_or(first);
        Some(line.text.as_str())
    }

    /// The lounge's built-in captions.
    pub fn lounge_default() -> Self {
        let mut sheet = Self::default();
        let cue = |at_secs: f64, text: &str| LyricCue {
            at_secs,
            text: text.to_string(),
        };
        sheet.insert(
            TrackId(1),
            vec![
                cue(0.0, "INITIALIZING NEURAL LINK..."),
                cue(5.0, "WELCOME TO THE AFTER DARK LOUNGE"),
                cue(12.0, "SINK INTO THE DATA STREAM"),
            ],
        );
        sheet.insert(
            TrackId(2),
            vec![
                cue(0.0, "THE OS OF FUNK IS LOADING..."),
                cue(4.0, "CALIBRATING RHYTHM NODES"),
                cue(10.0, "MANIFEST THE ALGORITHM"),
            ],
        );
        sheet.insert(
            TrackId(3),
            vec![
                cue(0.0, "WARP DRIVE ENGAGED"),
                cue(3.0, "GO HARD OR GO HOME"),
                cue(8.0, "PURE SOVEREIGN INTELLIGENCE"),
            ],
        );
        sheet
    }
}

/// Reveal of a newly shown caption line: opacity 0 to 1 while rising into
/// place. Before the first `restart` the line is shown as settled.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineFade {
    tween: Option<Tween>,
}

impl LineFade {
    pub fn restart(&mut self, now: Duration) {
        self.tween = Some(Tween::new(now, LYRIC_FADE_SECS, Easing::QuadOut));
    }

    pub fn opacity(&self, now: Duration) -> f32 {
        self.tween.map_or(1.0, |t| t.progress(now))
    }

    /// Vertical offset in CSS pixels, positive is downwards.
    pub fn offset_px(&self, now: Duration) -> f32 {
        self.tween.map_or(0.0, |t| t.lerp(LYRIC_RISE_PX, 0.0, now))
    }

    pub fn is_settled(&self, now: Duration) -> bool {
        self.tween.map_or(true, |t| t.is_complete(now))
    }
}
