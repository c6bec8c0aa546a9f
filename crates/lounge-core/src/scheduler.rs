//! Per-frame pipeline: entry pose, drive signal, element transforms, draw.

use crate::elements::{ElementAttrs, ElementBuffer};
use crate::entry::{EntryPose, EntrySequencer, EntryState};
use crate::playback::{AudioBackend, PlaybackController};
use crate::tracks::TrackId;
use crate::transform::{transform, ElementTransform, Mode, ModeTable};
use std::time::Duration;

/// Everything the renderer needs for one frame.
pub struct FrameState<'a> {
    /// Seconds since session start.
    pub time: f32,
    pub drive: f32,
    pub entry: EntryState,
    pub pose: EntryPose,
    pub track: TrackId,
    pub mode: Mode,
    pub tint: [f32; 3],
    pub elements: &'a [ElementAttrs],
    pub transforms: &'a [ElementTransform],
}

/// Rendering backend. Called once per frame, synchronously.
pub trait Renderer {
    fn draw(&mut self, frame: &FrameState<'_>);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameSummary {
    pub time: f32,
    pub drive: f32,
    pub entry: EntryState,
}

pub struct FrameScheduler {
    elements: ElementBuffer,
    modes: ModeTable,
}

impl FrameScheduler {
    pub fn new(elements: ElementBuffer, modes: ModeTable) -> Self {
        Self { elements, modes }
    }

    pub fn elements(&self) -> &ElementBuffer {
        &self.elements
    }

    pub fn modes(&self) -> &ModeTable {
        &self.modes
    }

    /// Rewrite every element transform for the given inputs.
    pub fn evaluate(&mut self, time: f32, drive: f32, mode: Mode, morph: f32) -> &[ElementTransform] {
        let params = *self.modes.get(mode);
        let (attrs, out) = self.elements.split_mut();
        for (a, slot) in attrs.iter().zip(out.iter_mut()) {
            *slot = transform(a.base_at(morph), a, time, drive, mode, &params);
        }
        self.elements.transforms()
    }

    /// Run one frame. `now` is the elapsed time since session start.
    ///
    /// The drive signal only reaches the transforms once the entry sequence
    /// is Active; before that every element holds its resting pose.
    pub fn tick<B: AudioBackend, R: Renderer>(
        &mut self,
        now: Duration,
        entry: &mut EntrySequencer,
        playback: &mut PlaybackController<B>,
        renderer: &mut R,
    ) -> FrameSummary {
        let time = now.as_secs_f32();
        let state = entry.advance(now);
        let pose = entry.pose(now);
        let (track, mode, tint) = playback
            .current_track()
            .map(|t| (t.id, t.mode, t.tint))
            .unwrap_or((TrackId(1), Mode::NebulaDrift, [1.0; 3]));

        let drive = if state == EntryState::Active {
            playback.drive(self.modes.get(mode).normalization)
        } else {
            0.0
        };

        self.evaluate(time, drive, mode, pose.morph);
        renderer.draw(&FrameState {
            time,
            drive,
            entry: state,
            pose,
            track,
            mode,
            tint,
            elements: self.elements.attrs(),
            transforms: self.elements.transforms(),
        });
        FrameSummary {
            time,
            drive,
            entry: state,
        }
    }
}
