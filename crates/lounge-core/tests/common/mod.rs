// Scripted stand-ins for the host audio subsystem and renderer.

#![allow(dead_code)]
use lounge_core::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Spectrum source that replays whatever bytes the test last set.
#[derive(Clone)]
pub struct FakeAnalysis {
    pub level: Rc<RefCell<Vec<u8>>>,
}

impl SpectrumSource for FakeAnalysis {
    fn bin_count(&self) -> usize {
        self.level.borrow().len()
    }

    fn read_bytes(&mut self, out: &mut [u8]) {
        let level = self.level.borrow();
        for (o, v) in out.iter_mut().zip(level.iter()) {
            *o = *v;
        }
    }
}

#[derive(Default)]
pub struct Calls {
    pub open_session: u32,
    pub play: Vec<TrackId>,
    pub stop: Vec<TrackId>,
}

pub struct FakeBackend {
    pub calls: Rc<RefCell<Calls>>,
    pub level: Rc<RefCell<Vec<u8>>>,
    pub missing: Vec<String>,
    /// Number of upcoming `play` calls the host should reject.
    pub block_plays: u32,
    /// Number of upcoming `play` calls that are accepted and then rejected
    /// by the host afterwards.
    pub late_rejections: u32,
    pub rejected: Rc<Cell<Option<TrackId>>>,
    pub fail_session: bool,
    pub position: Option<PlaybackPosition>,
}

impl FakeBackend {
    pub fn new(bins: usize) -> Self {
        Self {
            calls: Rc::new(RefCell::new(Calls::default())),
            level: Rc::new(RefCell::new(vec![0; bins])),
            missing: Vec::new(),
            block_plays: 0,
            late_rejections: 0,
            rejected: Rc::new(Cell::new(None)),
            fail_session: false,
            position: None,
        }
    }

    pub fn set_level(&self, value: u8) {
        self.level.borrow_mut().fill(value);
    }
}

impl AudioBackend for FakeBackend {
    type Analysis = FakeAnalysis;

    fn has_resource(&self, track: &Track) -> bool {
        !self.missing.iter().any(|m| m == track.audio_handle.as_str())
    }

    fn open_session(&mut self, _first: &Track, _fft_size: u32) -> Result<FakeAnalysis, PlaybackError> {
        if self.fail_session {
            return Err(PlaybackError::Session("no audio device".into()));
        }
        self.calls.borrow_mut().open_session += 1;
        Ok(FakeAnalysis {
            level: self.level.clone(),
        })
    }

    fn play(&mut self, track: &Track) -> Result<(), PlaybackError> {
        if self.block_plays > 0 {
            self.block_plays -= 1;
            return Err(PlaybackError::Blocked("autoplay".into()));
        }
        self.calls.borrow_mut().play.push(track.id);
        if self.late_rejections > 0 {
            self.late_rejections -= 1;
            self.rejected.set(Some(track.id));
        } else {
            self.rejected.set(None);
        }
        Ok(())
    }

    fn stop(&mut self, track: &Track) {
        self.calls.borrow_mut().stop.push(track.id);
    }

    fn is_playing(&self, track: &Track) -> bool {
        self.rejected.get() != Some(track.id)
    }

    fn position(&self, _track: &Track) -> Option<PlaybackPosition> {
        self.position
    }
}

/// Keeps a copy of what each frame handed to the renderer.
#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: Vec<(f32, f32, EntryState)>,
    pub last_transforms: Vec<ElementTransform>,
    pub last_pose: Option<EntryPose>,
}

impl Renderer for RecordingRenderer {
    fn draw(&mut self, frame: &FrameState<'_>) {
        self.frames.push((frame.time, frame.drive, frame.entry));
        self.last_transforms = frame.transforms.to_vec();
        self.last_pose = Some(frame.pose);
    }
}

pub fn small_config() -> LoungeConfig {
    LoungeConfig {
        element_count: 64,
        intro_text: None,
        ..LoungeConfig::default()
    }
}

pub fn secs(s: f32) -> std::time::Duration {
    std::time::Duration::from_secs_f32(s)
}
