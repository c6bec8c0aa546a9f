//! One-shot, gesture-gated entry sequence.
//!
//! `Idle → Armed → Transitioning → Active`, forward only. The first qualifying
//! gesture flips a latch inside the same call that starts the transition, so
//! a second gesture in the same tick can never start it again.

use crate::config::TransitionConfig;
use crate::tween::Tween;
use glam::Vec3;
use smallvec::SmallVec;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EntryState {
    Idle,
    Armed,
    Transitioning,
    Active,
}

impl EntryState {
    /// Whether the intro overlay has to be redrawn this frame: every frame of
    /// the transition, and once on each state change.
    #[inline]
    pub fn needs_overlay_sync(self, previous: EntryState) -> bool {
        self == EntryState::Transitioning || self != previous
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GestureOutcome {
    /// This gesture started the transition.
    Started,
    /// Setup has not finished; the gesture does not count.
    NotArmed,
    /// The latch was already set.
    AlreadyStarted,
}

/// Visual parameters derived from the entry animations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntryPose {
    pub camera_eye: Vec3,
    /// Opacity of the intro overlay, 1 before the gesture and 0 once faded.
    pub intro_opacity: f32,
    /// 0 = elements sit in the intro point cloud, 1 = scattered home.
    pub morph: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Channel {
    Camera,
    Fade,
    Morph,
}

pub struct EntrySequencer {
    state: EntryState,
    latched: bool,
    config: TransitionConfig,
    animations: SmallVec<[(Channel, Tween); 3]>,
}

impl EntrySequencer {
    pub fn new(config: TransitionConfig) -> Self {
        Self {
            state: EntryState::Idle,
            latched: false,
            config,
            animations: SmallVec::new(),
        }
    }

    pub fn state(&self) -> EntryState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == EntryState::Active
    }

    /// Setup finished (point cloud ready or fallback substituted).
    pub fn arm(&mut self) -> bool {
        if self.state != EntryState::Idle {
            return false;
        }
        self.state = EntryState::Armed;
        log::info!("[entry] armed");
        true
    }

    /// Handle a pointer-down/click. Only the first gesture after arming counts.
    pub fn on_gesture(&mut self, now: Duration) -> GestureOutcome {
        if self.latched {
            return GestureOutcome::AlreadyStarted;
        }
        if self.state != EntryState::Armed {
            log::debug!("[entry] gesture before setup finished; ignored");
            return GestureOutcome::NotArmed;
        }
        self.latched = true;
        self.state = EntryState::Transitioning;

        let easing = self.config.easing;
        self.animations.clear();
        self.animations.push((
            Channel::Camera,
            Tween::new(now, self.config.camera_secs, easing),
        ));
        self.animations
            .push((Channel::Fade, Tween::new(now, self.config.fade_secs, easing)));
        self.animations.push((
            Channel::Morph,
            Tween::new(now, self.config.morph_secs, easing),
        ));
        log::info!(
            "[entry] transitioning ({:.2}s)",
            self.config.total_secs()
        );
        GestureOutcome::Started
    }

    /// Move to Active once every animation has completed.
    pub fn advance(&mut self, now: Duration) -> EntryState {
        if self.state == EntryState::Transitioning
            && self.animations.iter().all(|(_, t)| t.is_complete(now))
        {
            self.state = EntryState::Active;
            log::info!("[entry] active");
        }
        self.state
    }

    pub fn pose(&self, now: Duration) -> EntryPose {
        match self.state {
            EntryState::Idle | EntryState::Armed => EntryPose {
                camera_eye: self.config.camera_from,
                intro_opacity: 1.0,
                morph: 0.0,
            },
            EntryState::Active => self.resting_pose(),
            EntryState::Transitioning => {
                let mut pose = EntryPose {
                    camera_eye: self.config.camera_from,
                    intro_opacity: 1.0,
                    morph: 0.0,
                };
                for (channel, tween) in &self.animations {
                    let p = tween.progress(now);
                    match channel {
                        Channel::Camera => {
                            pose.camera_eye = self.config.camera_from.lerp(self.config.camera_to, p)
                        }
                        Channel::Fade => pose.intro_opacity = 1.0 - p,
                        Channel::Morph => pose.morph = p,
                    }
                }
                pose
            }
        }
    }

    fn resting_pose(&self) -> EntryPose {
        EntryPose {
            camera_eye: self.config.camera_to,
            intro_opacity: 0.0,
            morph: 1.0,
        }
    }
}
