//! Minimal "animate from A to B over D with easing E" primitive.

use std::f32::consts::PI;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    QuadOut,
    CubicInOut,
    QuartInOut,
    ExpoInOut,
    SineInOut,
}

impl Easing {
    /// Map linear progress `t` in `[0, 1]` onto the curve. Endpoints are exact.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::QuadOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::QuartInOut => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(4) / 2.0
                }
            }
            Easing::ExpoInOut => {
                if t <= 0.0 {
                    0.0
                } else if t >= 1.0 {
                    1.0
                } else if t < 0.5 {
                    (2.0_f32).powf(20.0 * t - 10.0) / 2.0
                } else {
                    (2.0 - (2.0_f32).powf(-20.0 * t + 10.0)) / 2.0
                }
            }
            Easing::SineInOut => -((PI * t).cos() - 1.0) / 2.0,
        }
    }
}

/// A time-bounded animation anchored at `start` on the session clock.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub start: Duration,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(start: Duration, duration_secs: f32, easing: Easing) -> Self {
        Self {
            start,
            duration: if duration_secs.is_finite() && duration_secs > 0.0 {
                Duration::from_secs_f32(duration_secs)
            } else {
                Duration::ZERO
            },
            easing,
        }
    }

    /// Eased progress in `[0, 1]`. Zero-length tweens are immediately done.
    pub fn progress(&self, now: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start).as_secs_f32();
        self.easing.apply(elapsed / self.duration.as_secs_f32())
    }

    pub fn is_complete(&self, now: Duration) -> bool {
        now >= self.start + self.duration
    }

    #[inline]
    pub fn lerp(&self, from: f32, to: f32, now: Duration) -> f32 {
        from + (to - from) * self.progress(now)
    }
}
