//! Per-element motion modes.
//!
//! Every mode maps `(base, attrs, time, drive)` to an [`ElementTransform`]
//! with no hidden state. A drive of zero always yields [`rest_pose`], so a
//! silent track leaves the field perfectly still.

use crate::elements::ElementAttrs;
use glam::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mode {
    NebulaDrift,
    Vortex,
    Wavelength,
    TunnelWobble,
    ExplosionMorph,
}

impl Mode {
    pub const COUNT: usize = 5;
    pub const ALL: [Mode; Mode::COUNT] = [
        Mode::NebulaDrift,
        Mode::Vortex,
        Mode::Wavelength,
        Mode::TunnelWobble,
        Mode::ExplosionMorph,
    ];

    #[inline]
    pub fn index(self) -> usize {
        match self {
            Mode::NebulaDrift => 0,
            Mode::Vortex => 1,
            Mode::Wavelength => 2,
            Mode::TunnelWobble => 3,
            Mode::ExplosionMorph => 4,
        }
    }

    pub fn from_index(index: usize) -> Option<Mode> {
        Mode::ALL.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Mode::NebulaDrift => "nebula-drift",
            Mode::Vortex => "vortex",
            Mode::Wavelength => "wavelength",
            Mode::TunnelWobble => "tunnel-wobble",
            Mode::ExplosionMorph => "explosion-morph",
        }
    }
}

/// Tuning knobs for one mode. Not every mode reads every field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ModeParams {
    /// Divisor applied to the mean spectrum level (see `DriveSignalReducer`).
    pub normalization: f32,
    pub amplitude: f32,
    pub speed: f32,
    pub frequency: f32,
    pub twist: f32,
    pub travel: f32,
    pub pulse: f32,
    pub glow: f32,
    pub depth: f32,
}

impl ModeParams {
    pub fn defaults_for(mode: Mode) -> Self {
        match mode {
            Mode::NebulaDrift => ModeParams {
                normalization: 30.0,
                amplitude: 1.0,
                speed: 0.6,
                frequency: 0.0,
                twist: 0.0,
                travel: 0.0,
                pulse: 0.6,
                glow: 0.8,
                depth: 60.0,
            },
            Mode::Vortex => ModeParams {
                normalization: 20.0,
                amplitude: 60.0,
                speed: 0.8,
                frequency: 0.01,
                twist: 1.2,
                travel: 0.0,
                pulse: 0.5,
                glow: 1.0,
                depth: 400.0,
            },
            Mode::Wavelength => ModeParams {
                normalization: 25.0,
                amplitude: 120.0,
                speed: 2.0,
                frequency: 0.008,
                twist: 0.5,
                travel: 0.0,
                pulse: 0.4,
                glow: 0.6,
                depth: 0.0,
            },
            Mode::TunnelWobble => ModeParams {
                normalization: 15.0,
                amplitude: 30.0,
                speed: 3.0,
                frequency: 0.01,
                twist: 0.0,
                travel: 250.0,
                pulse: 0.3,
                glow: 0.9,
                depth: 2000.0,
            },
            Mode::ExplosionMorph => ModeParams {
                normalization: 40.0,
                amplitude: 300.0,
                speed: 1.5,
                frequency: 0.0,
                twist: 0.0,
                travel: 0.0,
                pulse: 0.8,
                glow: 1.2,
                depth: 0.0,
            },
        }
    }
}

/// Parameters for every mode, indexed by [`Mode::index`].
#[derive(Clone, Debug, PartialEq)]
pub struct ModeTable {
    params: [ModeParams; Mode::COUNT],
}

impl Default for ModeTable {
    fn default() -> Self {
        Self {
            params: Mode::ALL.map(ModeParams::defaults_for),
        }
    }
}

impl ModeTable {
    #[inline]
    pub fn get(&self, mode: Mode) -> &ModeParams {
        &self.params[mode.index()]
    }

    pub fn set(&mut self, mode: Mode, params: ModeParams) {
        self.params[mode.index()] = params;
    }

    pub fn iter(&self) -> impl Iterator<Item = (Mode, &ModeParams)> {
        Mode::ALL.into_iter().zip(self.params.iter())
    }
}

/// Final per-frame state of one element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementTransform {
    pub position: Vec3,
    /// Sprite spin in radians.
    pub rotation: f32,
    pub scale: f32,
    pub color_intensity: f32,
}

impl Default for ElementTransform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: 0.0,
            scale: 1.0,
            color_intensity: 1.0,
        }
    }
}

#[inline]
pub fn rest_pose(base: Vec3, attrs: &ElementAttrs) -> ElementTransform {
    ElementTransform {
        position: base,
        rotation: 0.0,
        scale: attrs.size,
        color_intensity: 1.0,
    }
}

pub fn transform(
    base: Vec3,
    attrs: &ElementAttrs,
    time: f32,
    drive: f32,
    mode: Mode,
    p: &ModeParams,
) -> ElementTransform {
    if !drive.is_finite() || drive <= 0.0 {
        return rest_pose(base, attrs);
    }
    let scale = attrs.size * (1.0 + p.pulse * drive);
    let color_intensity = 1.0 + p.glow * drive;
    let (position, rotation) = match mode {
        Mode::NebulaDrift => nebula_drift(base, attrs, time, drive, p),
        Mode::Vortex => vortex(base, time, drive, p),
        Mode::Wavelength => wavelength(base, time, drive, p),
        Mode::TunnelWobble => tunnel_wobble(base, attrs, time, drive, p),
        Mode::ExplosionMorph => explosion(base, attrs, time, drive, p),
    };
    ElementTransform {
        position,
        rotation,
        scale,
        color_intensity,
    }
}

fn nebula_drift(
    base: Vec3,
    attrs: &ElementAttrs,
    time: f32,
    drive: f32,
    p: &ModeParams,
) -> (Vec3, f32) {
    let wobble = (p.speed * time + attrs.phase).sin();
    let drift = attrs.velocity * (p.amplitude * drive * wobble);
    // Whole cloud leans toward the camera with loudness.
    let push = Vec3::Z * (p.depth * drive);
    (base + drift + push, drive * p.speed * time)
}

fn vortex(base: Vec3, time: f32, drive: f32, p: &ModeParams) -> (Vec3, f32) {
    let r = (base.x * base.x + base.z * base.z).sqrt();
    let theta0 = base.z.atan2(base.x);
    let angle = drive * (p.speed * time + p.twist / (1.0 + r / p.depth.max(f32::EPSILON)));
    let theta = theta0 + angle;
    let lift = drive * p.amplitude * (p.speed * time + r * p.frequency).sin();
    (
        Vec3::new(r * theta.cos(), base.y + lift, r * theta.sin()),
        angle,
    )
}

fn wavelength(base: Vec3, time: f32, drive: f32, p: &ModeParams) -> (Vec3, f32) {
    let wave = (base.x * p.frequency + p.speed * time).sin();
    let y = base.y + drive * p.amplitude * wave;
    (Vec3::new(base.x, y, base.z), drive * p.twist * wave)
}

fn tunnel_wobble(
    base: Vec3,
    attrs: &ElementAttrs,
    time: f32,
    drive: f32,
    p: &ModeParams,
) -> (Vec3, f32) {
    let k = p.speed * time + base.z * p.frequency + attrs.phase;
    let x = base.x + drive * p.amplitude * k.sin();
    let y = base.y + drive * p.amplitude * k.cos();
    let z = wrap_centered(base.z + drive * p.travel * time, p.depth);
    (Vec3::new(x, y, z), drive * k.sin())
}

fn explosion(
    base: Vec3,
    attrs: &ElementAttrs,
    time: f32,
    drive: f32,
    p: &ModeParams,
) -> (Vec3, f32) {
    let dir = attrs.velocity.normalize_or_zero();
    let breath = 0.75 + 0.25 * (p.speed * time + attrs.phase).sin();
    let offset = dir * (p.amplitude * drive * breath);
    (base + offset, drive * (p.speed * time + attrs.phase))
}

/// Wrap `v` into `[-depth/2, depth/2)`. Non-positive depth disables wrapping.
#[inline]
fn wrap_centered(v: f32, depth: f32) -> f32 {
    if depth <= 0.0 {
        return v;
    }
    let half = depth * 0.5;
    (v + half).rem_euclid(depth) - half
}
