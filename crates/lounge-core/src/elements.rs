use crate::constants::{ELEMENT_SIZE_MAX, ELEMENT_SIZE_MIN, ELEMENT_SPEED_MAX};
use crate::transform::{rest_pose, ElementTransform};
use glam::Vec3;
use rand::prelude::*;

/// Immutable per-element attributes, generated once at setup.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementAttrs {
    /// Scattered resting position once the entry sequence has finished.
    pub home: Vec3,
    /// Position inside the intro point cloud (equal to `home` without one).
    pub intro: Vec3,
    pub velocity: Vec3,
    pub size: f32,
    pub phase: f32,
    pub color: [f32; 3],
}

impl ElementAttrs {
    /// Base position for a given morph progress (0 = intro pose, 1 = home).
    #[inline]
    pub fn base_at(&self, morph: f32) -> Vec3 {
        self.intro.lerp(self.home, morph.clamp(0.0, 1.0))
    }
}

/// Fixed-size element storage. Attributes never change; transforms are
/// rewritten in place every frame.
pub struct ElementBuffer {
    attrs: Vec<ElementAttrs>,
    transforms: Vec<ElementTransform>,
}

impl ElementBuffer {
    /// Scatter `count` elements uniformly in a cube of edge `spread` centred
    /// on the origin. Intro positions cycle through `intro_points`.
    pub fn generate(count: usize, spread: f32, intro_points: &[Vec3], seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let centered = |rng: &mut StdRng| (rng.gen::<f32>() - 0.5) * spread;
        let attrs: Vec<ElementAttrs> = (0..count)
            .map(|i| {
                let home = Vec3::new(centered(&mut rng), centered(&mut rng), centered(&mut rng));
                let intro = if intro_points.is_empty() {
                    home
                } else {
                    intro_points[i % intro_points.len()]
                };
                let velocity = Vec3::new(
                    rng.gen_range(-1.0..=1.0),
                    rng.gen_range(-1.0..=1.0),
                    rng.gen_range(-1.0..=1.0),
                ) * ELEMENT_SPEED_MAX;
                let shade = 0.7 + 0.3 * rng.gen::<f32>();
                ElementAttrs {
                    home,
                    intro,
                    velocity,
                    size: rng.gen_range(ELEMENT_SIZE_MIN..=ELEMENT_SIZE_MAX),
                    phase: rng.gen::<f32>() * std::f32::consts::TAU,
                    color: [shade, shade, shade],
                }
            })
            .collect();
        Self::from_attrs(attrs)
    }

    pub fn from_attrs(attrs: Vec<ElementAttrs>) -> Self {
        let transforms = attrs.iter().map(|a| rest_pose(a.intro, a)).collect();
        Self { attrs, transforms }
    }

    pub fn len(&self) -> usize {
        self.attrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attrs.is_empty()
    }

    pub fn attrs(&self) -> &[ElementAttrs] {
        &self.attrs
    }

    pub fn transforms(&self) -> &[ElementTransform] {
        &self.transforms
    }

    /// Attributes and transform slots side by side for the per-frame pass.
    pub(crate) fn split_mut(&mut self) -> (&[ElementAttrs], &mut [ElementTransform]) {
        (&self.attrs, &mut self.transforms)
    }
}
