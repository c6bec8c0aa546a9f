// Host-side tests for alpha-mask sampling used by the intro text cloud.

#![allow(dead_code)]
mod mask {
    include!("../src/mask.rs");
}

use glam::Vec3;
use mask::points_from_alpha;

fn image(width: usize, height: usize, lit: &[(usize, usize)]) -> Vec<u8> {
    let mut rgba = vec![0u8; width * height * 4];
    for &(x, y) in lit {
        rgba[(y * width + x) * 4 + 3] = 255;
    }
    rgba
}

#[test]
fn lit_pixels_become_points_with_y_flipped() {
    let rgba = image(4, 3, &[(1, 0), (3, 2)]);
    let pts = points_from_alpha(&rgba, 4, 3, 1, 128);
    assert_eq!(pts, vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(3.0, -2.0, 0.0)]);
}

#[test]
fn step_skips_pixels_on_both_axes() {
    let all: Vec<(usize, usize)> = (0..4).flat_map(|y| (0..4).map(move |x| (x, y))).collect();
    let rgba = image(4, 4, &all);
    assert_eq!(points_from_alpha(&rgba, 4, 4, 2, 128).len(), 4);
    // A zero step is treated as 1.
    assert_eq!(points_from_alpha(&rgba, 4, 4, 0, 128).len(), 16);
}

#[test]
fn faint_pixels_and_short_buffers_are_ignored() {
    let mut rgba = image(2, 2, &[]);
    rgba[3] = 127;
    assert!(points_from_alpha(&rgba, 2, 2, 1, 128).is_empty());
    assert!(points_from_alpha(&rgba[..8], 2, 2, 1, 0).is_empty());
}
