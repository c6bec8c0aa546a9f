use glam::Vec3;

/// Collect points where an RGBA image is opaque enough.
///
/// Samples every `step`-th pixel on both axes. Image rows run downward, so y
/// is flipped to keep the text upright in world space. z is 0.
pub fn points_from_alpha(rgba: &[u8], width: usize, height: usize, step: usize, threshold: u8) -> Vec<Vec3> {
    let step = step.max(1);
    if rgba.len() < width * height * 4 {
        return Vec::new();
    }
    let mut points = Vec::new();
    for y in (0..height).step_by(step) {
        for x in (0..width).step_by(step) {
            let alpha = rgba[(y * width + x) * 4 + 3];
            if alpha >= threshold {
                points.push(Vec3::new(x as f32, -(y as f32), 0.0));
            }
        }
    }
    points
}
