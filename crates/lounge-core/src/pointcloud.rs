use crate::constants::{FALLBACK_RING_POINTS, FALLBACK_RING_RADIUS, FALLBACK_RING_THICKNESS};
use crate::error::PointCloudError;
use glam::Vec3;

/// External text-to-point-cloud sampler.
pub trait PointCloudSampler {
    fn sample(&self, text: &str) -> Result<Vec<Vec3>, PointCloudError>;
}

/// Placeholder intro shape: `count` points on a flat ring around the origin.
pub fn fallback_ring(count: usize) -> Vec<Vec3> {
    let count = count.max(1);
    (0..count)
        .map(|i| {
            let a = i as f32 / count as f32 * std::f32::consts::TAU;
            // Three concentric bands give the ring some body.
            let band = (i % 3) as f32 - 1.0;
            let r = FALLBACK_RING_RADIUS + band * FALLBACK_RING_THICKNESS * 0.5;
            Vec3::new(r * a.cos(), r * a.sin(), 0.0)
        })
        .collect()
}

/// Centre points on the origin and scale them uniformly to `width`.
pub fn fit_to_width(points: &mut [Vec3], width: f32) {
    if points.is_empty() {
        return;
    }
    let (min, max) = points
        .iter()
        .fold((Vec3::splat(f32::MAX), Vec3::splat(f32::MIN)), |(lo, hi), p| {
            (lo.min(*p), hi.max(*p))
        });
    let center = (min + max) * 0.5;
    let extent = (max.x - min.x).max(max.y - min.y);
    let scale = if extent > f32::EPSILON {
        width / extent
    } else {
        1.0
    };
    for p in points.iter_mut() {
        *p = (*p - center) * scale;
    }
}

/// Use the sampled cloud, or the ring placeholder if sampling failed.
pub fn resolve_intro(sampled: Result<Vec<Vec3>, PointCloudError>, fallback_count: usize) -> Vec<Vec3> {
    match sampled {
        Ok(points) if !points.is_empty() => {
            log::info!("[intro] point cloud ready ({} points)", points.len());
            points
        }
        Ok(_) => {
            log::warn!("[intro] {}; using fallback ring", PointCloudError::Empty);
            fallback_ring(fallback_count)
        }
        Err(e) => {
            log::warn!("[intro] {}; using fallback ring", e);
            fallback_ring(fallback_count)
        }
    }
}

/// Sample `text` into an intro cloud fitted to `width`, falling back to the
/// ring on failure. No text means no intro shape (empty result).
pub fn build_intro<S: PointCloudSampler + ?Sized>(text: Option<&str>, sampler: &S, width: f32) -> Vec<Vec3> {
    let Some(text) = text else {
        return Vec::new();
    };
    let sampled = sampler.sample(text).map(|mut points| {
        fit_to_width(&mut points, width);
        points
    });
    resolve_intro(sampled, FALLBACK_RING_POINTS)
}
