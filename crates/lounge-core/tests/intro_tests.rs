use glam::Vec3;
use lounge_core::constants::FALLBACK_RING_POINTS;
use lounge_core::*;

struct Grid;

impl PointCloudSampler for Grid {
    fn sample(&self, _text: &str) -> Result<Vec<Vec3>, PointCloudError> {
        Ok((0..10)
            .flat_map(|x| (0..3).map(move |y| Vec3::new(x as f32 * 10.0, y as f32 * 10.0, 0.0)))
            .collect())
    }
}

struct Broken(PointCloudError);

impl PointCloudSampler for Broken {
    fn sample(&self, _text: &str) -> Result<Vec<Vec3>, PointCloudError> {
        Err(self.0.clone())
    }
}

#[test]
fn sampled_text_is_centred_and_fitted() {
    let pts = build_intro(Some("AFTER DARK"), &Grid, 900.0);
    assert_eq!(pts.len(), 30);
    let min_x = pts.iter().map(|p| p.x).fold(f32::MAX, f32::min);
    let max_x = pts.iter().map(|p| p.x).fold(f32::MIN, f32::max);
    assert!((max_x - min_x - 900.0).abs() < 1e-2);
    assert!((max_x + min_x).abs() < 1e-2);
}

#[test]
fn sampler_failure_substitutes_ring() {
    for err in [PointCloudError::Empty, PointCloudError::Unavailable("font".into())] {
        let pts = build_intro(Some("AFTER DARK"), &Broken(err), 900.0);
        assert_eq!(pts.len(), FALLBACK_RING_POINTS);
    }
}

#[test]
fn no_text_means_no_intro_shape() {
    assert!(build_intro(None, &Grid, 900.0).is_empty());
}

#[test]
fn fallback_ring_is_flat_and_bounded() {
    let ring = fallback_ring(300);
    assert_eq!(ring.len(), 300);
    for p in &ring {
        assert_eq!(p.z, 0.0);
        let r = p.truncate().length();
        assert!(r > 200.0 && r < 300.0);
    }
    assert_eq!(fallback_ring(0).len(), 1);
}

#[test]
fn lyric_lookup_picks_latest_cue() {
    let sheet = LyricSheet::lounge_default();
    assert_eq!(sheet.line_at(TrackId(3), 0.0), Some("WARP DRIVE ENGAGED"));
    assert_eq!(sheet.line_at(TrackId(3), 3.5), Some("GO HARD OR GO HOME"));
    assert_eq!(sheet.line_at(TrackId(3), 600.0), Some("PURE SOVEREIGN INTELLIGENCE"));
    assert_eq!(sheet.line_at(TrackId(7), 1.0), None);
}

#[test]
fn lyric_cues_are_sorted_on_insert() {
    let mut sheet = LyricSheet::default();
    let cue = |at_secs: f64, text: &str| LyricCue {
        at_secs,
        text: text.into(),
    };
    sheet.insert(TrackId(1), vec![cue(9.0, "late"), cue(2.0, "early")]);
    assert_eq!(sheet.line_at(TrackId(1), 0.0), Some("early"));
    assert_eq!(sheet.line_at(TrackId(1), 9.5), Some("late"));
}

#[test]
fn new_lyric_line_fades_in_while_rising() {
    use std::time::Duration;
    let mut fade = LineFade::default();
    assert_eq!(fade.opacity(Duration::ZERO), 1.0);
    assert!(fade.is_settled(Duration::ZERO));

    let shown = Duration::from_secs(4);
    fade.restart(shown);
    assert_eq!(fade.opacity(shown), 0.0);
    assert_eq!(fade.offset_px(shown), 20.0);
    assert!(!fade.is_settled(shown));

    let half = shown + Duration::from_millis(500);
    assert!((fade.opacity(half) - 0.75).abs() < 1e-4);
    assert!((fade.offset_px(half) - 5.0).abs() < 1e-3);

    let done = shown + Duration::from_secs(1);
    assert_eq!(fade.opacity(done), 1.0);
    assert_eq!(fade.offset_px(done), 0.0);
    assert!(fade.is_settled(done));
}
