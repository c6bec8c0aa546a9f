mod common;

use common::*;
use glam::Vec3;
use lounge_core::*;

fn session() -> (Session<FakeBackend>, FakeBackend) {
    let backend = FakeBackend::new(128);
    // Share the recording handles with the test.
    let host = FakeBackend {
        calls: backend.calls.clone(),
        level: backend.level.clone(),
        ..FakeBackend::new(0)
    };
    let s = Session::new(&small_config(), backend, &[]).unwrap();
    (s, host)
}

#[test]
fn gesture_at_zero_reaches_active_and_starts_track_once() {
    let (mut s, host) = session();
    let mut r = RecordingRenderer::default();
    let total = small_config().transition.total_secs();

    s.assets_ready();
    assert_eq!(s.handle_gesture(secs(0.0)), GestureOutcome::Started);
    s.handle_gesture(secs(0.01));

    let mut t = 0.0;
    while t <= total + 0.1 {
        s.frame(secs(t), &mut r);
        t += 1.0 / 60.0;
    }
    assert_eq!(s.entry().state(), EntryState::Active);
    assert_eq!(host.calls.borrow().play, vec![TrackId(1)]);
    assert_eq!(host.calls.borrow().open_session, 1);
}

#[test]
fn drive_is_zero_until_active() {
    let (mut s, host) = session();
    let mut r = RecordingRenderer::default();
    host.set_level(200);

    s.assets_ready();
    s.handle_gesture(secs(0.0));
    let during = s.frame(secs(0.5), &mut r);
    assert_eq!(during.entry, EntryState::Transitioning);
    assert_eq!(during.drive, 0.0);

    let after = s.frame(secs(10.0), &mut r);
    assert_eq!(after.entry, EntryState::Active);
    assert!(after.drive > 0.0);
}

#[test]
fn silent_frames_keep_elements_at_rest() {
    let (mut s, _host) = session();
    let mut r = RecordingRenderer::default();
    s.assets_ready();
    s.handle_gesture(secs(0.0));
    s.frame(secs(10.0), &mut r);

    let elements = s.scheduler().elements();
    for (a, t) in elements.attrs().iter().zip(&r.last_transforms) {
        assert_eq!(*t, rest_pose(a.home, a));
    }
}

#[test]
fn next_track_is_ignored_before_entry_and_cycles_after() {
    let (mut s, _host) = session();
    assert_eq!(s.next_track(), None);
    s.assets_ready();
    s.handle_gesture(secs(0.0));
    let ids: Vec<_> = (0..5).filter_map(|_| s.next_track()).collect();
    assert_eq!(
        ids,
        vec![TrackId(2), TrackId(3), TrackId(1), TrackId(2), TrackId(3)]
    );
    assert_eq!(s.playback().current_id(), TrackId(3));
    assert_eq!(s.playback().sessions_opened(), 1);
}

#[test]
fn later_gesture_retries_blocked_start() {
    let mut backend = FakeBackend::new(128);
    backend.block_plays = 1;
    let calls = backend.calls.clone();
    let mut s = Session::new(&small_config(), backend, &[]).unwrap();
    s.assets_ready();

    assert_eq!(s.handle_gesture(secs(0.0)), GestureOutcome::Started);
    assert!(!s.playback().is_playing());
    assert_eq!(s.handle_gesture(secs(1.0)), GestureOutcome::AlreadyStarted);
    assert!(s.playback().is_playing());
    assert_eq!(calls.borrow().play, vec![TrackId(1)]);
}

#[test]
fn morph_moves_elements_from_intro_to_home() {
    let intro = vec![Vec3::new(1.0, 2.0, 0.0), Vec3::new(-1.0, -2.0, 0.0)];
    let mut s = Session::new(&small_config(), FakeBackend::new(128), &intro).unwrap();
    let mut r = RecordingRenderer::default();

    s.frame(secs(0.0), &mut r);
    let attrs = s.scheduler().elements().attrs().to_vec();
    assert_eq!(r.last_transforms[0].position, intro[0]);
    assert_eq!(r.last_transforms[1].position, intro[1]);

    s.assets_ready();
    s.handle_gesture(secs(0.0));
    s.frame(secs(10.0), &mut r);
    assert!((r.last_transforms[0].position - attrs[0].home).length() < 1e-3);
}

#[test]
fn hud_reports_lyric_and_progress() {
    let mut backend = FakeBackend::new(128);
    backend.position = Some(PlaybackPosition {
        current_secs: 6.0,
        duration_secs: 60.0,
    });
    let s = Session::new(&small_config(), backend, &[])
        .unwrap()
        .with_lyrics(LyricSheet::lounge_default());
    let hud = s.hud();
    assert_eq!(hud.track, TrackId(1));
    assert_eq!(hud.lyric, Some("WELCOME TO THE AFTER DARK LOUNGE"));
    assert!((hud.progress.unwrap() - 0.1).abs() < 1e-6);
}

#[test]
fn invalid_config_fails_at_construction() {
    let mut config = small_config();
    config.analysis.fft_size = 300;
    assert!(matches!(
        Session::new(&config, FakeBackend::new(128), &[]),
        Err(ConfigError::FftSize(300))
    ));
}

#[test]
fn later_gesture_retries_start_rejected_after_accept() {
    let mut backend = FakeBackend::new(128);
    backend.late_rejections = 1;
    let calls = backend.calls.clone();
    let mut s = Session::new(&small_config(), backend, &[]).unwrap();
    s.assets_ready();

    assert_eq!(s.handle_gesture(secs(0.0)), GestureOutcome::Started);
    assert!(!s.playback().is_playing());
    s.handle_gesture(secs(0.5));
    assert!(s.playback().is_playing());
    assert_eq!(calls.borrow().play, vec![TrackId(1), TrackId(1)]);
    assert_eq!(s.playback().sessions_opened(), 1);
}
