mod common;

use common::*;
use lounge_core::*;

fn controller(backend: FakeBackend) -> Result<PlaybackController<FakeBackend>, ConfigError> {
    let config = small_config();
    PlaybackController::new(
        backend,
        config.track_set()?,
        TrackId(config.initial_track),
        &config.analysis,
    )
}

#[test]
fn missing_audio_resource_is_fatal() {
    let mut backend = FakeBackend::new(128);
    backend.missing.push("audio-2".into());
    match controller(backend) {
        Err(e) => assert_eq!(e, ConfigError::MissingAudio(TrackId(2))),
        Ok(_) => panic!("expected missing audio error"),
    }
}

#[test]
fn unknown_initial_track_is_rejected() {
    let config = small_config();
    let res = PlaybackController::new(
        FakeBackend::new(128),
        config.track_set().unwrap(),
        TrackId(9),
        &config.analysis,
    );
    assert!(matches!(res, Err(ConfigError::UnknownInitialTrack(9))));
}

#[test]
fn session_is_opened_once_across_switches() {
    let backend = FakeBackend::new(128);
    let calls = backend.calls.clone();
    let mut pc = controller(backend).unwrap();
    assert!(!pc.has_session());

    assert!(pc.start(TrackId(1)));
    for _ in 0..4 {
        pc.switch_to_next();
    }
    assert_eq!(pc.sessions_opened(), 1);
    assert_eq!(calls.borrow().open_session, 1);
    assert_eq!(calls.borrow().play.len(), 5);
}

#[test]
fn five_switches_from_track_one_land_on_three() {
    let mut pc = controller(FakeBackend::new(128)).unwrap();
    pc.start(TrackId(1));
    for _ in 0..5 {
        pc.switch_to_next();
    }
    assert_eq!(pc.current_id(), TrackId(3));
}

#[test]
fn switch_stops_previous_track_first() {
    let backend = FakeBackend::new(128);
    let calls = backend.calls.clone();
    let mut pc = controller(backend).unwrap();
    pc.start(TrackId(1));
    assert!(pc.switch_to(TrackId(3)));
    let calls = calls.borrow();
    assert_eq!(calls.stop, vec![TrackId(1)]);
    assert_eq!(calls.play, vec![TrackId(1), TrackId(3)]);
}

#[test]
fn switch_to_unknown_track_keeps_current() {
    let mut pc = controller(FakeBackend::new(128)).unwrap();
    pc.start(TrackId(1));
    assert!(!pc.switch_to(TrackId(0)));
    assert_eq!(pc.current_id(), TrackId(1));
    assert!(pc.is_playing());
}

#[test]
fn blocked_playback_is_not_retried_automatically() {
    let mut backend = FakeBackend::new(128);
    backend.block_plays = 1;
    let calls = backend.calls.clone();
    let mut pc = controller(backend).unwrap();

    assert!(!pc.start(TrackId(1)));
    assert!(!pc.is_playing());
    // Session survives the rejection; nothing plays until asked again.
    assert!(pc.has_session());
    assert!(calls.borrow().play.is_empty());

    assert!(pc.start(TrackId(1)));
    assert_eq!(pc.sessions_opened(), 1);
}

#[test]
fn failed_session_leaves_controller_idle() {
    let mut backend = FakeBackend::new(128);
    backend.fail_session = true;
    let mut pc = controller(backend).unwrap();
    assert!(!pc.start(TrackId(1)));
    assert!(!pc.has_session());
    assert_eq!(pc.drive(20.0), 0.0);
    assert!(pc.sample().iter().all(|&b| b == 0));
}

#[test]
fn drive_follows_live_spectrum() {
    let backend = FakeBackend::new(128);
    let level = backend.level.clone();
    let mut pc = controller(backend).unwrap();
    assert_eq!(pc.drive(20.0), 0.0);

    pc.start(TrackId(1));
    level.borrow_mut().fill(40);
    assert!((pc.drive(20.0) - 2.0).abs() < 1e-6);
    level.borrow_mut().fill(0);
    assert_eq!(pc.drive(20.0), 0.0);

    level.borrow_mut().fill(40);
    pc.stop();
    assert_eq!(pc.drive(20.0), 0.0);
}

#[test]
fn progress_needs_known_duration() {
    let known = PlaybackPosition {
        current_secs: 30.0,
        duration_secs: 120.0,
    };
    assert_eq!(known.progress(), Some(0.25));
    let streaming = PlaybackPosition {
        current_secs: 30.0,
        duration_secs: f64::NAN,
    };
    assert_eq!(streaming.progress(), None);
}

#[test]
fn starting_another_track_stops_the_playing_one() {
    let backend = FakeBackend::new(128);
    let calls = backend.calls.clone();
    let mut pc = controller(backend).unwrap();
    pc.start(TrackId(1));
    assert!(pc.start(TrackId(2)));
    assert_eq!(pc.current_id(), TrackId(2));
    let calls = calls.borrow();
    assert_eq!(calls.stop, vec![TrackId(1)]);
    assert_eq!(calls.play, vec![TrackId(1), TrackId(2)]);
}

#[test]
fn restarting_current_track_does_not_stop_it() {
    let backend = FakeBackend::new(128);
    let calls = backend.calls.clone();
    let mut pc = controller(backend).unwrap();
    pc.start(TrackId(1));
    pc.start(TrackId(1));
    assert!(calls.borrow().stop.is_empty());
}

#[test]
fn host_rejection_after_accept_clears_playing() {
    let mut backend = FakeBackend::new(128);
    backend.late_rejections = 1;
    backend.set_level(100);
    let mut pc = controller(backend).unwrap();

    assert!(pc.start(TrackId(1)));
    assert!(!pc.is_playing());
    assert_eq!(pc.drive(20.0), 0.0);

    assert!(pc.start(TrackId(1)));
    assert!(pc.is_playing());
    assert!(pc.drive(20.0) > 0.0);
}
