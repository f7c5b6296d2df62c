// Host-side tests for the small UI effect models: tilt, tagline, beep, form.

use fx_core::constants::*;
use fx_core::*;

#[test]
fn tilt_is_flat_at_center() {
    let t = Tilt::from_pointer_default(100.0, 50.0, 200.0, 100.0);
    assert_eq!(t, Tilt::FLAT);
}

#[test]
fn tilt_reaches_max_at_corners() {
    let top_left = Tilt::from_pointer_default(0.0, 0.0, 200.0, 100.0);
    assert_eq!(top_left.rotate_x, TILT_MAX_DEG);
    assert_eq!(top_left.rotate_y, -TILT_MAX_DEG);

    let bottom_right = Tilt::from_pointer_default(200.0, 100.0, 200.0, 100.0);
    assert_eq!(bottom_right.rotate_x, -TILT_MAX_DEG);
    assert_eq!(bottom_right.rotate_y, TILT_MAX_DEG);
}

#[test]
fn tilt_on_zero_sized_box_is_flat() {
    assert_eq!(Tilt::from_pointer_default(5.0, 5.0, 0.0, 100.0), Tilt::FLAT);
    assert_eq!(Tilt::from_pointer_default(5.0, 5.0, 100.0, 0.0), Tilt::FLAT);
}

#[test]
fn tilt_css_transform() {
    assert_eq!(
        Tilt::FLAT.css_transform(),
        "perspective(1000px) rotateX(0deg) rotateY(0deg)"
    );
    let t = Tilt {
        rotate_x: 2.5,
        rotate_y: -5.0,
    };
    assert_eq!(
        t.css_transform(),
        "perspective(1000px) rotateX(2.5deg) rotateY(-5deg)"
    );
}

#[test]
fn tagline_rotation_wraps() {
    let mut r = TaglineRotator::default();
    assert_eq!(r.current(), Some("Where Intelligence Dominates"));
    assert_eq!(r.advance(), Some("Systems That Think"));
    assert_eq!(r.advance(), Some("Evolution Under Pressure"));
    assert_eq!(r.advance(), Some("Data > Instinct"));
    assert_eq!(r.advance(), Some("Where Intelligence Dominates"));
    assert_eq!(r.index(), 0);
}

#[test]
fn empty_tagline_list_has_nothing_to_show() {
    let mut r = TaglineRotator::new(Vec::<String>::new());
    assert_eq!(r.current(), None);
    assert_eq!(r.advance(), None);
}

#[test]
fn beep_ramps_exponentially() {
    let beep = Beep::default();
    assert!((beep.frequency_at(0.0) - BEEP_START_HZ).abs() < 1e-3);
    assert!((beep.frequency_at(BEEP_DURATION_SEC) - BEEP_END_HZ).abs() < 1e-3);
    let mid = beep.frequency_at(BEEP_DURATION_SEC / 2.0);
    assert!((mid - (BEEP_START_HZ * BEEP_END_HZ).sqrt()).abs() < 0.01);
    assert!((beep.gain_at(0.0) - BEEP_GAIN).abs() < 1e-6);
    assert!((beep.gain_at(1.0) - BEEP_GAIN_FLOOR).abs() < 1e-6);
    assert!((beep.stop_time(2.0) - 2.1).abs() < 1e-9);
}

#[test]
fn audio_gate_unlocks_on_first_gesture() {
    let mut gate = AudioGate::default();
    assert!(!gate.can_play());
    gate.on_suspended();
    assert_eq!(gate, AudioGate::Locked);

    assert_eq!(gate.on_gesture(), GateAction::CreateContext);
    assert!(gate.can_play());
    assert_eq!(gate.on_gesture(), GateAction::None);

    gate.on_suspended();
    assert!(!gate.can_play());
    assert_eq!(gate.on_gesture(), GateAction::Resume);
    assert!(gate.can_play());
}

#[test]
fn form_flow_round_trip() {
    let mut flow = FormFlow::default();
    let started = flow.submit("Send").expect("idle form accepts submit");
    assert_eq!(started.busy_label, FORM_BUSY_LABEL);
    assert!(flow.submit("Transmitting...").is_none(), "no double submit");

    assert_eq!(flow.transmitted(started.ticket), Some("Send".to_string()));
    assert_eq!(flow.phase(), &FormPhase::Confirmed);
    assert!(flow.dismiss(started.ticket));
    assert_eq!(flow.phase(), &FormPhase::Idle);
}

#[test]
fn stale_timers_do_not_touch_newer_submission() {
    let mut flow = FormFlow::default();
    let first = flow.submit("Send").unwrap();
    assert!(flow.transmitted(first.ticket).is_some());

    let second = flow.submit("Send").expect("confirmed form accepts resubmit");
    assert!(!flow.dismiss(first.ticket));
    assert!(flow.transmitted(first.ticket).is_none());
    assert!(matches!(flow.phase(), FormPhase::Transmitting { .. }));

    assert_eq!(flow.transmitted(second.ticket), Some("Send".to_string()));
    assert!(flow.dismiss(second.ticket));
}

#[test]
fn viewport_never_collapses() {
    let vp = Viewport::new(0.0, -5.0);
    assert_eq!((vp.width, vp.height), (1.0, 1.0));
    assert_eq!(Viewport::new(800.0, 600.0).center(), glam::Vec2::new(400.0, 300.0));
}

#[test]
fn backing_size_truncates_and_never_collapses() {
    assert_eq!(backing_size(1024.7, 768.2), (1024, 768));
    assert_eq!(backing_size(0.0, -3.0), (1, 1));
}
