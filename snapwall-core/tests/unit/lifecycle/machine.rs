use super::*;

fn still() -> ImageData {
    ImageData::new(vec![0xAA; 8])
}

fn capture_at(machine: &mut Lifecycle, now: u64) -> PhotoId {
    machine
        .begin_capture(still(), "hold still".to_string(), TimeMs(now))
        .expect("capture from idle must be admitted")
}

fn drag_current_to(machine: &mut Lifecycle, x: f64, y: f64) {
    machine
        .current_mut()
        .expect("a current photo is required")
        .position = Point::new(x, y);
}

#[test]
fn capture_from_idle_starts_ejecting_at_origin() {
    let mut machine = Lifecycle::new();
    assert_eq!(machine.phase(), Phase::Idle);

    let id = capture_at(&mut machine, 0);
    let current = machine.current().unwrap();
    assert_eq!(machine.phase(), Phase::Ejecting);
    assert_eq!(current.id(), id);
    assert_eq!(current.position(), Point::ZERO);
    assert!(current.is_developing());
}

#[test]
fn capture_while_in_flight_is_rejected() {
    let mut machine = Lifecycle::new();
    let first = capture_at(&mut machine, 0);

    for now in [0, 1_500, 3_500] {
        machine.advance_to(TimeMs(now));
        let rejected = machine.begin_capture(still(), "again".to_string(), TimeMs(now));
        assert_eq!(rejected, None);
        assert_eq!(machine.current().unwrap().id(), first);
    }
}

#[test]
fn eject_completes_after_one_second() {
    let mut machine = Lifecycle::new();
    capture_at(&mut machine, 0);

    machine.advance_to(TimeMs(999));
    assert_eq!(machine.phase(), Phase::Ejecting);

    machine.advance_to(TimeMs(1_000));
    assert_eq!(machine.phase(), Phase::Developing);
    assert!(machine.current().unwrap().is_developing());
}

#[test]
fn develop_completes_three_seconds_after_capture() {
    let mut machine = Lifecycle::new();
    capture_at(&mut machine, 500);

    machine.advance_to(TimeMs(3_499));
    assert_eq!(machine.phase(), Phase::Developing);
    assert!(machine.current().unwrap().is_developing());

    machine.advance_to(TimeMs(3_500));
    assert_eq!(machine.phase(), Phase::Developed);
    assert!(!machine.current().unwrap().is_developing());
}

#[test]
fn one_big_jump_applies_both_transitions_in_order() {
    let mut machine = Lifecycle::new();
    capture_at(&mut machine, 0);

    machine.advance_to(TimeMs(60_000));
    assert_eq!(machine.phase(), Phase::Developed);
    assert!(!machine.current().unwrap().is_developing());
}

#[test]
fn release_at_origin_keeps_photo_current() {
    let mut machine = Lifecycle::new();
    let id = capture_at(&mut machine, 0);

    assert!(!machine.release_current().unwrap());
    assert_eq!(machine.phase(), Phase::Ejecting);
    assert_eq!(machine.current().unwrap().id(), id);
    assert!(machine.wall().is_empty());
}

#[test]
fn release_after_move_places_photo_on_wall() {
    let mut machine = Lifecycle::new();
    let id = capture_at(&mut machine, 0);
    drag_current_to(&mut machine, 120.0, 340.0);

    assert!(machine.release_current().unwrap());
    assert_eq!(machine.phase(), Phase::Idle);
    assert!(machine.current().is_none());

    let placed = machine.wall().get(id).unwrap();
    assert_eq!(placed.position(), Point::new(120.0, 340.0));
    assert_eq!(machine.wall().len(), 1);
}

#[test]
fn promotion_is_allowed_before_develop_finishes() {
    let mut machine = Lifecycle::new();
    let id = capture_at(&mut machine, 0);

    // Still ejecting; the user grabs the photo as soon as it appears.
    drag_current_to(&mut machine, 40.0, 60.0);
    assert!(machine.release_current().unwrap());
    assert!(machine.wall().get(id).unwrap().is_developing());
}

#[test]
fn stale_develop_timer_never_touches_a_wall_photo() {
    let mut machine = Lifecycle::new();
    let id = capture_at(&mut machine, 0);

    machine.advance_to(TimeMs(500));
    drag_current_to(&mut machine, 30.0, 30.0);
    machine.release_current().unwrap();

    machine.advance_to(TimeMs(10_000));
    assert_eq!(machine.phase(), Phase::Idle);
    assert!(machine.wall().get(id).unwrap().is_developing());
}

#[test]
fn stale_timers_never_touch_a_newer_capture() {
    let mut machine = Lifecycle::new();
    capture_at(&mut machine, 0);

    // Place the first photo early, then start a second capture.
    machine.advance_to(TimeMs(500));
    drag_current_to(&mut machine, 10.0, 10.0);
    machine.release_current().unwrap();
    let second = capture_at(&mut machine, 600);

    // First photo's eject timer fires at 1000; the second is still ejecting.
    machine.advance_to(TimeMs(1_000));
    assert_eq!(machine.phase(), Phase::Ejecting);

    machine.advance_to(TimeMs(1_600));
    assert_eq!(machine.phase(), Phase::Developing);

    // First photo's develop timer fires at 3000; the second keeps developing.
    machine.advance_to(TimeMs(3_000));
    assert!(machine.current().unwrap().is_developing());

    machine.advance_to(TimeMs(3_600));
    assert_eq!(machine.phase(), Phase::Developed);
    assert!(!machine.current().unwrap().is_developing());
    assert_eq!(machine.current().unwrap().id(), second);
}

#[test]
fn developing_never_reverts_once_cleared() {
    let mut machine = Lifecycle::new();
    capture_at(&mut machine, 0);
    machine.advance_to(TimeMs(3_000));
    assert!(!machine.current().unwrap().is_developing());

    machine.advance_to(TimeMs(100_000));
    assert!(!machine.current().unwrap().is_developing());
    assert_eq!(machine.phase(), Phase::Developed);
}

#[test]
fn ids_are_unique_across_wall_and_current() {
    let mut machine = Lifecycle::new();
    let mut seen = Vec::new();
    for i in 0..5 {
        let id = capture_at(&mut machine, i * 100);
        drag_current_to(&mut machine, 1.0 + i as f64, 2.0);
        machine.release_current().unwrap();
        seen.push(id);
    }

    let mut wall_ids: Vec<PhotoId> = machine.wall().iter().map(Photo::id).collect();
    assert_eq!(wall_ids, seen);
    wall_ids.dedup();
    assert_eq!(wall_ids.len(), 5);
}
