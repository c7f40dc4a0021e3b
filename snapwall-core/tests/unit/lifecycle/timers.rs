use super::*;

#[test]
fn take_due_returns_entries_in_due_order() {
    let mut queue = TimerQueue::new();
    queue.schedule(TimeMs(3_000), PhotoId(1), TimerKind::DevelopDone);
    queue.schedule(TimeMs(1_000), PhotoId(1), TimerKind::EjectDone);

    let due = queue.take_due(TimeMs(5_000));
    assert_eq!(due.len(), 2);
    assert_eq!(due[0].kind, TimerKind::EjectDone);
    assert_eq!(due[1].kind, TimerKind::DevelopDone);
    assert!(queue.is_empty());
}

#[test]
fn take_due_leaves_future_entries_pending() {
    let mut queue = TimerQueue::new();
    queue.schedule(TimeMs(1_000), PhotoId(1), TimerKind::EjectDone);
    queue.schedule(TimeMs(3_000), PhotoId(1), TimerKind::DevelopDone);

    let due = queue.take_due(TimeMs(1_000));
    assert_eq!(due.len(), 1);
    assert_eq!(due[0].kind, TimerKind::EjectDone);
    assert_eq!(queue.len(), 1);

    assert!(queue.take_due(TimeMs(2_999)).is_empty());
    assert_eq!(queue.take_due(TimeMs(3_000)).len(), 1);
}

#[test]
fn entries_keep_their_photo_tag() {
    let mut queue = TimerQueue::new();
    queue.schedule(TimeMs(10), PhotoId(4), TimerKind::EjectDone);
    let due = queue.take_due(TimeMs(10));
    assert_eq!(due[0].photo, PhotoId(4));
    assert_eq!(due[0].due, TimeMs(10));
}
