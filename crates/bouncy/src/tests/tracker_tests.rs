use super::*;

use bouncy_graphics::{Point, Rect, Size};

fn surface_rect() -> Rect {
    Rect::from_size(Size::new(100.0, 100.0))
}

fn event(kind: PointerEventKind, x: f32, y: f32) -> PointerEvent {
    PointerEvent::new(1, kind, Point::new(x, y))
}

#[test]
fn binds_on_first_event_and_rejects_other_surfaces() {
    let mut tracker = TouchTracker::new(10.0);
    assert_eq!(tracker.bound_surface(), None);

    tracker
        .handle_event(&event(PointerEventKind::Down, 50.0, 50.0), surface_rect())
        .expect("first event binds");
    assert_eq!(tracker.bound_surface(), Some(1));

    let other = PointerEvent::new(2, PointerEventKind::Down, Point::new(50.0, 50.0));
    let err = tracker
        .handle_event(&other, surface_rect())
        .expect_err("second surface is a usage error");
    assert_eq!(
        err,
        BounceError::IllegalBinding {
            bound: 1,
            offered: 2
        }
    );
}

#[test]
fn down_then_up_engages_then_releases_with_click() {
    let mut tracker = TouchTracker::new(10.0);

    let (consumed, signal) = tracker
        .handle_event(&event(PointerEventKind::Down, 50.0, 50.0), surface_rect())
        .expect("down");
    assert!(consumed);
    assert_eq!(signal, Some(TouchSignal::Engage));
    assert!(tracker.is_touching());

    let (consumed, signal) = tracker
        .handle_event(&event(PointerEventKind::Up, 50.0, 50.0), surface_rect())
        .expect("up");
    assert!(consumed);
    assert_eq!(signal, Some(TouchSignal::Release { clicked: true }));
    assert!(!tracker.is_touching());
}

#[test]
fn cancel_releases_without_click() {
    let mut tracker = TouchTracker::new(10.0);
    tracker
        .handle_event(&event(PointerEventKind::Down, 50.0, 50.0), surface_rect())
        .expect("down");

    let (consumed, signal) = tracker
        .handle_event(&event(PointerEventKind::Cancel, 50.0, 50.0), surface_rect())
        .expect("cancel");
    assert!(consumed);
    assert_eq!(signal, Some(TouchSignal::Release { clicked: false }));
}

#[test]
fn tolerance_boundary_is_inclusive() {
    let mut tracker = TouchTracker::new(10.0);
    tracker
        .handle_event(&event(PointerEventKind::Down, 0.0, 0.0), surface_rect())
        .expect("down");

    // 100-wide surface plus 10 threshold: x = 110 is exactly on the edge.
    let (consumed, signal) = tracker
        .handle_event(&event(PointerEventKind::Move, 110.0, 50.0), surface_rect())
        .expect("move on boundary");
    assert!(consumed);
    assert_eq!(signal, None);
    assert!(tracker.is_touching());

    // One unit further out cancels the press.
    let (consumed, signal) = tracker
        .handle_event(&event(PointerEventKind::Move, 111.0, 50.0), surface_rect())
        .expect("move outside");
    assert!(consumed);
    assert_eq!(signal, Some(TouchSignal::Release { clicked: false }));
    assert!(!tracker.is_touching());

    // The press already ended; a trailing Up is not this tracker's event.
    let (consumed, signal) = tracker
        .handle_event(&event(PointerEventKind::Up, 111.0, 50.0), surface_rect())
        .expect("trailing up");
    assert!(!consumed);
    assert_eq!(signal, None);
}

#[test]
fn move_and_up_without_prior_down_are_not_consumed() {
    let mut tracker = TouchTracker::new(10.0);

    let (consumed, signal) = tracker
        .handle_event(&event(PointerEventKind::Move, 50.0, 50.0), surface_rect())
        .expect("move without down");
    assert!(!consumed);
    assert_eq!(signal, None);

    let (consumed, _) = tracker
        .handle_event(&event(PointerEventKind::Up, 50.0, 50.0), surface_rect())
        .expect("up without down");
    assert!(!consumed);
}

#[test]
fn tolerance_rect_stays_anchored_at_bind_time() {
    let mut tracker = TouchTracker::new(10.0);
    tracker
        .handle_event(&event(PointerEventKind::Down, 50.0, 50.0), surface_rect())
        .expect("down");

    // The surface has since moved far to the right; its center no longer
    // falls inside the bind-time tolerance rect, so the press is cancelled.
    let moved = surface_rect().translate(300.0, 0.0);
    let (consumed, signal) = tracker
        .handle_event(&event(PointerEventKind::Move, 50.0, 50.0), moved)
        .expect("move on relocated surface");
    assert!(consumed);
    assert_eq!(signal, Some(TouchSignal::Release { clicked: false }));
}

#[test]
fn non_finite_position_is_rejected() {
    let mut tracker = TouchTracker::new(10.0);
    let err = tracker
        .handle_event(
            &event(PointerEventKind::Down, f32::NAN, 0.0),
            surface_rect(),
        )
        .expect_err("nan position");
    assert!(matches!(err, BounceError::InvalidArgument { field, .. } if field == "position"));
    // The rejected event did not bind the tracker.
    assert_eq!(tracker.bound_surface(), None);
}
