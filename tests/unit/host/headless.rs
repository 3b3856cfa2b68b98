use super::*;

#[test]
fn subscriptions_are_tracked_by_kind() {
    let mut host = HeadlessHost::new(Viewport::default());
    let a = host.subscribe(Subscription::FrameTicker);
    let b = host.subscribe(Subscription::ScrollListener);
    assert_ne!(a, b);
    assert_eq!(host.active_subscriptions(), 2);
    assert_eq!(host.subscriptions_of(Subscription::FrameTicker), 1);
    host.unsubscribe(a);
    host.unsubscribe(a);
    assert_eq!(host.active_subscriptions(), 1);
}

#[test]
fn writes_to_detached_elements_are_dropped() {
    let mut host = HeadlessHost::new(Viewport::default());
    let id = ElementId(7);
    host.attach(id, Rect::new(0.0, 0.0, 10.0, 10.0));
    host.apply_transform(id, &ElementTransform::RESTING);
    assert_eq!(host.writes(), 1);
    assert!(host.detach(id).is_some());
    assert!(!host.is_attached(id));
    host.apply_transform(id, &ElementTransform::RESTING);
    assert_eq!(host.writes(), 1);
    assert_eq!(host.measure(id), None);
}
