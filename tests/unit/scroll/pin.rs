use super::*;

fn range() -> ScrollRange {
    ScrollRange::new(0.0, 1600.0).unwrap()
}

#[test]
fn states_follow_range_membership() {
    let r = ScrollRange::new(100.0, 200.0).unwrap();
    assert_eq!(PinState::at(r, 99.0), PinState::Before);
    assert_eq!(PinState::at(r, 100.0), PinState::Pinned);
    assert_eq!(PinState::at(r, 200.0), PinState::Pinned);
    assert_eq!(PinState::at(r, 200.5), PinState::After);
}

#[test]
fn forward_and_reverse_scroll_report_transitions() {
    let mut pin = Pin::new();
    let r = ScrollRange::new(100.0, 200.0).unwrap();
    assert_eq!(pin.update(r, 50.0), None);
    assert_eq!(
        pin.update(r, 150.0),
        Some(PinTransition {
            from: PinState::Before,
            to: PinState::Pinned
        })
    );
    assert_eq!(pin.update(r, 160.0), None);
    assert_eq!(
        pin.update(r, 250.0),
        Some(PinTransition {
            from: PinState::Pinned,
            to: PinState::After
        })
    );
    assert_eq!(
        pin.update(r, 150.0).map(|t| t.to),
        Some(PinState::Pinned)
    );
    assert_eq!(pin.update(r, 0.0).map(|t| t.to), Some(PinState::Before));
}

#[test]
fn placement_fixes_top_then_releases_with_spacer() {
    let trigger = Rect::new(0.0, 0.0, 1280.0, 800.0);
    let mut pin = Pin::new();
    pin.update(range(), -1.0);
    assert_eq!(
        pin.placement(range(), trigger),
        PinPlacement::Flow { offset: 0.0 }
    );
    pin.update(range(), 800.0);
    assert_eq!(
        pin.placement(range(), trigger),
        PinPlacement::Fixed { top: 0.0 }
    );
    pin.update(range(), 5000.0);
    assert_eq!(
        pin.placement(range(), trigger),
        PinPlacement::Flow { offset: 1600.0 }
    );
}
