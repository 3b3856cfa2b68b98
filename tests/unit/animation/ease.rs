use super::*;

#[test]
fn endpoints_are_stable() {
    for ease in Ease::ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn monotonic_spot_check() {
    for ease in Ease::ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b, "{ease:?}");
        assert!(b < c, "{ease:?}");
    }
}

#[test]
fn input_is_clamped() {
    assert_eq!(Ease::OutCubic.apply(-1.0), 0.0);
    assert_eq!(Ease::OutCubic.apply(2.0), 1.0);
}

#[test]
fn in_out_curves_pass_through_midpoint() {
    for ease in [Ease::InOutQuad, Ease::InOutCubic, Ease::InOutQuart] {
        assert!((ease.apply(0.5) - 0.5).abs() < 1e-12, "{ease:?}");
    }
}

#[test]
fn decelerating_curves_lead_linear() {
    assert!(Ease::OutQuart.apply(0.3) > Ease::OutCubic.apply(0.3));
    assert!(Ease::OutCubic.apply(0.3) > Ease::Linear.apply(0.3));
    assert!((Ease::OutQuart.apply(0.5) - 0.9375).abs() < 1e-12);
}
