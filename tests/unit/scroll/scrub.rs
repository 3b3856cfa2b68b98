use super::*;

#[test]
fn zero_lag_tracks_instantly() {
    let mut s = Scrub::new(0.0).unwrap();
    s.set_target(0.7);
    assert_eq!(s.value(), 0.7);
    assert_eq!(s.advance(0.0), 0.7);
}

#[test]
fn rejects_negative_lag() {
    assert!(Scrub::new(-0.1).is_err());
    assert!(Scrub::new(f64::NAN).is_err());
}

#[test]
fn step_change_approaches_without_overshoot() {
    let mut s = Scrub::new(1.5).unwrap();
    s.set_target(1.0);
    let mut last = s.value();
    for _ in 0..30 {
        let v = s.advance(1.0 / 60.0);
        assert!(v >= last, "smoothed value must not move backwards");
        assert!(v <= 1.0, "smoothed value must not overshoot");
        last = v;
    }
    assert!(last > 0.0 && last < 1.0);
}

#[test]
fn converges_exactly_once_scrolling_stops() {
    let mut s = Scrub::new(1.5).unwrap();
    s.set_target(0.5);
    for _ in 0..(60 * 5) {
        s.advance(1.0 / 60.0);
    }
    assert!(s.is_settled());
    assert_eq!(s.value(), 0.5);
}

#[test]
fn catch_up_after_lag_is_nearly_complete() {
    let mut s = Scrub::new(1.5).unwrap();
    s.set_target(1.0);
    let v = s.advance(1.5);
    assert!(v > 0.99 && v < 1.0);
}

#[test]
fn reversal_approaches_from_above() {
    let mut s = Scrub::new(1.0).unwrap();
    s.jump_to(1.0);
    s.set_target(0.0);
    let v = s.advance(0.1);
    assert!(v < 1.0 && v > 0.0);
}

#[test]
fn negative_dt_is_ignored() {
    let mut s = Scrub::new(1.0).unwrap();
    s.set_target(1.0);
    assert_eq!(s.advance(-5.0), 0.0);
}
