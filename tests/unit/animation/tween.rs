use super::*;

fn vp() -> Viewport {
    Viewport::new(1000.0, 500.0).unwrap()
}

#[test]
fn blend_only_touches_set_properties() {
    let vars = TweenVars::new().y(-100.0).opacity(0.0);
    let out = vars.blend(ElementTransform::RESTING, 0.5, vp());
    assert_eq!(out.x, 0.0);
    assert_eq!(out.y, -50.0);
    assert_eq!(out.scale, 1.0);
    assert_eq!(out.opacity, 0.5);
}

#[test]
fn apply_resolves_viewport_lengths() {
    let vars = TweenVars::new().x(Length::Vw(-15.0)).y(Length::Vh(5.0));
    let out = vars.apply_to(ElementTransform::RESTING, vp());
    assert_eq!(out.x, -150.0);
    assert_eq!(out.y, 25.0);
}

#[test]
fn transform_lerp_is_componentwise() {
    let a = ElementTransform::RESTING;
    let b = ElementTransform {
        x: 10.0,
        y: 20.0,
        scale: 2.0,
        rotation_deg: -4.0,
        opacity: 0.0,
    };
    let mid = ElementTransform::lerp(&a, &b, 0.5);
    assert_eq!(mid.x, 5.0);
    assert_eq!(mid.y, 10.0);
    assert_eq!(mid.scale, 1.5);
    assert_eq!(mid.rotation_deg, -2.0);
    assert_eq!(mid.opacity, 0.5);
}

#[test]
fn step_span_accounts_for_stagger_and_delay() {
    let ids = [ElementId(1), ElementId(2), ElementId(3)];
    let step = TimelineStep::to(ids, TweenVars::new().opacity(1.0))
        .duration(1.2)
        .stagger(0.2)
        .delay(0.2);
    assert!((step.span() - 2.0).abs() < 1e-12);
    assert!((step.target_offset(2) - 0.6).abs() < 1e-12);
}

#[test]
fn zero_duration_steps_jump() {
    let step = TimelineStep::to([ElementId(1)], TweenVars::new().opacity(1.0)).duration(0.0);
    assert_eq!(step.local_progress(-0.1), 0.0);
    assert_eq!(step.local_progress(0.0), 1.0);
}

#[test]
fn validate_rejects_bad_timing_and_values() {
    let base = TimelineStep::to([ElementId(1)], TweenVars::new().opacity(1.0));
    assert!(base.clone().validate().is_ok());
    assert!(base.clone().duration(-1.0).validate().is_err());
    assert!(base.clone().stagger(f64::INFINITY).validate().is_err());
    assert!(
        TimelineStep::to([ElementId(1)], TweenVars::new())
            .validate()
            .is_err()
    );
    assert!(
        TimelineStep::to([ElementId(1)], TweenVars::new().opacity(1.5))
            .validate()
            .is_err()
    );
    assert!(
        TimelineStep::from_to(
            [ElementId(1)],
            TweenVars::new().y(f64::NAN),
            TweenVars::new().y(0.0)
        )
        .validate()
        .is_err()
    );
}
