use super::*;
use crate::animation::{ease::Ease, tween::TweenVars};

const A: ElementId = ElementId(1);
const B: ElementId = ElementId(2);

fn vp() -> Viewport {
    Viewport::default()
}

fn fade_in(targets: &[ElementId]) -> TimelineStep {
    TimelineStep::from_to(
        targets.iter().copied(),
        TweenVars::new().opacity(0.0),
        TweenVars::new().opacity(1.0),
    )
    .ease(Ease::Linear)
    .duration(1.0)
}

#[test]
fn positions_parse() {
    assert_eq!("-=0.6".parse::<Position>().unwrap(), Position::FromEnd(-0.6));
    assert_eq!("+=1".parse::<Position>().unwrap(), Position::FromEnd(1.0));
    assert_eq!("0".parse::<Position>().unwrap(), Position::At(0.0));
    assert_eq!("<".parse::<Position>().unwrap(), Position::WithPrevious);
    assert_eq!("".parse::<Position>().unwrap(), Position::End);
    assert!("-1".parse::<Position>().is_err());
    assert!("-=abc".parse::<Position>().is_err());
}

#[test]
fn relative_positions_overlap_previous_end() {
    let tl = Timeline::builder()
        .add(fade_in(&[A]))
        .unwrap()
        .add(fade_in(&[B]).at(Position::FromEnd(-0.25)))
        .unwrap()
        .build();
    assert_eq!(tl.step_window(1), Some((0.75, 1.75)));
    assert_eq!(tl.duration(), 1.75);
}

#[test]
fn with_previous_shares_start() {
    let tl = Timeline::builder()
        .add(fade_in(&[A]).at(Position::At(0.5)))
        .unwrap()
        .add(fade_in(&[B]).at(Position::WithPrevious))
        .unwrap()
        .build();
    assert_eq!(tl.step_window(1), Some((0.5, 1.5)));
}

#[test]
fn from_state_renders_before_start() {
    let tl = Timeline::builder()
        .add(fade_in(&[A]).delay(0.5))
        .unwrap()
        .build();
    let before = tl.sample(A, 0.0, ElementTransform::RESTING, vp());
    assert_eq!(before.opacity, 0.0);
    let mid = tl.sample(A, 1.0, ElementTransform::RESTING, vp());
    assert!((mid.opacity - 0.5).abs() < 1e-12);
    let after = tl.sample(A, 10.0, ElementTransform::RESTING, vp());
    assert_eq!(after.opacity, 1.0);
}

#[test]
fn stagger_offsets_each_target() {
    let tl = Timeline::builder()
        .add(fade_in(&[A, B]).stagger(0.5))
        .unwrap()
        .build();
    let a = tl.sample(A, 0.5, ElementTransform::RESTING, vp());
    let b = tl.sample(B, 0.5, ElementTransform::RESTING, vp());
    assert!((a.opacity - 0.5).abs() < 1e-12);
    assert_eq!(b.opacity, 0.0);
    assert_eq!(tl.duration(), 1.5);
}

#[test]
fn to_steps_start_from_base() {
    let tl = Timeline::builder()
        .add(
            TimelineStep::to([A], TweenVars::new().y(-100.0))
                .ease(Ease::Linear)
                .duration(2.0),
        )
        .unwrap()
        .build();
    let base = ElementTransform {
        y: 20.0,
        ..ElementTransform::RESTING
    };
    assert_eq!(tl.sample(A, 0.0, base, vp()).y, 20.0);
    assert_eq!(tl.sample(A, 1.0, base, vp()).y, -40.0);
    assert_eq!(tl.sample(A, 2.0, base, vp()).y, -100.0);
}

#[test]
fn sequential_to_steps_chain_values() {
    let tl = Timeline::builder()
        .add(
            TimelineStep::to([A], TweenVars::new().x(100.0))
                .ease(Ease::Linear)
                .duration(1.0),
        )
        .unwrap()
        .add(
            TimelineStep::to([A], TweenVars::new().x(0.0))
                .ease(Ease::Linear)
                .duration(1.0),
        )
        .unwrap()
        .build();
    assert_eq!(tl.sample(A, 1.0, ElementTransform::RESTING, vp()).x, 100.0);
    assert_eq!(tl.sample(A, 1.5, ElementTransform::RESTING, vp()).x, 50.0);
}

#[test]
fn untargeted_elements_keep_base() {
    let tl = Timeline::builder().add(fade_in(&[A])).unwrap().build();
    let base = ElementTransform {
        scale: 3.0,
        ..ElementTransform::RESTING
    };
    assert_eq!(tl.sample(B, 0.5, base, vp()), base);
    assert!(tl.targets().contains(&A));
    assert!(!tl.targets().contains(&B));
}

#[test]
fn invalid_steps_are_rejected() {
    let err = Timeline::builder().add(fade_in(&[A]).duration(-1.0));
    assert!(err.is_err());
}

#[test]
fn sampling_is_frame_rate_independent() {
    let tl = Timeline::builder()
        .add(fade_in(&[A]).ease(Ease::OutCubic))
        .unwrap()
        .build();
    // Reaching t=0.4 through many small frames or one jump gives the same value.
    let mut last = ElementTransform::RESTING;
    for i in 0..=40 {
        last = tl.sample(A, i as f64 / 100.0, ElementTransform::RESTING, vp());
    }
    assert_eq!(last, tl.sample(A, 0.4, ElementTransform::RESTING, vp()));
}
