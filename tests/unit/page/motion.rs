use super::*;
use crate::{
    foundation::core::{ElementTransform, Viewport},
    page::{config::PageConfig, layout::PageLayout},
    scroll::trigger::{Edge, EdgePair, TriggerEnd},
};

fn targets() -> HeroTargets {
    PageLayout::build(&PageConfig::default()).unwrap().targets
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn intro_schedule_overlaps_previous_steps() {
    let tl = intro_timeline(&targets()).unwrap();
    let windows: Vec<_> = (0..3).map(|i| tl.step_window(i).unwrap()).collect();
    assert!(close(windows[0].0, 0.0) && close(windows[0].1, 1.8));
    assert!(close(windows[1].0, 1.2) && close(windows[1].1, 2.3));
    assert!(close(windows[2].0, 1.5) && close(windows[2].1, 3.0));
    assert!(close(tl.duration(), 3.0));
}

#[test]
fn intro_starts_invisible_and_ends_resting() {
    let t = targets();
    let tl = intro_timeline(&t).unwrap();
    let vp = Viewport::default();
    let rest = ElementTransform::RESTING;

    for id in t.headline_words.iter().chain(&t.stat_items).chain([&t.hero_image]) {
        assert_eq!(tl.sample(*id, 0.0, rest, vp).opacity, 0.0, "{id}");
        assert!(tl.sample(*id, 3.0, rest, vp).approx_eq(&rest, 1e-12), "{id}");
    }
    let first = tl.sample(t.headline_words[0], 0.0, rest, vp);
    assert_eq!((first.y, first.scale), (50.0, 0.9));
    let hero = tl.sample(t.hero_image, 1.0, rest, vp);
    assert_eq!((hero.y, hero.scale), (150.0, 0.85));
}

#[test]
fn headline_stagger_completes_before_stats_finish() {
    let t = targets();
    let tl = intro_timeline(&t).unwrap();
    let vp = Viewport::default();
    let rest = ElementTransform::RESTING;
    for id in &t.headline_words {
        assert!(tl.sample(*id, 1.8, rest, vp).approx_eq(&rest, 1e-12));
    }
    let last_word = tl.sample(t.headline_words[2], 1.7, rest, vp);
    assert!(last_word.opacity < 1.0);
    let last_stat = tl.sample(t.stat_items[2], 2.0, rest, vp);
    assert!(last_stat.opacity > 0.0 && last_stat.opacity < 1.0);
}

#[test]
fn scroll_timeline_weights_sum_to_three() {
    let tl = scroll_timeline(&targets()).unwrap();
    assert!(close(tl.duration(), 3.0));
    for i in 0..3 {
        assert_eq!(tl.step_window(i).unwrap().0, 0.0);
    }
}

#[test]
fn scroll_end_state_matches_exit_pose() {
    let t = targets();
    let tl = scroll_timeline(&t).unwrap();
    let vp = Viewport::new(1000.0, 800.0).unwrap();
    let rest = ElementTransform::RESTING;

    let word = tl.sample(t.headline_words[1], 3.0, rest, vp);
    assert_eq!((word.y, word.opacity), (-150.0, 0.0));
    let stats = tl.sample(t.stats_block, 3.0, rest, vp);
    assert!(close(stats.scale, 0.9) && close(stats.y, -100.0) && stats.opacity == 0.0);
    let hero = tl.sample(t.hero_image, 3.0, rest, vp);
    assert!(close(hero.scale, 1.8));
    assert!(close(hero.x, -150.0));
    assert!(close(hero.y, 40.0));
    assert!(close(hero.rotation_deg, -4.0));
}

#[test]
fn hero_scroll_step_is_symmetric_at_midpoint() {
    let t = targets();
    let tl = scroll_timeline(&t).unwrap();
    let vp = Viewport::new(1000.0, 800.0).unwrap();
    let hero = tl.sample(t.hero_image, 1.5, ElementTransform::RESTING, vp);
    assert!(close(hero.scale, 1.4));
    assert!(close(hero.rotation_deg, -2.0));
}

#[test]
fn trigger_pins_for_two_viewports() {
    let cfg = scroll_trigger().unwrap();
    assert_eq!(
        cfg.start,
        EdgePair {
            element: Edge::Top,
            viewport: Edge::Top
        }
    );
    assert_eq!(cfg.end, TriggerEnd::AfterStartPercent(200.0));
    assert_eq!(cfg.scrub, 1.5);
    assert!(cfg.pin);
}

#[test]
fn pin_distance_matches_trigger_end() {
    let cfg = scroll_trigger().unwrap();
    assert_eq!(cfg.end, TriggerEnd::AfterStartPercent(PIN_DISTANCE_VH));
}
