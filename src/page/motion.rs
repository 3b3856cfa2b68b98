//! The hero section's motion: the intro played on load and the scroll-scrubbed exit.

use crate::{
    animation::{
        ease::Ease,
        timeline::{Position, Timeline},
        tween::{TimelineStep, TweenVars},
    },
    foundation::core::Length,
    foundation::error::TimelineResult,
    page::layout::HeroTargets,
    scroll::trigger::ScrollTriggerConfig,
};

/// Where the pinned range starts: trigger top meets viewport top.
pub const SCROLL_START: &str = "top top";
/// Where the pinned range ends: two viewport heights past the start.
pub const SCROLL_END: &str = "+=200%";
/// Pinned scroll distance in percent of the viewport height, matching [`SCROLL_END`].
pub const PIN_DISTANCE_VH: f64 = 200.0;
/// Scrub lag in seconds.
pub const SCRUB_SECS: f64 = 1.5;

/// Headline words rise in one after another, then the stats, then the car.
pub fn intro_timeline(targets: &HeroTargets) -> TimelineResult<Timeline> {
    let words = TimelineStep::from_to(
        targets.headline_words.iter().copied(),
        TweenVars::new().y(50.0).opacity(0.0).scale(0.9),
        TweenVars::new().y(0.0).opacity(1.0).scale(1.0),
    )
    .duration(1.2)
    .stagger(0.2)
    .ease(Ease::OutQuart)
    .delay(0.2);

    let stats = TimelineStep::from_to(
        targets.stat_items.iter().copied(),
        TweenVars::new().opacity(0.0).y(30.0),
        TweenVars::new().opacity(1.0).y(0.0),
    )
    .duration(0.8)
    .stagger(0.15)
    .ease(Ease::OutCubic)
    .at(Position::FromEnd(-0.6));

    let hero = TimelineStep::from_to(
        [targets.hero_image],
        TweenVars::new().opacity(0.0).y(150.0).scale(0.85),
        TweenVars::new().opacity(1.0).y(0.0).scale(1.0),
    )
    .duration(1.5)
    .ease(Ease::OutCubic)
    .at(Position::FromEnd(-0.8));

    Ok(Timeline::builder()
        .add(words)?
        .add(stats)?
        .add(hero)?
        .build())
}

/// Scroll-driven exit. Durations are weights: the whole timeline spans 3 units of progress.
pub fn scroll_timeline(targets: &HeroTargets) -> TimelineResult<Timeline> {
    let words = TimelineStep::to(
        targets.headline_words.iter().copied(),
        TweenVars::new().y(-150.0).opacity(0.0),
    )
    .duration(1.0)
    .stagger(0.1)
    .at(Position::At(0.0));

    let stats = TimelineStep::to(
        [targets.stats_block],
        TweenVars::new().opacity(0.0).y(-100.0).scale(0.9),
    )
    .duration(0.8)
    .at(Position::At(0.0));

    let hero = TimelineStep::to(
        [targets.hero_image],
        TweenVars::new()
            .scale(1.8)
            .x(Length::Vw(-15.0))
            .y(Length::Vh(5.0))
            .rotation(-4.0),
    )
    .duration(3.0)
    .ease(Ease::InOutQuad)
    .at(Position::At(0.0));

    Ok(Timeline::builder()
        .add(words)?
        .add(stats)?
        .add(hero)?
        .build())
}

/// Pinned, scrubbed trigger over the hero section.
pub fn scroll_trigger() -> TimelineResult<ScrollTriggerConfig> {
    Ok(ScrollTriggerConfig::new(SCROLL_START, SCROLL_END)?
        .scrub(SCRUB_SECS)
        .pin(true))
}

#[cfg(test)]
#[path = "../../tests/unit/page/motion.rs"]
mod tests;
