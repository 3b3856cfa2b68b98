//! scroll-timeline drives element transforms from two clocks: wall time for a one-shot intro and
//! scroll position for a pinned, scrubbed section.
//!
//! The crate never draws. A [`ScrollTimelineController`] computes per-frame transforms and hands
//! them to a [`RenderHost`], the seam to whatever owns the elements. [`HeadlessHost`] is an
//! in-memory host for tests and previews.
//!
//! # Pieces
//!
//! 1. **Timelines**: [`TimelineStep`]s placed with [`Position`]s, sampled as a pure function of
//!    time.
//! 2. **Scroll**: a [`ScrollTriggerConfig`] resolves to a [`ScrollRange`]; raw progress is
//!    smoothed by a [`Scrub`] and drives a [`Pin`].
//! 3. **Controller**: mount, intro, scroll binding and unmount, with every host registration
//!    tracked in [`Subscriptions`] and released on unmount or drop.
//! 4. **Page**: the hero page's layout, motion constants and assets ([`HeroPage`]).
//!
//! # Example
//!
//! ```
//! use scroll_timeline::{HeroPage, PageConfig, Viewport};
//!
//! let mut page = HeroPage::headless(&PageConfig::default(), Viewport::default())?;
//! page.controller_mut().tick(0.0);
//! page.controller_mut().tick(3.0);
//! page.controller_mut().on_scroll(800.0);
//! assert!(page.controller().raw_progress().is_some());
//! # Ok::<(), scroll_timeline::TimelineError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod controller;
mod foundation;
mod host;
mod page;
mod scroll;

pub use animation::ease::Ease;
pub use animation::timeline::{Position, Timeline, TimelineBuilder};
pub use animation::tween::{Lerp, TimelineStep, TweenVars};
pub use controller::resources::Subscriptions;
pub use controller::scroll_controller::{ElementRef, Phase, ScrollTimelineController};
pub use foundation::core::{Affine, ElementId, ElementTransform, Length, Rect, Vec2, Viewport};
pub use foundation::error::{TimelineError, TimelineResult};
pub use host::{HeadlessElement, HeadlessHost, RenderHost, Subscription, SubscriptionId};
pub use page::assets::{HeroImage, ImageState, asset_url, page_url};
pub use page::config::{ContentCopy, HeroImageConfig, PageConfig, StatEntry};
pub use page::hero::HeroPage;
pub use page::layout::{HeroTargets, MeasuredNode, Node, NodeKind, PageLayout, Placement};
pub use page::motion::{
    PIN_DISTANCE_VH, SCROLL_END, SCROLL_START, SCRUB_SECS, intro_timeline, scroll_timeline,
    scroll_trigger,
};
pub use scroll::pin::{Pin, PinPlacement, PinState, PinTransition};
pub use scroll::scrub::Scrub;
pub use scroll::trigger::{Edge, EdgePair, ScrollRange, ScrollTriggerConfig, TriggerEnd};
