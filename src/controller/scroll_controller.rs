use std::collections::BTreeMap;

use crate::{
    animation::timeline::Timeline,
    controller::resources::Subscriptions,
    foundation::core::{ElementId, ElementTransform, Rect, Viewport},
    foundation::error::{TimelineError, TimelineResult},
    host::{RenderHost, Subscription},
    scroll::{
        pin::{Pin, PinPlacement, PinState},
        scrub::Scrub,
        trigger::{ScrollRange, ScrollTriggerConfig},
    },
};

/// Lifecycle of a controller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing registered.
    Unmounted,
    /// Elements registered, intro not started.
    Mounted,
    /// Intro timeline running.
    IntroPlaying,
    /// Intro finished; only the scroll binding (if any) is live.
    IntroDone,
}

/// A registered element and the transform last written for it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElementRef {
    /// Element identity.
    pub id: ElementId,
    /// Last transform applied, `None` before the first write.
    pub transform: Option<ElementTransform>,
}

#[derive(Debug)]
struct Intro {
    timeline: Timeline,
    started_at: Option<f64>,
    elapsed: f64,
}

#[derive(Debug)]
struct ScrollBinding {
    trigger: ElementId,
    config: ScrollTriggerConfig,
    timeline: Timeline,
    trigger_rect: Rect,
    range: ScrollRange,
    scrub: Scrub,
    pin: Option<Pin>,
}

impl ScrollBinding {
    fn timeline_time(&self) -> f64 {
        self.scrub.value() * self.timeline.duration()
    }
}

/// Drives one intro timeline and one scroll-bound timeline against a [`RenderHost`].
///
/// The controller owns its host handle and every registration it makes. [`unmount`] (also run
/// on drop) releases all of them; after that, callbacks are ignored and element state is never
/// touched again.
///
/// [`unmount`]: ScrollTimelineController::unmount
pub struct ScrollTimelineController<H: RenderHost> {
    host: H,
    phase: Phase,
    elements: BTreeMap<ElementId, ElementRef>,
    intro: Option<Intro>,
    binding: Option<ScrollBinding>,
    subscriptions: Subscriptions,
    viewport: Viewport,
    last_tick: Option<f64>,
}

impl<H: RenderHost> ScrollTimelineController<H> {
    /// Create an unmounted controller over `host`.
    pub fn new(host: H) -> Self {
        let viewport = host.viewport();
        Self {
            host,
            phase: Phase::Unmounted,
            elements: BTreeMap::new(),
            intro: None,
            binding: None,
            subscriptions: Subscriptions::default(),
            viewport,
            last_tick: None,
        }
    }

    /// Register elements. Absent or detached refs are skipped.
    ///
    /// Calling this on a mounted controller is a no-op: re-registering would double the
    /// listeners set up afterwards.
    #[tracing::instrument(skip(self, elements))]
    pub fn mount(&mut self, elements: &[Option<ElementId>]) {
        if self.phase != Phase::Unmounted {
            tracing::warn!(phase = ?self.phase, "mount on a mounted controller ignored");
            return;
        }
        for slot in elements {
            match slot {
                Some(id) if self.host.is_attached(*id) => {
                    self.elements.insert(
                        *id,
                        ElementRef {
                            id: *id,
                            transform: None,
                        },
                    );
                }
                Some(id) => tracing::debug!(%id, "element not attached, skipped"),
                None => tracing::debug!("absent element ref skipped"),
            }
        }
        self.viewport = self.host.viewport();
        self.phase = Phase::Mounted;
        tracing::debug!(registered = self.elements.len(), "mounted");
    }

    /// Start the time-based intro. Its `from` states render immediately.
    pub fn play_intro(&mut self, timeline: Timeline) {
        match self.phase {
            Phase::Unmounted => {
                tracing::warn!("play_intro before mount ignored");
                return;
            }
            _ if self.intro.is_some() => {
                tracing::warn!("intro already played, ignored");
                return;
            }
            _ => {}
        }
        self.log_unregistered(&timeline, "intro");
        self.intro = Some(Intro {
            timeline,
            started_at: None,
            elapsed: 0.0,
        });
        self.phase = Phase::IntroPlaying;
        self.subscriptions
            .ensure(&mut self.host, Subscription::FrameTicker);
        self.render();
    }

    /// Bind `timeline` to the scroll range of `trigger`.
    ///
    /// Failures (unknown trigger, empty range, invalid config) leave no registrations behind
    /// and are logged, not returned.
    #[tracing::instrument(skip(self, config, timeline))]
    pub fn bind_scroll(
        &mut self,
        trigger: ElementId,
        config: ScrollTriggerConfig,
        timeline: Timeline,
    ) {
        if self.phase == Phase::Unmounted {
            tracing::warn!("bind_scroll before mount ignored");
            return;
        }
        if self.binding.is_some() {
            tracing::warn!("scroll binding already active, ignored");
            return;
        }

        let mut scope = Subscriptions::default();
        match self.try_bind(&mut scope, trigger, config, timeline) {
            Ok(binding) => {
                self.log_unregistered(&binding.timeline, "scroll");
                self.subscriptions.absorb(scope);
                self.subscriptions
                    .ensure(&mut self.host, Subscription::FrameTicker);
                tracing::debug!(
                    start = binding.range.start,
                    end = binding.range.end,
                    "scroll binding active"
                );
                self.binding = Some(binding);
                self.apply_initial_pin();
                self.render();
            }
            Err(err) => {
                scope.release_all(&mut self.host);
                tracing::warn!(%err, "scroll binding not created");
            }
        }
    }

    fn try_bind(
        &mut self,
        scope: &mut Subscriptions,
        trigger: ElementId,
        config: ScrollTriggerConfig,
        timeline: Timeline,
    ) -> TimelineResult<ScrollBinding> {
        config.validate()?;
        scope.acquire(&mut self.host, Subscription::ScrollListener);
        scope.acquire(&mut self.host, Subscription::ResizeListener);

        let trigger_rect = self.host.measure(trigger).ok_or_else(|| {
            TimelineError::scroll(format!("trigger {trigger} is not attached"))
        })?;
        self.viewport = self.host.viewport();
        let range = ScrollRange::resolve(&config, trigger_rect, self.viewport)?;

        let offset = self.host.scroll_offset();
        let mut scrub = Scrub::new(config.scrub)?;
        // Start settled at the current position so a restored scroll offset does not animate.
        scrub.jump_to(range.progress(offset));
        let pin = config.pin.then(|| {
            let mut pin = Pin::new();
            pin.update(range, offset);
            pin
        });

        Ok(ScrollBinding {
            trigger,
            config,
            timeline,
            trigger_rect,
            range,
            scrub,
            pin,
        })
    }

    /// Frame ticker callback. `now_secs` is a monotonic clock reading.
    pub fn tick(&mut self, now_secs: f64) {
        if self.phase == Phase::Unmounted
            || !self.subscriptions.holds(Subscription::FrameTicker)
        {
            return;
        }
        let dt = match self.last_tick {
            Some(last) if now_secs < last => {
                tracing::warn!(
                    now_secs,
                    last,
                    "clock went backwards, treating as no elapsed time"
                );
                0.0
            }
            Some(last) => now_secs - last,
            None => 0.0,
        };
        let now = self.last_tick.map_or(now_secs, |last| last.max(now_secs));
        self.last_tick = Some(now);

        if let Some(intro) = &mut self.intro
            && self.phase == Phase::IntroPlaying
        {
            let started_at = *intro.started_at.get_or_insert(now);
            intro.elapsed = intro.elapsed.max(now - started_at);
            if intro.timeline.is_complete(intro.elapsed) {
                self.phase = Phase::IntroDone;
                tracing::debug!(elapsed = intro.elapsed, "intro done");
            }
        }
        if let Some(binding) = &mut self.binding {
            binding.scrub.advance(dt);
        }

        self.render();

        if self.binding.is_none() && self.phase == Phase::IntroDone {
            self.subscriptions
                .release(&mut self.host, Subscription::FrameTicker);
        }
    }

    /// Scroll listener callback.
    pub fn on_scroll(&mut self, offset: f64) {
        if self.phase == Phase::Unmounted || !offset.is_finite() {
            return;
        }
        let Some(binding) = &mut self.binding else {
            return;
        };
        binding.scrub.set_target(binding.range.progress(offset));
        self.apply_pin_at(offset);
        if self.binding.as_ref().is_some_and(|b| b.scrub.is_settled()) {
            self.render();
        }
    }

    /// Resize listener callback: drop cached measurements and re-measure.
    pub fn on_resize(&mut self) {
        if self.phase == Phase::Unmounted {
            return;
        }
        self.viewport = self.host.viewport();
        let offset = self.host.scroll_offset();
        let viewport = self.viewport;
        if let Some(binding) = &mut self.binding {
            if let Some(rect) = self.host.measure(binding.trigger) {
                binding.trigger_rect = rect;
            }
            match ScrollRange::resolve(&binding.config, binding.trigger_rect, viewport) {
                Ok(range) => {
                    binding.range = range;
                    binding.scrub.set_target(range.progress(offset));
                }
                Err(err) => tracing::warn!(%err, "keeping previous scroll range"),
            }
            self.apply_pin_at(offset);
        }
        self.render();
    }

    /// Release every registration, revert written transforms and pin placement, and forget all
    /// elements. Idempotent.
    ///
    /// Elements still attached are put back to [`ElementTransform::RESTING`], the state they had
    /// before any timeline touched them.
    pub fn unmount(&mut self) {
        if self.phase == Phase::Unmounted {
            return;
        }
        let released = self.subscriptions.release_all(&mut self.host);
        if let Some(binding) = self.binding.take()
            && binding.pin.is_some()
            && self.host.is_attached(binding.trigger)
        {
            self.host
                .set_pin_placement(binding.trigger, PinPlacement::Flow { offset: 0.0 });
        }
        let mut reverted = 0usize;
        for (id, element) in &self.elements {
            let written = element
                .transform
                .is_some_and(|t| t != ElementTransform::RESTING);
            if written && self.host.is_attached(*id) {
                self.host.apply_transform(*id, &ElementTransform::RESTING);
                reverted += 1;
            }
        }
        tracing::debug!(reverted, "transforms reverted");
        self.intro = None;
        self.elements.clear();
        self.last_tick = None;
        self.phase = Phase::Unmounted;
        tracing::debug!(released, "unmounted");
    }

    /// Current lifecycle phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Return `true` while a scroll binding is active.
    pub fn is_scroll_bound(&self) -> bool {
        self.binding.is_some()
    }

    /// Raw scroll progress, if bound.
    pub fn raw_progress(&self) -> Option<f64> {
        self.binding.as_ref().map(|b| b.scrub.target())
    }

    /// Smoothed scroll progress driving the timeline, if bound.
    pub fn smoothed_progress(&self) -> Option<f64> {
        self.binding.as_ref().map(|b| b.scrub.value())
    }

    /// Resolved scroll range, if bound.
    pub fn scroll_range(&self) -> Option<ScrollRange> {
        self.binding.as_ref().map(|b| b.range)
    }

    /// Pin state, if bound with pinning.
    pub fn pin_state(&self) -> Option<PinState> {
        self.binding
            .as_ref()
            .and_then(|b| b.pin.as_ref())
            .map(Pin::state)
    }

    /// Seconds of intro played so far, if an intro exists.
    pub fn intro_elapsed(&self) -> Option<f64> {
        self.intro.as_ref().map(|i| i.elapsed)
    }

    /// Registered elements.
    pub fn elements(&self) -> impl Iterator<Item = &ElementRef> {
        self.elements.values()
    }

    /// Last transform written for `id`.
    pub fn transform_of(&self, id: ElementId) -> Option<ElementTransform> {
        self.elements.get(&id).and_then(|e| e.transform)
    }

    /// Number of registrations currently held.
    pub fn held_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }

    /// The render host.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the render host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn log_unregistered(&self, timeline: &Timeline, which: &str) {
        for id in timeline.targets() {
            if !self.elements.contains_key(&id) {
                tracing::debug!(%id, timeline = which, "target not registered, step skipped");
            }
        }
    }

    fn apply_initial_pin(&mut self) {
        let Some(binding) = &self.binding else {
            return;
        };
        if let Some(pin) = &binding.pin
            && self.host.is_attached(binding.trigger)
        {
            let placement = pin.placement(binding.range, binding.trigger_rect);
            self.host.set_pin_placement(binding.trigger, placement);
        }
    }

    fn apply_pin_at(&mut self, offset: f64) {
        let Some(binding) = &mut self.binding else {
            return;
        };
        let Some(pin) = &mut binding.pin else {
            return;
        };
        if let Some(transition) = pin.update(binding.range, offset) {
            tracing::debug!(
                from = ?transition.from,
                to = ?transition.to,
                offset,
                "pin state changed"
            );
            let placement = pin.placement(binding.range, binding.trigger_rect);
            if self.host.is_attached(binding.trigger) {
                self.host.set_pin_placement(binding.trigger, placement);
            }
        }
    }

    fn render(&mut self) {
        let intro = self.intro.as_ref();
        let binding = self.binding.as_ref();
        let viewport = self.viewport;
        let mut animated = intro.map(|i| i.timeline.targets()).unwrap_or_default();
        if let Some(b) = binding {
            animated.extend(b.timeline.targets());
        }
        for (id, element) in &mut self.elements {
            if !animated.contains(id) || !self.host.is_attached(*id) {
                continue;
            }
            let mut value = ElementTransform::RESTING;
            if let Some(intro) = intro {
                value = intro.timeline.sample(*id, intro.elapsed, value, viewport);
            }
            if let Some(binding) = binding {
                value = binding
                    .timeline
                    .sample(*id, binding.timeline_time(), value, viewport);
            }
            if element.transform != Some(value) {
                self.host.apply_transform(*id, &value);
                element.transform = Some(value);
            }
        }
    }
}

impl<H: RenderHost> Drop for ScrollTimelineController<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/scroll_controller.rs"]
mod tests;
