//! The seam between the timeline engine and whatever renders elements.
//!
//! The engine never owns elements: the rendering layer does, and may tear them down at any
//! time. Everything the controller needs from it goes through [`RenderHost`].

use std::collections::BTreeMap;

use crate::{
    foundation::core::{ElementId, ElementTransform, Rect, Viewport},
    scroll::pin::PinPlacement,
};

/// Kinds of callback registrations a controller holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Subscription {
    /// Per-animation-frame ticker.
    FrameTicker,
    /// Scroll offset change listener.
    ScrollListener,
    /// Viewport resize listener.
    ResizeListener,
}

/// Handle returned by [`RenderHost::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize)]
pub struct SubscriptionId(pub u64);

/// Rendering-layer services used by the controller.
pub trait RenderHost {
    /// Current viewport size.
    fn viewport(&self) -> Viewport;

    /// Current document scroll offset.
    fn scroll_offset(&self) -> f64;

    /// Return `true` if the element exists and can receive transforms.
    fn is_attached(&self, id: ElementId) -> bool;

    /// Untransformed, unpinned layout rect in document coordinates.
    fn measure(&self, id: ElementId) -> Option<Rect>;

    /// Register a callback of `kind`.
    fn subscribe(&mut self, kind: Subscription) -> SubscriptionId;

    /// Remove a registration. Unknown ids are ignored.
    fn unsubscribe(&mut self, id: SubscriptionId);

    /// Write an element's visual transform.
    fn apply_transform(&mut self, id: ElementId, transform: &ElementTransform);

    /// Place a pinnable region.
    fn set_pin_placement(&mut self, id: ElementId, placement: PinPlacement);
}

impl<H: RenderHost + ?Sized> RenderHost for &mut H {
    fn viewport(&self) -> Viewport {
        (**self).viewport()
    }

    fn scroll_offset(&self) -> f64 {
        (**self).scroll_offset()
    }

    fn is_attached(&self, id: ElementId) -> bool {
        (**self).is_attached(id)
    }

    fn measure(&self, id: ElementId) -> Option<Rect> {
        (**self).measure(id)
    }

    fn subscribe(&mut self, kind: Subscription) -> SubscriptionId {
        (**self).subscribe(kind)
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        (**self).unsubscribe(id)
    }

    fn apply_transform(&mut self, id: ElementId, transform: &ElementTransform) {
        (**self).apply_transform(id, transform)
    }

    fn set_pin_placement(&mut self, id: ElementId, placement: PinPlacement) {
        (**self).set_pin_placement(id, placement)
    }
}

/// Element state tracked by [`HeadlessHost`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct HeadlessElement {
    /// Layout rect in document coordinates.
    pub rect: Rect,
    /// Last written transform, if any.
    pub transform: Option<ElementTransform>,
    /// Last written pin placement, if any.
    pub pin: Option<PinPlacement>,
}

/// In-memory [`RenderHost`] used by tests and the preview CLI.
///
/// It records every write and registration so callers can check what a controller did.
#[derive(Clone, Debug)]
pub struct HeadlessHost {
    viewport: Viewport,
    scroll: f64,
    elements: BTreeMap<ElementId, HeadlessElement>,
    subscriptions: BTreeMap<SubscriptionId, Subscription>,
    next_subscription: u64,
    writes: u64,
}

impl HeadlessHost {
    /// Empty host with `viewport` and scroll offset 0.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            scroll: 0.0,
            elements: BTreeMap::new(),
            subscriptions: BTreeMap::new(),
            next_subscription: 1,
            writes: 0,
        }
    }

    /// Attach an element laid out at `rect`.
    pub fn attach(&mut self, id: ElementId, rect: Rect) {
        self.elements.insert(
            id,
            HeadlessElement {
                rect,
                transform: None,
                pin: None,
            },
        );
    }

    /// Tear an element down, as the rendering layer would.
    pub fn detach(&mut self, id: ElementId) -> Option<HeadlessElement> {
        self.elements.remove(&id)
    }

    /// Update the scroll offset. Callers forward it to the controller's scroll listener.
    pub fn set_scroll(&mut self, offset: f64) {
        self.scroll = offset;
    }

    /// Update the viewport. Callers forward it to the controller's resize listener.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Tracked element state.
    pub fn element(&self, id: ElementId) -> Option<&HeadlessElement> {
        self.elements.get(&id)
    }

    /// Last written transform of `id`.
    pub fn transform(&self, id: ElementId) -> Option<ElementTransform> {
        self.elements.get(&id).and_then(|e| e.transform)
    }

    /// Last written pin placement of `id`.
    pub fn pin_placement(&self, id: ElementId) -> Option<PinPlacement> {
        self.elements.get(&id).and_then(|e| e.pin)
    }

    /// Number of live registrations.
    pub fn active_subscriptions(&self) -> usize {
        self.subscriptions.len()
    }

    /// Number of live registrations of `kind`.
    pub fn subscriptions_of(&self, kind: Subscription) -> usize {
        self.subscriptions.values().filter(|k| **k == kind).count()
    }

    /// Total number of transform and pin writes received.
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl RenderHost for HeadlessHost {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn scroll_offset(&self) -> f64 {
        self.scroll
    }

    fn is_attached(&self, id: ElementId) -> bool {
        self.elements.contains_key(&id)
    }

    fn measure(&self, id: ElementId) -> Option<Rect> {
        self.elements.get(&id).map(|e| e.rect)
    }

    fn subscribe(&mut self, kind: Subscription) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscriptions.insert(id, kind);
        id
    }

    fn unsubscribe(&mut self, id: SubscriptionId) {
        self.subscriptions.remove(&id);
    }

    fn apply_transform(&mut self, id: ElementId, transform: &ElementTransform) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.transform = Some(*transform);
            self.writes += 1;
        }
    }

    fn set_pin_placement(&mut self, id: ElementId, placement: PinPlacement) {
        if let Some(el) = self.elements.get_mut(&id) {
            el.pin = Some(placement);
            self.writes += 1;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/headless.rs"]
mod tests;
