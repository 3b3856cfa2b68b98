use crate::host::{RenderHost, Subscription, SubscriptionId};

/// A set of host registrations released together.
///
/// Setup code acquires into a fresh set and either [`absorb`](Self::absorb)s it into the
/// controller's set on success or [`release_all`](Self::release_all)s it on failure, so a
/// half-finished setup never leaves a listener behind.
#[derive(Debug, Default)]
pub struct Subscriptions {
    held: Vec<(Subscription, SubscriptionId)>,
}

impl Subscriptions {
    /// Register `kind` with `host` and hold the handle.
    pub fn acquire<H: RenderHost + ?Sized>(
        &mut self,
        host: &mut H,
        kind: Subscription,
    ) -> SubscriptionId {
        let id = host.subscribe(kind);
        self.held.push((kind, id));
        id
    }

    /// Acquire `kind` unless one is already held.
    pub fn ensure<H: RenderHost + ?Sized>(&mut self, host: &mut H, kind: Subscription) {
        if !self.holds(kind) {
            self.acquire(host, kind);
        }
    }

    /// Return `true` if a registration of `kind` is held.
    pub fn holds(&self, kind: Subscription) -> bool {
        self.held.iter().any(|(k, _)| *k == kind)
    }

    /// Number of held registrations.
    pub fn len(&self) -> usize {
        self.held.len()
    }

    /// Return `true` when nothing is held.
    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }

    /// Take ownership of every registration in `other`.
    pub fn absorb(&mut self, mut other: Subscriptions) {
        self.held.append(&mut other.held);
    }

    /// Release registrations of `kind`; returns how many were released.
    pub fn release<H: RenderHost + ?Sized>(&mut self, host: &mut H, kind: Subscription) -> usize {
        let before = self.held.len();
        self.held.retain(|(k, id)| {
            if *k == kind {
                host.unsubscribe(*id);
                false
            } else {
                true
            }
        });
        before - self.held.len()
    }

    /// Release everything; returns how many were released. Safe to call repeatedly.
    pub fn release_all<H: RenderHost + ?Sized>(&mut self, host: &mut H) -> usize {
        let n = self.held.len();
        for (_, id) in self.held.drain(..) {
            host.unsubscribe(id);
        }
        n
    }
}

impl Drop for Subscriptions {
    fn drop(&mut self) {
        if !self.held.is_empty() {
            tracing::warn!(
                leaked = self.held.len(),
                "subscriptions dropped without release"
            );
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/controller/resources.rs"]
mod tests;
