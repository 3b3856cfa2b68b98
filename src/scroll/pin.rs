use crate::{foundation::core::Rect, scroll::trigger::ScrollRange};

/// Pin state of a trigger region relative to its scroll range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PinState {
    /// Scroll offset is before the range; normal flow.
    Before,
    /// Scroll offset is inside the range; the region is fixed to the viewport.
    Pinned,
    /// Scroll offset is past the range; normal flow, shifted by the pin spacer.
    After,
}

impl PinState {
    /// State for `offset` within `range`.
    pub fn at(range: ScrollRange, offset: f64) -> Self {
        if range.contains(offset) {
            Self::Pinned
        } else if offset < range.start {
            Self::Before
        } else {
            Self::After
        }
    }

    /// Return `true` while fixed to the viewport.
    pub fn is_pinned(self) -> bool {
        self == Self::Pinned
    }
}

/// Where the host should place a pinnable region.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PinPlacement {
    /// In document flow, translated down by `offset` pixels (the consumed pin distance).
    Flow {
        /// Vertical offset in pixels.
        offset: f64,
    },
    /// Fixed to the viewport with its top edge at `top` pixels.
    Fixed {
        /// Viewport-relative top edge in pixels.
        top: f64,
    },
}

/// A state change reported by [`Pin::update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinTransition {
    /// State before the update.
    pub from: PinState,
    /// State after the update.
    pub to: PinState,
}

/// Explicit `Unpinned -> Pinned -> Unpinned` state machine for one trigger region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pin {
    state: PinState,
}

impl Pin {
    /// Start unpinned, before the range.
    pub fn new() -> Self {
        Self {
            state: PinState::Before,
        }
    }

    /// Current state.
    pub fn state(&self) -> PinState {
        self.state
    }

    /// Re-evaluate for `offset`; returns the transition if the state changed.
    pub fn update(&mut self, range: ScrollRange, offset: f64) -> Option<PinTransition> {
        let next = PinState::at(range, offset);
        if next == self.state {
            return None;
        }
        let transition = PinTransition {
            from: self.state,
            to: next,
        };
        self.state = next;
        Some(transition)
    }

    /// Placement for the current state.
    ///
    /// `trigger` is the region's unpinned document rect; while pinned its top stays where it
    /// was when the range started.
    pub fn placement(&self, range: ScrollRange, trigger: Rect) -> PinPlacement {
        match self.state {
            PinState::Before => PinPlacement::Flow { offset: 0.0 },
            PinState::Pinned => PinPlacement::Fixed {
                top: trigger.y0 - range.start,
            },
            PinState::After => PinPlacement::Flow {
                offset: range.len(),
            },
        }
    }
}

impl Default for Pin {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/pin.rs"]
mod tests;
