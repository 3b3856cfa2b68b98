//! Scroll trigger positions and raw scroll progress.
//!
//! Positions use the familiar two-token grammar: `"<element edge> <viewport edge>"`, e.g.
//! `"top top"` (trigger top meets viewport top) or `"center 75%"`. An end position may instead
//! be relative to the resolved start: `"+=200%"` (twice the viewport height) or `"+=600px"`.

use crate::{
    foundation::core::{Rect, Viewport},
    foundation::error::{TimelineError, TimelineResult},
};

/// A point along an element's or the viewport's vertical extent.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    /// Top edge.
    Top,
    /// Vertical center.
    Center,
    /// Bottom edge.
    Bottom,
    /// Percent of the extent from the top.
    Percent(f64),
    /// Pixels from the top.
    Px(f64),
}

impl Edge {
    /// Offset from the top of an extent of `size` pixels.
    pub fn offset_in(self, size: f64) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Center => size / 2.0,
            Self::Bottom => size,
            Self::Percent(p) => size * p / 100.0,
            Self::Px(px) => px,
        }
    }
}

impl std::str::FromStr for Edge {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimelineError::scroll(format!("invalid edge '{s}'"));
        let finite = |v: &str| {
            v.parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(invalid)
        };
        match s {
            "top" => Ok(Self::Top),
            "center" => Ok(Self::Center),
            "bottom" => Ok(Self::Bottom),
            _ => {
                if let Some(p) = s.strip_suffix('%') {
                    Ok(Self::Percent(finite(p)?))
                } else if let Some(px) = s.strip_suffix("px") {
                    Ok(Self::Px(finite(px)?))
                } else {
                    Ok(Self::Px(finite(s)?))
                }
            }
        }
    }
}

/// An absolute trigger position: where on the element meets where on the viewport.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EdgePair {
    /// Point on the trigger element.
    pub element: Edge,
    /// Point on the viewport.
    pub viewport: Edge,
}

impl EdgePair {
    /// Scroll offset at which the two points coincide.
    pub fn resolve(self, trigger: Rect, viewport: Viewport) -> f64 {
        trigger.y0 + self.element.offset_in(trigger.height())
            - self.viewport.offset_in(viewport.height)
    }
}

impl std::str::FromStr for EdgePair {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let (Some(element), viewport, None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(TimelineError::scroll(format!(
                "position '{s}' must have one or two tokens"
            )));
        };
        let element: Edge = element.parse()?;
        // A single token applies to both sides.
        let viewport = match viewport {
            Some(v) => v.parse()?,
            None => element,
        };
        Ok(Self { element, viewport })
    }
}

/// End of a scroll range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerEnd {
    /// Absolute position, like the start.
    Edges(EdgePair),
    /// Distance after the resolved start, in percent of the viewport height.
    AfterStartPercent(f64),
    /// Distance after the resolved start, in pixels.
    AfterStartPx(f64),
}

impl std::str::FromStr for TriggerEnd {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let Some(rest) = s.strip_prefix("+=") else {
            return Ok(Self::Edges(s.parse()?));
        };
        match rest.parse::<Edge>()? {
            Edge::Percent(p) => Ok(Self::AfterStartPercent(p)),
            Edge::Px(px) => Ok(Self::AfterStartPx(px)),
            _ => Err(TimelineError::scroll(format!(
                "relative end '{s}' must be a length"
            ))),
        }
    }
}

/// Declarative scroll binding settings.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollTriggerConfig {
    /// Where the range starts.
    pub start: EdgePair,
    /// Where the range ends.
    pub end: TriggerEnd,
    /// Smoothing lag in seconds; `0` tracks scroll instantly.
    pub scrub: f64,
    /// Hold the trigger region fixed while the range is active.
    pub pin: bool,
}

impl ScrollTriggerConfig {
    /// Parse start/end strings with default scrub (instant) and no pin.
    pub fn new(start: &str, end: &str) -> TimelineResult<Self> {
        Ok(Self {
            start: start.parse()?,
            end: end.parse()?,
            scrub: 0.0,
            pin: false,
        })
    }

    /// Set smoothing lag in seconds.
    pub fn scrub(mut self, secs: f64) -> Self {
        self.scrub = secs;
        self
    }

    /// Enable or disable pinning.
    pub fn pin(mut self, pin: bool) -> Self {
        self.pin = pin;
        self
    }

    /// Validate numeric fields.
    pub fn validate(&self) -> TimelineResult<()> {
        if !self.scrub.is_finite() || self.scrub < 0.0 {
            return Err(TimelineError::scroll("scrub must be finite and >= 0"));
        }
        Ok(())
    }
}

impl Default for ScrollTriggerConfig {
    fn default() -> Self {
        Self {
            start: EdgePair {
                element: Edge::Top,
                viewport: Edge::Bottom,
            },
            end: TriggerEnd::Edges(EdgePair {
                element: Edge::Bottom,
                viewport: Edge::Top,
            }),
            scrub: 0.0,
            pin: false,
        }
    }
}

/// Resolved scroll offsets `[start, end]` of a binding.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollRange {
    /// Offset where progress is 0.
    pub start: f64,
    /// Offset where progress is 1.
    pub end: f64,
}

impl ScrollRange {
    /// Create a validated range with `start < end`.
    pub fn new(start: f64, end: f64) -> TimelineResult<Self> {
        if !start.is_finite() || !end.is_finite() {
            return Err(TimelineError::scroll("scroll range must be finite"));
        }
        if end <= start {
            return Err(TimelineError::scroll(format!(
                "scroll range end ({end}) must be after start ({start})"
            )));
        }
        Ok(Self { start, end })
    }

    /// Resolve `config` against a measured trigger rect (document coordinates).
    pub fn resolve(
        config: &ScrollTriggerConfig,
        trigger: Rect,
        viewport: Viewport,
    ) -> TimelineResult<Self> {
        let start = config.start.resolve(trigger, viewport);
        let end = match config.end {
            TriggerEnd::Edges(pair) => pair.resolve(trigger, viewport),
            TriggerEnd::AfterStartPercent(p) => start + viewport.height * p / 100.0,
            TriggerEnd::AfterStartPx(px) => start + px,
        };
        Self::new(start, end)
    }

    /// Scroll distance covered by the range.
    pub fn len(self) -> f64 {
        self.end - self.start
    }

    /// Return `true` when `offset` lies in `[start, end]`.
    pub fn contains(self, offset: f64) -> bool {
        self.start <= offset && offset <= self.end
    }

    /// Raw progress `clamp((offset - start) / (end - start), 0, 1)`.
    pub fn progress(self, offset: f64) -> f64 {
        ((offset - self.start) / self.len()).clamp(0.0, 1.0)
    }

    /// Scroll offset that produces progress `p`.
    pub fn offset_at(self, p: f64) -> f64 {
        self.start + self.len() * p.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/trigger.rs"]
mod tests;
