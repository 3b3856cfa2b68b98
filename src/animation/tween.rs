use crate::{
    animation::{ease::Ease, timeline::Position},
    foundation::core::{ElementId, ElementTransform, Length, Viewport},
    foundation::error::{TimelineError, TimelineResult},
};

/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        // Exact at both ends.
        a * (1.0 - t) + b * t
    }
}

impl Lerp for ElementTransform {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            x: f64::lerp(&a.x, &b.x, t),
            y: f64::lerp(&a.y, &b.y, t),
            scale: f64::lerp(&a.scale, &b.scale, t),
            rotation_deg: f64::lerp(&a.rotation_deg, &b.rotation_deg, t),
            opacity: f64::lerp(&a.opacity, &b.opacity, t),
        }
    }
}

/// A partial set of transform properties.
///
/// Unset properties are left untouched when the set is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TweenVars {
    /// Horizontal translation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<Length>,
    /// Vertical translation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<Length>,
    /// Uniform scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Rotation in degrees.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rotation_deg: Option<f64>,
    /// Opacity in `[0, 1]`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl TweenVars {
    /// Empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set horizontal translation (bare numbers are pixels).
    pub fn x(mut self, x: impl Into<Length>) -> Self {
        self.x = Some(x.into());
        self
    }

    /// Set vertical translation (bare numbers are pixels).
    pub fn y(mut self, y: impl Into<Length>) -> Self {
        self.y = Some(y.into());
        self
    }

    /// Set uniform scale.
    pub fn scale(mut self, scale: f64) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Set rotation in degrees.
    pub fn rotation(mut self, deg: f64) -> Self {
        self.rotation_deg = Some(deg);
        self
    }

    /// Set opacity.
    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    /// Return `true` when no property is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Overwrite the set properties of `base`, resolving lengths against `viewport`.
    pub fn apply_to(&self, base: ElementTransform, viewport: Viewport) -> ElementTransform {
        self.blend(base, 1.0, viewport)
    }

    /// Move each set property of `from` toward this set by factor `t`.
    pub fn blend(&self, from: ElementTransform, t: f64, viewport: Viewport) -> ElementTransform {
        let mut out = from;
        if let Some(x) = self.x {
            out.x = f64::lerp(&from.x, &x.resolve(viewport), t);
        }
        if let Some(y) = self.y {
            out.y = f64::lerp(&from.y, &y.resolve(viewport), t);
        }
        if let Some(scale) = self.scale {
            out.scale = f64::lerp(&from.scale, &scale, t);
        }
        if let Some(rot) = self.rotation_deg {
            out.rotation_deg = f64::lerp(&from.rotation_deg, &rot, t);
        }
        if let Some(opacity) = self.opacity {
            out.opacity = f64::lerp(&from.opacity, &opacity, t);
        }
        out
    }

    fn validate(&self, field: &str) -> TimelineResult<()> {
        let lengths_ok = [self.x, self.y].iter().flatten().all(|l| l.is_finite());
        let scalars_ok = [self.scale, self.rotation_deg, self.opacity]
            .iter()
            .flatten()
            .all(|v| v.is_finite());
        if !lengths_ok || !scalars_ok {
            return Err(TimelineError::animation(format!(
                "{field} properties must be finite"
            )));
        }
        if let Some(o) = self.opacity
            && !(0.0..=1.0).contains(&o)
        {
            return Err(TimelineError::animation(format!(
                "{field} opacity must be in [0, 1]"
            )));
        }
        Ok(())
    }
}

/// One tween inside a timeline: targets, optional start state, end state and timing.
///
/// Steps are immutable once built; the builder methods consume and return the step.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineStep {
    targets: Vec<ElementId>,
    from: Option<TweenVars>,
    to: TweenVars,
    duration: f64,
    ease: Ease,
    stagger: f64,
    delay: f64,
    position: Position,
}

impl TimelineStep {
    /// Default duration in timeline units.
    pub const DEFAULT_DURATION: f64 = 0.5;
    /// Default curve when none is given.
    pub const DEFAULT_EASE: Ease = Ease::OutQuad;

    /// Tween from the targets' current values to `to`.
    pub fn to(targets: impl IntoIterator<Item = ElementId>, to: TweenVars) -> Self {
        Self {
            targets: targets.into_iter().collect(),
            from: None,
            to,
            duration: Self::DEFAULT_DURATION,
            ease: Self::DEFAULT_EASE,
            stagger: 0.0,
            delay: 0.0,
            position: Position::End,
        }
    }

    /// Tween from explicit `from` values to `to`.
    ///
    /// The `from` state is rendered immediately, before the step starts.
    pub fn from_to(
        targets: impl IntoIterator<Item = ElementId>,
        from: TweenVars,
        to: TweenVars,
    ) -> Self {
        Self {
            from: Some(from),
            ..Self::to(targets, to)
        }
    }

    /// Set duration (seconds for time-driven timelines, weight for scroll-driven ones).
    pub fn duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Set the easing curve.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Offset between successive targets' start times.
    pub fn stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    /// Extra wait after the resolved position before the first target starts.
    pub fn delay(mut self, delay: f64) -> Self {
        self.delay = delay;
        self
    }

    /// Placement within the parent timeline.
    pub fn at(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Targets in stagger order.
    pub fn targets(&self) -> &[ElementId] {
        &self.targets
    }

    /// Explicit start state, if any.
    pub fn from_vars(&self) -> Option<&TweenVars> {
        self.from.as_ref()
    }

    /// End state.
    pub fn to_vars(&self) -> &TweenVars {
        &self.to
    }

    /// Per-target duration.
    pub fn duration_secs(&self) -> f64 {
        self.duration
    }

    /// Easing curve.
    pub fn ease_fn(&self) -> Ease {
        self.ease
    }

    /// Stagger between targets.
    pub fn stagger_secs(&self) -> f64 {
        self.stagger
    }

    /// Delay before the first target.
    pub fn delay_secs(&self) -> f64 {
        self.delay
    }

    /// Requested placement.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Span from the resolved position to the last target's end, delay included.
    pub fn span(&self) -> f64 {
        let n = self.targets.len().saturating_sub(1) as f64;
        self.delay + self.stagger * n + self.duration
    }

    /// Offset of target `index` relative to the resolved position.
    pub fn target_offset(&self, index: usize) -> f64 {
        self.delay + self.stagger * index as f64
    }

    /// Local progress in `[0, 1]` of a target that started `elapsed` units ago.
    pub fn local_progress(&self, elapsed: f64) -> f64 {
        if self.duration <= 0.0 {
            return if elapsed >= 0.0 { 1.0 } else { 0.0 };
        }
        (elapsed / self.duration).clamp(0.0, 1.0)
    }

    /// Validate timing and property values.
    pub fn validate(&self) -> TimelineResult<()> {
        for (name, v) in [
            ("duration", self.duration),
            ("stagger", self.stagger),
            ("delay", self.delay),
        ] {
            if !v.is_finite() || v < 0.0 {
                return Err(TimelineError::animation(format!(
                    "step {name} must be finite and >= 0"
                )));
            }
        }
        if self.to.is_empty() {
            return Err(TimelineError::animation(
                "step must animate at least one property",
            ));
        }
        if let Some(from) = &self.from {
            from.validate("from")?;
        }
        self.to.validate("to")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/tween.rs"]
mod tests;
