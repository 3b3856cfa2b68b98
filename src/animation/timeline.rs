use std::collections::BTreeSet;

use crate::{
    animation::tween::TimelineStep,
    foundation::core::{ElementId, ElementTransform, Viewport},
    foundation::error::{TimelineError, TimelineResult},
};

/// Where a step is placed when added to a timeline.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    /// Append at the current end of the timeline.
    End,
    /// Absolute time from the timeline start.
    At(f64),
    /// Relative to the current end (`-0.6` is `"-=0.6"`).
    FromEnd(f64),
    /// Same start as the previously added step (`"<"`).
    WithPrevious,
}

impl std::str::FromStr for Position {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let number = |v: &str| {
            v.trim()
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .ok_or_else(|| TimelineError::animation(format!("invalid position '{s}'")))
        };
        if s.is_empty() || s == ">" {
            Ok(Self::End)
        } else if s == "<" {
            Ok(Self::WithPrevious)
        } else if let Some(rest) = s.strip_prefix("-=") {
            Ok(Self::FromEnd(-number(rest)?))
        } else if let Some(rest) = s.strip_prefix("+=") {
            Ok(Self::FromEnd(number(rest)?))
        } else {
            let at = number(s)?;
            if at < 0.0 {
                return Err(TimelineError::animation(format!(
                    "absolute position must be >= 0, got '{s}'"
                )));
            }
            Ok(Self::At(at))
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
struct ScheduledStep {
    step: TimelineStep,
    start: f64,
}

/// An ordered set of steps with resolved start times.
///
/// Sampling is pure: the transform at time `t` depends only on `t`, the base transform and the
/// viewport, never on how many frames were rendered before.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    steps: Vec<ScheduledStep>,
    duration: f64,
}

impl Timeline {
    /// Start building a timeline.
    pub fn builder() -> TimelineBuilder {
        TimelineBuilder::default()
    }

    /// End time of the last step.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Return `true` when the timeline has no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Steps in insertion order.
    pub fn steps(&self) -> impl Iterator<Item = &TimelineStep> {
        self.steps.iter().map(|s| &s.step)
    }

    /// Resolved `[start, end]` of step `index`, delay and stagger included.
    pub fn step_window(&self, index: usize) -> Option<(f64, f64)> {
        self.steps
            .get(index)
            .map(|s| (s.start, s.start + s.step.span()))
    }

    /// Every element referenced by any step.
    pub fn targets(&self) -> BTreeSet<ElementId> {
        self.steps
            .iter()
            .flat_map(|s| s.step.targets().iter().copied())
            .collect()
    }

    /// Return `true` once `time` is at or past the end.
    pub fn is_complete(&self, time: f64) -> bool {
        time >= self.duration
    }

    /// Transform of `id` at `time`, layered over `base`.
    ///
    /// Steps apply in insertion order. A step that has started blends from its explicit
    /// `from` state (or from the value produced by earlier steps) toward its end state.
    /// Before any step has touched the element, the first from-to step pins it at its `from`
    /// state. Elements no step targets come back as `base`.
    pub fn sample(
        &self,
        id: ElementId,
        time: f64,
        base: ElementTransform,
        viewport: Viewport,
    ) -> ElementTransform {
        let mut value = base;
        let mut touched = false;
        for sched in &self.steps {
            let step = &sched.step;
            for (index, _) in step.targets().iter().enumerate().filter(|(_, t)| **t == id) {
                let start = sched.start + step.target_offset(index);
                if time >= start {
                    let local = step.local_progress(time - start);
                    let from = match step.from_vars() {
                        Some(vars) => vars.apply_to(value, viewport),
                        None => value,
                    };
                    value = step
                        .to_vars()
                        .blend(from, step.ease_fn().apply(local), viewport);
                    touched = true;
                } else if !touched && let Some(vars) = step.from_vars() {
                    value = vars.apply_to(value, viewport);
                    touched = true;
                }
            }
        }
        value
    }
}

/// Incremental timeline construction; positions resolve against the steps added so far.
#[derive(Debug, Default)]
pub struct TimelineBuilder {
    steps: Vec<ScheduledStep>,
    end: f64,
}

impl TimelineBuilder {
    /// Validate and place `step`.
    pub fn add(mut self, step: TimelineStep) -> TimelineResult<Self> {
        step.validate()?;
        let start = match step.position() {
            Position::End => self.end,
            Position::At(t) => t,
            Position::FromEnd(delta) => self.end + delta,
            Position::WithPrevious => self.steps.last().map_or(0.0, |s| s.start),
        };
        if !start.is_finite() {
            return Err(TimelineError::animation("resolved step start is not finite"));
        }
        // Overlaps past the beginning clamp to zero.
        let start = start.max(0.0);
        self.end = self.end.max(start + step.span());
        self.steps.push(ScheduledStep { step, start });
        Ok(self)
    }

    /// Finish the timeline.
    pub fn build(self) -> Timeline {
        Timeline {
            steps: self.steps,
            duration: self.end,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/timeline.rs"]
mod tests;
