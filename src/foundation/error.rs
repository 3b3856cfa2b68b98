/// Convenience result type used across the crate.
pub type TimelineResult<T> = Result<T, TimelineError>;

/// Error taxonomy for construction-time APIs.
///
/// Runtime playback never returns these: missing elements and failed assets degrade to no-ops.
#[derive(thiserror::Error, Debug)]
pub enum TimelineError {
    /// Invalid user-provided data (durations, configuration values).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while building or validating timelines and steps.
    #[error("animation error: {0}")]
    Animation(String),

    /// Errors while parsing or resolving scroll trigger positions.
    #[error("scroll error: {0}")]
    Scroll(String),

    /// Errors when serializing or deserializing configuration.
    #[error("config error: {0}")]
    Config(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TimelineError {
    /// Build a [`TimelineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`TimelineError::Animation`] value.
    pub fn animation(msg: impl Into<String>) -> Self {
        Self::Animation(msg.into())
    }

    /// Build a [`TimelineError::Scroll`] value.
    pub fn scroll(msg: impl Into<String>) -> Self {
        Self::Scroll(msg.into())
    }

    /// Build a [`TimelineError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
