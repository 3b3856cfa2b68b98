use crate::foundation::error::{TimelineError, TimelineResult};

pub use kurbo::{Affine, Rect, Vec2};

/// Identity of a renderable element owned by the rendering layer.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u32);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Viewport size in device-independent pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Viewport {
    /// Create a validated viewport with finite, positive dimensions.
    pub fn new(width: f64, height: f64) -> TimelineResult<Self> {
        if !width.is_finite() || !height.is_finite() || width <= 0.0 || height <= 0.0 {
            return Err(TimelineError::validation(
                "viewport width/height must be finite and > 0",
            ));
        }
        Ok(Self { width, height })
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 800.0,
        }
    }
}

/// A translation length, resolved against the viewport when sampled.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Length {
    /// Absolute pixels.
    Px(f64),
    /// Percent of viewport width (`-15.0` is `-15vw`).
    Vw(f64),
    /// Percent of viewport height.
    Vh(f64),
}

impl Length {
    /// Resolve to pixels for `viewport`.
    pub fn resolve(self, viewport: Viewport) -> f64 {
        match self {
            Self::Px(v) => v,
            Self::Vw(v) => viewport.width * v / 100.0,
            Self::Vh(v) => viewport.height * v / 100.0,
        }
    }

    pub(crate) fn is_finite(self) -> bool {
        match self {
            Self::Px(v) | Self::Vw(v) | Self::Vh(v) => v.is_finite(),
        }
    }
}

impl From<f64> for Length {
    fn from(px: f64) -> Self {
        Self::Px(px)
    }
}

/// Resolved visual state of one element.
///
/// Translation is in pixels relative to the element's laid-out position, rotation in degrees
/// (clockwise positive, like CSS), opacity in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementTransform {
    /// Horizontal translation in pixels.
    pub x: f64,
    /// Vertical translation in pixels.
    pub y: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Rotation in degrees.
    pub rotation_deg: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl ElementTransform {
    /// The resting state: no offset, identity scale and rotation, fully visible.
    pub const RESTING: Self = Self {
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotation_deg: 0.0,
        opacity: 1.0,
    };

    /// Matrix form, composed as `T(x, y) * R(rotation) * S(scale)` about the element origin.
    pub fn to_affine(self) -> Affine {
        let t_translate = Affine::translate(Vec2::new(self.x, self.y));
        let t_rotate = Affine::rotate(self.rotation_deg.to_radians());
        let t_scale = Affine::scale(self.scale);
        t_translate * t_rotate * t_scale
    }

    /// Component-wise comparison within `eps`.
    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        (self.x - other.x).abs() <= eps
            && (self.y - other.y).abs() <= eps
            && (self.scale - other.scale).abs() <= eps
            && (self.rotation_deg - other.rotation_deg).abs() <= eps
            && (self.opacity - other.opacity).abs() <= eps
    }
}

impl Default for ElementTransform {
    fn default() -> Self {
        Self::RESTING
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
