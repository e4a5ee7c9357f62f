use crate::foundation::error::{PopfitError, PopfitResult};

pub use kurbo::{BezPath, Insets, Point, Rect, Size};

/// Tolerance used when comparing derived lengths and areas for ties.
pub(crate) const TIE_EPSILON: f64 = 1e-9;

pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= TIE_EPSILON * a.abs().max(b.abs()).max(1.0)
}

/// Minimum clearances on each edge of a rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EdgeInsets {
    /// Top clearance.
    #[serde(default)]
    pub top: f64,
    /// Left clearance.
    #[serde(default)]
    pub left: f64,
    /// Bottom clearance.
    #[serde(default)]
    pub bottom: f64,
    /// Right clearance.
    #[serde(default)]
    pub right: f64,
}

impl EdgeInsets {
    /// All edges zero.
    pub const ZERO: Self = Self::uniform(0.0);

    /// Build insets from explicit edges.
    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    /// Same clearance on every edge.
    pub const fn uniform(v: f64) -> Self {
        Self::new(v, v, v, v)
    }

    /// `left + right`.
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    /// `top + bottom`.
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }

    pub(crate) fn validate(self, field: &str) -> PopfitResult<()> {
        for (edge, value) in [
            ("top", self.top),
            ("left", self.left),
            ("bottom", self.bottom),
            ("right", self.right),
        ] {
            ensure_non_negative(value, &format!("{field}.{edge}"))?;
        }
        Ok(())
    }
}

impl From<EdgeInsets> for Insets {
    fn from(value: EdgeInsets) -> Self {
        Insets::new(value.left, value.top, value.right, value.bottom)
    }
}

pub(crate) fn ensure_finite(value: f64, field: &str) -> PopfitResult<()> {
    if !value.is_finite() {
        return Err(PopfitError::validation(format!("{field} must be finite")));
    }
    Ok(())
}

pub(crate) fn ensure_non_negative(value: f64, field: &str) -> PopfitResult<()> {
    ensure_finite(value, field)?;
    if value < 0.0 {
        return Err(PopfitError::validation(format!("{field} must be >= 0")));
    }
    Ok(())
}

pub(crate) fn validate_size(size: Size, field: &str) -> PopfitResult<()> {
    ensure_non_negative(size.width, &format!("{field}.width"))?;
    ensure_non_negative(size.height, &format!("{field}.height"))
}

pub(crate) fn validate_rect(rect: Rect, field: &str) -> PopfitResult<()> {
    ensure_finite(rect.x0, &format!("{field}.x"))?;
    ensure_finite(rect.y0, &format!("{field}.y"))?;
    ensure_non_negative(rect.width(), &format!("{field}.width"))?;
    ensure_non_negative(rect.height(), &format!("{field}.height"))
}

/// Serde adapter storing a [`Rect`] as `{x, y, width, height}`.
pub mod rect_xywh {
    use kurbo::Rect;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    struct Xywh {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    }

    /// Serialize `rect` as `{x, y, width, height}`.
    pub fn serialize<S: Serializer>(rect: &Rect, serializer: S) -> Result<S::Ok, S::Error> {
        Xywh {
            x: rect.x0,
            y: rect.y0,
            width: rect.width(),
            height: rect.height(),
        }
        .serialize(serializer)
    }

    /// Deserialize `{x, y, width, height}` into a [`Rect`].
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rect, D::Error> {
        let v = Xywh::deserialize(deserializer)?;
        Ok(Rect::new(v.x, v.y, v.x + v.width, v.y + v.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
