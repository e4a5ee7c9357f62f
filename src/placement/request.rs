use std::path::Path;

use anyhow::Context as _;

use crate::{
    bubble::style::BubbleStyle,
    foundation::core::{
        EdgeInsets, Rect, Size, ensure_finite, rect_xywh, validate_rect, validate_size,
    },
    foundation::error::{PopfitError, PopfitResult},
    placement::side::Side,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Every input the placement solver needs for one presentation.
///
/// A request is plain data that can be:
/// - built programmatically with [`PlacementRequest::new`] and the `with_*` setters
/// - deserialized from JSON, where every field except `anchor`, `content_size` and
///   `screen_bounds` is optional
///
/// Solving is done by [`crate::compute_placement`], which never fails. Call
/// [`PlacementRequest::validate`] first when the geometry comes from an untrusted source.
pub struct PlacementRequest {
    /// Screen-space rect of the element the bubble points at.
    #[serde(with = "rect_xywh")]
    pub anchor: Rect,
    /// Sides to try first, in order. Empty means pick automatically.
    #[serde(default)]
    pub preferred_sides: Vec<Side>,
    /// Minimum clearance between the bubble and the screen edges.
    #[serde(default = "default_min_edge")]
    pub min_edge: EdgeInsets,
    /// Desired size of the bubble body.
    pub content_size: Size,
    /// Upper bound on the body size.
    #[serde(default = "unbounded_size")]
    pub max_content_size: Size,
    /// Size of a downward-pointing arrow; swapped for left/right placements.
    #[serde(default = "default_arrow_size")]
    pub arrow_size: Size,
    /// Distance the arrow keeps from each content corner.
    #[serde(default)]
    pub arrow_padding: EdgeInsets,
    /// Screen or window bounds.
    #[serde(with = "rect_xywh")]
    pub screen_bounds: Rect,
    /// Safe-area insets of the screen; only top and bottom are used.
    #[serde(default)]
    pub safe_area: EdgeInsets,
    /// Ignore `safe_area` when computing the usable area.
    #[serde(default)]
    pub ignore_safe_area: bool,
}

fn default_min_edge() -> EdgeInsets {
    EdgeInsets::uniform(10.0)
}

fn default_arrow_size() -> Size {
    Size::new(20.0, 10.0)
}

/// Size used when the body has no upper bound.
pub fn unbounded_size() -> Size {
    Size::new(f64::MAX, f64::MAX)
}

impl PlacementRequest {
    /// Request with the default margins, arrow and unbounded max size.
    pub fn new(anchor: Rect, content_size: Size, screen_bounds: Rect) -> Self {
        Self {
            anchor,
            preferred_sides: Vec::new(),
            min_edge: default_min_edge(),
            content_size,
            max_content_size: unbounded_size(),
            arrow_size: default_arrow_size(),
            arrow_padding: EdgeInsets::ZERO,
            screen_bounds,
            safe_area: EdgeInsets::ZERO,
            ignore_safe_area: false,
        }
    }

    /// Sides to try first, in order.
    pub fn with_preferred_sides(mut self, sides: impl IntoIterator<Item = Side>) -> Self {
        self.preferred_sides = sides.into_iter().collect();
        self
    }

    /// Minimum clearance to the screen edges.
    pub fn with_min_edge(mut self, min_edge: EdgeInsets) -> Self {
        self.min_edge = min_edge;
        self
    }

    /// Upper bound on the body size.
    pub fn with_max_content_size(mut self, size: Size) -> Self {
        self.max_content_size = size;
        self
    }

    /// Downward-pointing arrow size.
    pub fn with_arrow_size(mut self, size: Size) -> Self {
        self.arrow_size = size;
        self
    }

    /// Arrow-to-corner padding.
    pub fn with_arrow_padding(mut self, padding: EdgeInsets) -> Self {
        self.arrow_padding = padding;
        self
    }

    /// Safe-area insets and whether to ignore them.
    pub fn with_safe_area(mut self, safe_area: EdgeInsets, ignore: bool) -> Self {
        self.safe_area = safe_area;
        self.ignore_safe_area = ignore;
        self
    }

    /// Take the arrow size and the corner-derived arrow padding from a bubble style.
    pub fn with_bubble_style(mut self, style: &BubbleStyle) -> Self {
        self.arrow_size = style.arrow_size;
        self.arrow_padding = style.arrow_padding();
        self
    }

    /// Parse a request from JSON and validate it.
    pub fn from_json(json: &str) -> PopfitResult<Self> {
        let req: Self = serde_json::from_str(json)?;
        req.validate()?;
        Ok(req)
    }

    /// Read a request from a JSON file and validate it.
    pub fn from_json_file(path: &Path) -> PopfitResult<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read request '{}'", path.display()))?;
        Self::from_json(&json)
    }

    /// Screen bounds shrunk by the minimum edges and, unless ignored, the top and
    /// bottom safe-area insets.
    pub fn usable_rect(&self) -> Rect {
        let (safe_top, safe_bottom) = if self.ignore_safe_area {
            (0.0, 0.0)
        } else {
            (self.safe_area.top, self.safe_area.bottom)
        };
        let shrink = EdgeInsets::new(
            self.min_edge.top + safe_top,
            self.min_edge.left,
            self.min_edge.bottom + safe_bottom,
            self.min_edge.right,
        );
        self.screen_bounds - kurbo::Insets::from(shrink)
    }

    /// Reject geometry the solver would only turn into meaningless rects.
    pub fn validate(&self) -> PopfitResult<()> {
        validate_rect(self.anchor, "anchor")?;
        validate_rect(self.screen_bounds, "screen_bounds")?;
        validate_size(self.content_size, "content_size")?;
        validate_size(self.arrow_size, "arrow_size")?;
        self.min_edge.validate("min_edge")?;
        self.arrow_padding.validate("arrow_padding")?;
        self.safe_area.validate("safe_area")?;

        for (name, value) in [
            ("max_content_size.width", self.max_content_size.width),
            ("max_content_size.height", self.max_content_size.height),
        ] {
            ensure_finite(value, name)?;
            if value < 0.0 {
                return Err(PopfitError::validation(format!("{name} must be >= 0")));
            }
        }

        let usable = self.usable_rect();
        if usable.width() < 0.0 || usable.height() < 0.0 {
            return Err(PopfitError::validation(
                "min_edge and safe_area leave no usable screen area",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/request.rs"]
mod tests;
