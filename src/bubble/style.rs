use crate::foundation::{
    core::{EdgeInsets, Size, ensure_non_negative, validate_size},
    error::PopfitResult,
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Appearance of a drawn bubble background.
pub struct BubbleStyle {
    /// Radius of the four content corners.
    #[serde(default = "default_corner_radius")]
    pub corner_radius: f64,
    /// Stroke width of the outline; zero disables the stroke.
    #[serde(default)]
    pub border_width: f64,
    /// Fill color as straight-alpha RGBA8.
    #[serde(default = "default_fill_rgba8")]
    pub fill_rgba8: [u8; 4],
    /// Stroke color as straight-alpha RGBA8.
    #[serde(default = "default_border_rgba8")]
    pub border_rgba8: [u8; 4],
    /// Size of a downward-pointing arrow.
    #[serde(default = "default_arrow_size")]
    pub arrow_size: Size,
}

fn default_corner_radius() -> f64 {
    15.0
}

fn default_fill_rgba8() -> [u8; 4] {
    // #4C4C4C at 85%
    [0x4c, 0x4c, 0x4c, 217]
}

fn default_border_rgba8() -> [u8; 4] {
    [255, 255, 255, 255]
}

fn default_arrow_size() -> Size {
    Size::new(20.0, 10.0)
}

impl Default for BubbleStyle {
    fn default() -> Self {
        Self {
            corner_radius: default_corner_radius(),
            border_width: 0.0,
            fill_rgba8: default_fill_rgba8(),
            border_rgba8: default_border_rgba8(),
            arrow_size: default_arrow_size(),
        }
    }
}

impl BubbleStyle {
    /// Arrow-to-corner padding that keeps the arrow off the rounded corners.
    pub fn arrow_padding(&self) -> EdgeInsets {
        EdgeInsets::uniform(self.corner_radius.max(0.0))
    }

    /// Reject negative or non-finite lengths.
    pub fn validate(&self) -> PopfitResult<()> {
        ensure_non_negative(self.corner_radius, "corner_radius")?;
        ensure_non_negative(self.border_width, "border_width")?;
        validate_size(self.arrow_size, "arrow_size")
    }
}

#[cfg(test)]
#[path = "../../tests/unit/bubble/style.rs"]
mod tests;
