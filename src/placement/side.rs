use crate::foundation::core::Size;

/// Where a bubble sits relative to its anchor.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Above the anchor, arrow pointing down.
    Top,
    /// Below the anchor, arrow pointing up.
    Bottom,
    /// Left of the anchor, arrow pointing right.
    Left,
    /// Right of the anchor, arrow pointing left.
    Right,
}

impl Side {
    /// Every side, in tie-break priority order for the vertical pair.
    pub const ALL: [Side; 4] = [Side::Top, Side::Bottom, Side::Left, Side::Right];

    /// `true` for [`Side::Top`] and [`Side::Bottom`].
    pub fn is_vertical(self) -> bool {
        matches!(self, Side::Top | Side::Bottom)
    }

    /// Arrow size for this side, given the size of a downward-pointing arrow.
    pub fn oriented_arrow(self, arrow: Size) -> Size {
        if self.is_vertical() {
            arrow
        } else {
            Size::new(arrow.height, arrow.width)
        }
    }

    /// Lowercase name as used in JSON and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Top => "top",
            Side::Bottom => "bottom",
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Side {
    type Err = crate::PopfitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "top" => Ok(Side::Top),
            "bottom" => Ok(Side::Bottom),
            "left" => Ok(Side::Left),
            "right" => Ok(Side::Right),
            other => Err(crate::PopfitError::validation(format!(
                "unknown side '{other}' (expected top, bottom, left or right)"
            ))),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/placement/side.rs"]
mod tests;
