use crate::foundation::{
    core::{EdgeInsets, Size, ensure_non_negative, validate_size},
    error::{PopfitError, PopfitResult},
};

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Flow-grid metrics of a popup menu made of uniform items.
pub struct GridLayout {
    /// Size of every item.
    pub item_size: Size,
    /// Vertical gap between rows.
    #[serde(default)]
    pub line_spacing: f64,
    /// Horizontal gap between items in a row.
    #[serde(default)]
    pub item_spacing: f64,
    /// Inset around the item grid.
    #[serde(default)]
    pub section_inset: EdgeInsets,
    /// Inset between the menu edge and the grid.
    #[serde(default)]
    pub content_inset: EdgeInsets,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl GridLayout {
    /// 60×60 items, 4pt gaps, 4pt content inset with 8pt at the bottom.
    pub fn standard() -> Self {
        Self {
            item_size: Size::new(60.0, 60.0),
            line_spacing: 4.0,
            item_spacing: 4.0,
            section_inset: EdgeInsets::ZERO,
            content_inset: EdgeInsets::new(4.0, 4.0, 8.0, 4.0),
        }
    }

    fn horizontal_insets(&self) -> f64 {
        self.section_inset.horizontal() + self.content_inset.horizontal()
    }

    fn vertical_insets(&self) -> f64 {
        self.section_inset.vertical() + self.content_inset.vertical()
    }

    /// Width of one row holding `n` items, insets included.
    pub fn row_width(&self, n: usize) -> f64 {
        span(self.item_size.width, self.item_spacing, n) + self.horizontal_insets()
    }

    /// Height of `rows` rows, insets included.
    pub fn grid_height(&self, rows: usize) -> f64 {
        span(self.item_size.height, self.line_spacing, rows) + self.vertical_insets()
    }

    /// Largest size a menu may take when limited to `max_per_row` columns and `max_rows`
    /// rows. `None` leaves that axis unbounded.
    pub fn max_content_size(&self, max_per_row: Option<usize>, max_rows: Option<usize>) -> Size {
        Size::new(
            max_per_row.map_or(f64::MAX, |n| self.row_width(n)),
            max_rows.map_or(f64::MAX, |n| self.grid_height(n)),
        )
    }

    /// How many items fit side by side within `max_width`. Always at least one.
    pub fn items_per_row(&self, max_width: f64) -> usize {
        let step = self.item_size.width + self.item_spacing;
        if step <= 0.0 {
            return usize::MAX;
        }
        let inner = max_width - self.horizontal_insets() + self.item_spacing;
        if inner <= step {
            return 1;
        }
        ((inner / step).floor() as usize).max(1)
    }

    /// Size a menu of `item_count` items wants, given the width it may use on screen.
    ///
    /// Items that fit one row produce a single tight row. Otherwise rows are filled to
    /// [`Self::items_per_row`] and the row count grows. The result never exceeds
    /// `max_content`.
    pub fn content_size(&self, item_count: usize, available_width: f64, max_content: Size) -> Size {
        if item_count == 0 {
            return Size::ZERO;
        }
        let max_width = available_width.min(max_content.width);
        let per_row = self.items_per_row(max_width);

        let (width, height) = if item_count <= per_row {
            (self.row_width(item_count), self.grid_height(1))
        } else {
            let rows = item_count.div_ceil(per_row);
            (
                max_width.min(self.row_width(per_row)),
                self.grid_height(rows),
            )
        };
        Size::new(width.min(max_content.width), height.min(max_content.height))
    }

    /// Reject negative or non-finite metrics.
    pub fn validate(&self) -> PopfitResult<()> {
        validate_size(self.item_size, "item_size")?;
        ensure_non_negative(self.line_spacing, "line_spacing")?;
        ensure_non_negative(self.item_spacing, "item_spacing")?;
        self.section_inset.validate("section_inset")?;
        self.content_inset.validate("content_inset")?;
        if self.item_size.width + self.item_spacing <= 0.0 {
            return Err(PopfitError::validation(
                "item_size.width + item_spacing must be > 0",
            ));
        }
        Ok(())
    }
}

/// Length of `n` cells of size `cell` separated by `gap`.
fn span(cell: f64, gap: f64, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    n * cell + (n - 1.0) * gap
}

#[cfg(test)]
#[path = "../../tests/unit/menu/grid.rs"]
mod tests;
