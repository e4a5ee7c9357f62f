use crate::{
    foundation::core::{Rect, Size},
    placement::{
        candidates::Candidates, request::PlacementRequest, result::PlacementResult, side::Side,
    },
};

/// Compute where a bubble should appear around its anchor.
///
/// Preferred sides are tried in order and the first one that fits wins. Otherwise every
/// side is considered and ties are broken by, in order: single-axis overflow, largest
/// area, squareness (only when nothing fits), arrow centering, and finally the fixed
/// priority Top, Bottom, then whichever of Left/Right has more room.
///
/// This never fails. When nothing fits, the result is the best available clipped rect.
#[tracing::instrument(
    skip(request),
    fields(anchor = ?request.anchor, preferred = ?request.preferred_sides)
)]
pub fn compute_placement(request: &PlacementRequest) -> PlacementResult {
    let solver = Solver::new(request);
    let result = solver.solve();
    tracing::debug!(
        side = %result.side,
        content = ?result.content,
        arrow = ?result.arrow,
        "placement resolved"
    );
    result
}

/// One request plus the usable area derived from it.
struct Solver<'a> {
    req: &'a PlacementRequest,
    usable: Rect,
}

impl<'a> Solver<'a> {
    fn new(req: &'a PlacementRequest) -> Self {
        Self {
            req,
            usable: req.usable_rect(),
        }
    }

    fn solve(&self) -> PlacementResult {
        for &side in &self.req.preferred_sides {
            if let Some(found) = self.fit_frame(side) {
                tracing::debug!(%side, "preferred side fits");
                return found;
            }
        }
        self.auto_select()
    }

    fn auto_select(&self) -> PlacementResult {
        let mut group: Candidates = Side::ALL
            .iter()
            .filter_map(|&side| self.fit_frame(side))
            .collect();
        tracing::debug!(fitting = ?group.sides(), "fit test");

        if group.is_empty() {
            group = self.best_overflow_frames();
            tracing::debug!(remaining = ?group.sides(), "nothing fits, using overflow frames");
        }
        if let Some(one) = group.single() {
            return one;
        }

        group.retain_min_by(PlacementResult::arrow_center_offset);
        tracing::debug!(remaining = ?group.sides(), "arrow centering");
        if let Some(one) = group.single() {
            return one;
        }

        self.by_priority(&group)
            .unwrap_or_else(|| self.frame_for(Side::Top))
    }

    /// Whether the full content size fits on `side` without clipping.
    fn fits(&self, side: Side) -> bool {
        let usable = self.usable;
        let anchor = self.req.anchor;
        let content = self.req.content_size;
        let thickness = self.req.arrow_size.height;

        if content.height > usable.height() || content.width > usable.width() {
            return false;
        }

        let axis_fits = if side.is_vertical() {
            anchor.height() + content.height + thickness <= usable.height()
        } else {
            anchor.width() + content.width + thickness <= usable.width()
        };
        if !axis_fits {
            return false;
        }

        match side {
            Side::Left => anchor.x0 - thickness - content.width >= usable.x0,
            Side::Right => anchor.x1 + thickness + content.width <= usable.x1,
            Side::Top => anchor.y0 - thickness - content.height >= usable.y0,
            Side::Bottom => anchor.y1 + thickness + content.height <= usable.y1,
        }
    }

    fn fit_frame(&self, side: Side) -> Option<PlacementResult> {
        self.fits(side).then(|| self.frame_for(side))
    }

    /// Content and arrow rects on `side`, clipped to the space available there.
    fn frame_for(&self, side: Side) -> PlacementResult {
        let usable = self.usable;
        let anchor = self.req.anchor;
        let pad = self.req.arrow_padding;
        let arrow = side.oriented_arrow(self.req.arrow_size);
        let mid = anchor.center();

        match side {
            Side::Left | Side::Right => {
                let (arrow_x, avail_w) = if side == Side::Left {
                    let arrow_x = anchor.x0 - arrow.width;
                    (arrow_x, arrow_x - usable.x0)
                } else {
                    let arrow_x = anchor.x1;
                    (arrow_x, usable.x1 - arrow_x - arrow.width)
                };
                let size = self.clip_content(Size::new(avail_w, usable.height()));
                let y = place_across(mid.y, size.height, usable.y0, usable.y1);
                let x = if side == Side::Left {
                    arrow_x - size.width
                } else {
                    arrow_x + arrow.width
                };
                let arrow_y =
                    place_arrow(mid.y, arrow.height, y, size.height, pad.top, pad.bottom);
                PlacementResult::new(
                    side,
                    Rect::from_origin_size((x, y), size),
                    Rect::from_origin_size((arrow_x, arrow_y), arrow),
                )
            }
            Side::Top | Side::Bottom => {
                let (arrow_y, avail_h) = if side == Side::Top {
                    let arrow_y = anchor.y0 - arrow.height;
                    (arrow_y, arrow_y - usable.y0)
                } else {
                    let arrow_y = anchor.y1;
                    (arrow_y, usable.y1 - arrow_y - arrow.height)
                };
                let size = self.clip_content(Size::new(usable.width(), avail_h));
                let x = place_across(mid.x, size.width, usable.x0, usable.x1);
                let y = if side == Side::Top {
                    arrow_y - size.height
                } else {
                    arrow_y + arrow.height
                };
                let arrow_x =
                    place_arrow(mid.x, arrow.width, x, size.width, pad.left, pad.right);
                PlacementResult::new(
                    side,
                    Rect::from_origin_size((x, y), size),
                    Rect::from_origin_size((arrow_x, arrow_y), arrow),
                )
            }
        }
    }

    fn clip_content(&self, available: Size) -> Size {
        let want = self.req.content_size;
        let cap = self.req.max_content_size;
        Size::new(
            available.width.min(want.width).min(cap.width).max(0.0),
            available.height.min(want.height).min(cap.height).max(0.0),
        )
    }

    /// Pick among clipped frames when no side fits outright.
    fn best_overflow_frames(&self) -> Candidates {
        let all: Candidates = Side::ALL.iter().map(|&side| self.frame_for(side)).collect();
        let want = self.req.content_size;

        let mut group = all.filtered(|c| {
            c.content.width() >= want.width || c.content.height() >= want.height
        });
        if group.len() == 1 {
            return group;
        }
        if group.is_empty() {
            group = all;
        }

        group.retain_max_by(|c| c.content.area());
        if group.len() > 1 {
            group.retain_min_by(|c| (c.content.width() - c.content.height()).abs());
        }
        group
    }

    fn by_priority(&self, group: &Candidates) -> Option<PlacementResult> {
        if let Some(top) = group.get(Side::Top) {
            return Some(top);
        }
        if let Some(bottom) = group.get(Side::Bottom) {
            return Some(bottom);
        }

        let screen = self.req.screen_bounds;
        let anchor = self.req.anchor;
        let left_space = anchor.x0 - screen.x0;
        let right_space = screen.x1 - anchor.x1;
        let (first, second) = if left_space <= right_space {
            (Side::Right, Side::Left)
        } else {
            (Side::Left, Side::Right)
        };
        group.get(first).or_else(|| group.get(second))
    }
}

/// Start of a span of length `len` centered on `mid`, pushed back inside `[lo, hi]`.
fn place_across(mid: f64, len: f64, lo: f64, hi: f64) -> f64 {
    let start = mid - len / 2.0;
    let overflow = mid + len / 2.0 - hi;
    if overflow > 0.0 {
        start - overflow
    } else if start < lo {
        lo
    } else {
        start
    }
}

/// Start of the arrow, centered on `mid` and kept inside the content span minus padding.
///
/// When the padded span is shorter than the arrow, only the arrow center is clamped.
fn place_arrow(mid: f64, len: f64, start: f64, extent: f64, pad_lo: f64, pad_hi: f64) -> f64 {
    let lo = start + pad_lo;
    let hi = start + extent - pad_hi - len;
    if hi >= lo {
        return (mid - len / 2.0).max(lo).min(hi);
    }
    let center = mid.max(start + pad_lo).min(start + extent - pad_hi);
    center - len / 2.0
}

#[cfg(test)]
#[path = "../../tests/unit/placement/solver.rs"]
mod tests;
