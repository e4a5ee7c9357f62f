use crate::{
    foundation::core::{Point, Rect, rect_xywh},
    placement::side::Side,
};

/// The outcome of one placement request: a side plus the bubble body and arrow rects.
///
/// All rects are in the same screen space as the anchor. The value is computed once per
/// presentation and never mutated; every other quantity a presenter needs (the combined
/// frame, local offsets, the scale pivot) is derived from these three fields.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlacementResult {
    /// Side of the anchor the bubble sits on.
    pub side: Side,
    /// Bubble body.
    #[serde(with = "rect_xywh")]
    pub content: Rect,
    /// Pointer connecting the body to the anchor.
    #[serde(with = "rect_xywh")]
    pub arrow: Rect,
}

impl PlacementResult {
    /// Build a result from its parts.
    pub fn new(side: Side, content: Rect, arrow: Rect) -> Self {
        Self {
            side,
            content,
            arrow,
        }
    }

    /// Content and arrow together.
    ///
    /// The arrow only widens the frame along the placement axis; on the cross axis the
    /// frame follows the content.
    pub fn whole_rect(&self) -> Rect {
        let c = self.content;
        let a = self.arrow;
        match self.side {
            Side::Top => Rect::new(c.x0, c.y0, c.x1, c.y1 + a.height()),
            Side::Bottom => Rect::new(c.x0, a.y0, c.x1, a.y0 + c.height() + a.height()),
            Side::Left => Rect::new(c.x0, c.y0, c.x1 + a.width(), c.y1),
            Side::Right => Rect::new(a.x0, c.y0, a.x0 + c.width() + a.width(), c.y1),
        }
    }

    /// Content rect relative to the origin of [`Self::whole_rect`].
    pub fn content_in_whole(&self) -> Rect {
        let origin = self.whole_rect().origin();
        self.content - origin.to_vec2()
    }

    /// Arrow rect relative to the origin of [`Self::whole_rect`].
    pub fn arrow_in_whole(&self) -> Rect {
        let origin = self.whole_rect().origin();
        self.arrow - origin.to_vec2()
    }

    /// Scale-animation pivot, as fractions `0..=1` of [`Self::whole_rect`].
    ///
    /// The pivot sits on the arrow tip edge so a bubble grows out of the anchor.
    pub fn anchor_point(&self) -> Point {
        let whole = self.whole_rect();
        let arrow = self.arrow_in_whole();
        let frac = |v: f64, extent: f64| if extent > 0.0 { v / extent } else { 0.5 };
        match self.side {
            Side::Left => Point::new(1.0, frac(arrow.center().y, whole.height())),
            Side::Right => Point::new(0.0, frac(arrow.center().y, whole.height())),
            Side::Top => Point::new(frac(arrow.center().x, whole.width()), 1.0),
            Side::Bottom => Point::new(frac(arrow.center().x, whole.width()), 0.0),
        }
    }

    /// The point the arrow touches on the anchor edge.
    pub fn arrow_tip(&self) -> Point {
        let a = self.arrow;
        let mid = a.center();
        match self.side {
            Side::Left => Point::new(a.x1, mid.y),
            Side::Right => Point::new(a.x0, mid.y),
            Side::Top => Point::new(mid.x, a.y1),
            Side::Bottom => Point::new(mid.x, a.y0),
        }
    }

    /// Distance between the arrow center and the content center along the cross axis.
    pub fn arrow_center_offset(&self) -> f64 {
        let a = self.arrow.center();
        let c = self.content.center();
        if self.side.is_vertical() {
            (c.x - a.x).abs()
        } else {
            (c.y - a.y).abs()
        }
    }

    /// Flattened view with every derived quantity, for JSON output.
    pub fn report(&self) -> PlacementReport {
        PlacementReport {
            side: self.side,
            content: self.content,
            arrow: self.arrow,
            whole: self.whole_rect(),
            content_in_whole: self.content_in_whole(),
            arrow_in_whole: self.arrow_in_whole(),
            anchor_point: self.anchor_point(),
            arrow_tip: self.arrow_tip(),
        }
    }
}

/// A [`PlacementResult`] together with its derived quantities.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct PlacementReport {
    /// Chosen side.
    pub side: Side,
    /// Bubble body in screen space.
    #[serde(with = "rect_xywh")]
    pub content: Rect,
    /// Arrow in screen space.
    #[serde(with = "rect_xywh")]
    pub arrow: Rect,
    /// Body plus arrow in screen space.
    #[serde(with = "rect_xywh")]
    pub whole: Rect,
    /// Body relative to `whole`.
    #[serde(with = "rect_xywh")]
    pub content_in_whole: Rect,
    /// Arrow relative to `whole`.
    #[serde(with = "rect_xywh")]
    pub arrow_in_whole: Rect,
    /// Scale pivot as fractions of `whole`.
    pub anchor_point: Point,
    /// Arrow tip in screen space.
    pub arrow_tip: Point,
}

#[cfg(test)]
#[path = "../../tests/unit/placement/result.rs"]
mod tests;
