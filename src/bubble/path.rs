use std::f64::consts::{FRAC_PI_2, PI};

use kurbo::{Arc, Vec2};

use crate::{
    bubble::style::BubbleStyle,
    foundation::core::{BezPath, Point, Rect},
    placement::{result::PlacementResult, side::Side},
};

const ARC_TOLERANCE: f64 = 0.1;

/// Closed outline of a bubble: rounded content rect plus the arrow notch.
///
/// Coordinates are local to [`PlacementResult::whole_rect`]. The path is traced
/// clockwise (y down) starting after the top-left corner, and the notch apex sits on
/// the arrow tip. `corner_radius` is clamped to half the shorter content side.
pub fn bubble_outline(placement: &PlacementResult, corner_radius: f64) -> BezPath {
    let c = placement.content_in_whole();
    let a = placement.arrow_in_whole();
    let r = corner_radius
        .min(c.width() / 2.0)
        .min(c.height() / 2.0)
        .max(0.0);
    let side = placement.side;

    let mut path = BezPath::new();
    path.move_to((c.x0 + r, c.y0));

    // top edge, left to right
    if side == Side::Bottom {
        notch(
            &mut path,
            Point::new(a.x0, c.y0),
            Point::new(a.center().x, a.y0),
            Point::new(a.x1, c.y0),
        );
    }
    path.line_to((c.x1 - r, c.y0));
    corner(&mut path, Point::new(c.x1 - r, c.y0 + r), r, -FRAC_PI_2);

    // right edge, top to bottom
    if side == Side::Left {
        notch(
            &mut path,
            Point::new(c.x1, a.y0),
            Point::new(a.x1, a.center().y),
            Point::new(c.x1, a.y1),
        );
    }
    path.line_to((c.x1, c.y1 - r));
    corner(&mut path, Point::new(c.x1 - r, c.y1 - r), r, 0.0);

    // bottom edge, right to left
    if side == Side::Top {
        notch(
            &mut path,
            Point::new(a.x1, c.y1),
            Point::new(a.center().x, a.y1),
            Point::new(a.x0, c.y1),
        );
    }
    path.line_to((c.x0 + r, c.y1));
    corner(&mut path, Point::new(c.x0 + r, c.y1 - r), r, FRAC_PI_2);

    // left edge, bottom to top
    if side == Side::Right {
        notch(
            &mut path,
            Point::new(c.x0, a.y1),
            Point::new(a.x0, a.center().y),
            Point::new(c.x0, a.y0),
        );
    }
    path.line_to((c.x0, c.y0 + r));
    corner(&mut path, Point::new(c.x0 + r, c.y0 + r), r, PI);

    path.close_path();
    path
}

fn notch(path: &mut BezPath, base_start: Point, apex: Point, base_end: Point) {
    path.line_to(base_start);
    path.line_to(apex);
    path.line_to(base_end);
}

/// Quarter turn clockwise around `center`, starting at `start_angle`.
fn corner(path: &mut BezPath, center: Point, radius: f64, start_angle: f64) {
    if radius <= 0.0 {
        return;
    }
    let arc = Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle,
        sweep_angle: FRAC_PI_2,
        x_rotation: 0.0,
    };
    path.extend(arc.append_iter(ARC_TOLERANCE));
}

/// Standalone SVG document of the bubble, sized to the whole rect.
pub fn bubble_svg(placement: &PlacementResult, style: &BubbleStyle) -> String {
    let whole: Rect = placement.whole_rect();
    let d = bubble_outline(placement, style.corner_radius).to_svg();
    let [fr, fg, fb, fa] = style.fill_rgba8;
    let mut attrs = format!(
        "fill=\"rgb({fr},{fg},{fb})\" fill-opacity=\"{:.3}\"",
        f64::from(fa) / 255.0
    );
    if style.border_width > 0.0 {
        let [br, bg, bb, ba] = style.border_rgba8;
        attrs.push_str(&format!(
            " stroke=\"rgb({br},{bg},{bb})\" stroke-opacity=\"{:.3}\" stroke-width=\"{}\"",
            f64::from(ba) / 255.0,
            style.border_width
        ));
    }
    format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n  <path d=\"{d}\" {attrs}/>\n</svg>\n",
        w = whole.width(),
        h = whole.height(),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/bubble/path.rs"]
mod tests;
