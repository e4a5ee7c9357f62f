use super::*;

fn left_result() -> PlacementResult {
    PlacementResult::new(
        Side::Left,
        Rect::new(10.0, 10.0, 110.0, 60.0),
        Rect::new(110.0, 25.0, 120.0, 45.0),
    )
}

fn bottom_result() -> PlacementResult {
    PlacementResult::new(
        Side::Bottom,
        Rect::new(0.0, 10.0, 100.0, 60.0),
        Rect::new(40.0, 0.0, 60.0, 10.0),
    )
}

#[test]
fn left_whole_rect_extends_to_the_right() {
    let r = left_result();
    assert_eq!(r.whole_rect(), Rect::new(10.0, 10.0, 120.0, 60.0));
    assert_eq!(r.content_in_whole(), Rect::new(0.0, 0.0, 100.0, 50.0));
    assert_eq!(r.arrow_in_whole(), Rect::new(100.0, 15.0, 110.0, 35.0));
    assert_eq!(r.anchor_point(), Point::new(1.0, 0.5));
    assert_eq!(r.arrow_tip(), Point::new(120.0, 35.0));
}

#[test]
fn bottom_whole_rect_starts_at_arrow() {
    let r = bottom_result();
    assert_eq!(r.whole_rect(), Rect::new(0.0, 0.0, 100.0, 60.0));
    assert_eq!(r.content_in_whole(), Rect::new(0.0, 10.0, 100.0, 60.0));
    assert_eq!(r.anchor_point(), Point::new(0.5, 0.0));
    assert_eq!(r.arrow_tip(), Point::new(50.0, 0.0));
}

#[test]
fn top_and_right_pivots_sit_on_the_arrow_edge() {
    let top = PlacementResult::new(
        Side::Top,
        Rect::new(0.0, 0.0, 200.0, 100.0),
        Rect::new(40.0, 100.0, 60.0, 110.0),
    );
    assert_eq!(top.whole_rect(), Rect::new(0.0, 0.0, 200.0, 110.0));
    assert_eq!(top.anchor_point(), Point::new(0.25, 1.0));
    assert_eq!(top.arrow_tip(), Point::new(50.0, 110.0));

    let right = PlacementResult::new(
        Side::Right,
        Rect::new(60.0, 0.0, 160.0, 80.0),
        Rect::new(50.0, 10.0, 60.0, 30.0),
    );
    assert_eq!(right.whole_rect(), Rect::new(50.0, 0.0, 160.0, 80.0));
    assert_eq!(right.anchor_point(), Point::new(0.0, 0.25));
    assert_eq!(right.arrow_tip(), Point::new(50.0, 20.0));
}

#[test]
fn zero_extent_pivot_falls_back_to_center() {
    let r = PlacementResult::new(Side::Top, Rect::new(5.0, 5.0, 5.0, 5.0), Rect::ZERO);
    assert_eq!(r.anchor_point(), Point::new(0.5, 1.0));
}

#[test]
fn arrow_center_offset_uses_cross_axis() {
    assert_eq!(bottom_result().arrow_center_offset(), 0.0);
    assert_eq!(left_result().arrow_center_offset(), 0.0);

    let shifted = PlacementResult::new(
        Side::Top,
        Rect::new(0.0, 0.0, 100.0, 50.0),
        Rect::new(10.0, 50.0, 30.0, 60.0),
    );
    assert_eq!(shifted.arrow_center_offset(), 30.0);
}

#[test]
fn report_serializes_rects_as_xywh() {
    let v = serde_json::to_value(left_result().report()).unwrap();
    assert_eq!(v["side"], "left");
    assert_eq!(v["whole"]["width"], 110.0);
    assert_eq!(v["arrow_in_whole"]["x"], 100.0);
    assert_eq!(v["anchor_point"]["x"], 1.0);
}
