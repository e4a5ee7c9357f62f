use super::*;

const MINIMAL: &str = r#"{
    "anchor": {"x": 100, "y": 500, "width": 40, "height": 40},
    "content_size": {"width": 200, "height": 150},
    "screen_bounds": {"x": 0, "y": 0, "width": 800, "height": 600}
}"#;

#[test]
fn json_defaults_match_constructor() {
    let parsed = PlacementRequest::from_json(MINIMAL).unwrap();
    let built = PlacementRequest::new(
        Rect::new(100.0, 500.0, 140.0, 540.0),
        Size::new(200.0, 150.0),
        Rect::new(0.0, 0.0, 800.0, 600.0),
    );
    assert_eq!(parsed, built);
    assert_eq!(parsed.min_edge, EdgeInsets::uniform(10.0));
    assert_eq!(parsed.arrow_size, Size::new(20.0, 10.0));
    assert!(parsed.preferred_sides.is_empty());
}

#[test]
fn preferred_sides_parse_lowercase() {
    let json = MINIMAL.replacen('{', r#"{"preferred_sides": ["right", "top"],"#, 1);
    let req = PlacementRequest::from_json(&json).unwrap();
    assert_eq!(req.preferred_sides, vec![Side::Right, Side::Top]);
}

#[test]
fn usable_rect_honors_safe_area_flag() {
    let req = PlacementRequest::new(
        Rect::new(0.0, 0.0, 10.0, 10.0),
        Size::new(10.0, 10.0),
        Rect::new(0.0, 0.0, 400.0, 800.0),
    )
    .with_safe_area(EdgeInsets::new(44.0, 0.0, 34.0, 0.0), false);
    assert_eq!(req.usable_rect(), Rect::new(10.0, 54.0, 390.0, 756.0));

    let ignored = req.with_safe_area(EdgeInsets::new(44.0, 0.0, 34.0, 0.0), true);
    assert_eq!(ignored.usable_rect(), Rect::new(10.0, 10.0, 390.0, 790.0));
}

#[test]
fn usable_rect_ignores_horizontal_safe_area() {
    let req = PlacementRequest::new(
        Rect::ZERO,
        Size::ZERO,
        Rect::new(0.0, 0.0, 800.0, 400.0),
    )
    .with_safe_area(EdgeInsets::new(0.0, 40.0, 0.0, 40.0), false);
    assert_eq!(req.usable_rect().x0, 10.0);
    assert_eq!(req.usable_rect().x1, 790.0);
}

#[test]
fn validate_rejects_bad_geometry() {
    let base = PlacementRequest::from_json(MINIMAL).unwrap();

    let mut neg = base.clone();
    neg.content_size = Size::new(-1.0, 10.0);
    assert!(matches!(neg.validate(), Err(PopfitError::Validation(_))));

    let mut nan = base.clone();
    nan.anchor = Rect::new(f64::NAN, 0.0, 1.0, 1.0);
    assert!(nan.validate().is_err());

    let squeezed = base.clone().with_min_edge(EdgeInsets::uniform(500.0));
    let err = squeezed.validate().unwrap_err();
    assert!(err.to_string().contains("no usable screen area"));

    let mut inf_max = base;
    inf_max.max_content_size = Size::new(f64::INFINITY, 10.0);
    assert!(inf_max.validate().is_err());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = PlacementRequest::from_json("{\"anchor\": 3}").unwrap_err();
    assert!(matches!(err, PopfitError::Serde(_)));
}

#[test]
fn bubble_style_sets_arrow_and_padding() {
    let style = BubbleStyle {
        corner_radius: 12.0,
        arrow_size: Size::new(16.0, 8.0),
        ..BubbleStyle::default()
    };
    let req = PlacementRequest::from_json(MINIMAL)
        .unwrap()
        .with_bubble_style(&style);
    assert_eq!(req.arrow_size, Size::new(16.0, 8.0));
    assert_eq!(req.arrow_padding, EdgeInsets::uniform(12.0));
}

#[test]
fn from_json_file_reads_and_reports_io_errors() {
    let dir = std::env::temp_dir().join(format!("popfit_request_{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("request.json");
    std::fs::write(&path, MINIMAL).unwrap();
    let req = PlacementRequest::from_json_file(&path).unwrap();
    assert_eq!(req, PlacementRequest::from_json(MINIMAL).unwrap());

    let missing = dir.join("missing.json");
    let err = PlacementRequest::from_json_file(&missing).unwrap_err();
    assert!(matches!(err, PopfitError::Other(_)), "{err:?}");
    assert!(err.to_string().contains("missing.json"), "{err}");

    std::fs::write(&path, "{not json").unwrap();
    let err = PlacementRequest::from_json_file(&path).unwrap_err();
    assert!(matches!(err, PopfitError::Serde(_)), "{err:?}");
    let _ = std::fs::remove_dir_all(&dir);
}
