use super::*;

#[test]
fn defaults_match_standard_bubble() {
    let s = BubbleStyle::default();
    assert_eq!(s.corner_radius, 15.0);
    assert_eq!(s.arrow_size, Size::new(20.0, 10.0));
    assert_eq!(s.fill_rgba8, [76, 76, 76, 217]);
    assert_eq!(s.border_width, 0.0);
}

#[test]
fn missing_json_fields_take_defaults() {
    let s: BubbleStyle = serde_json::from_str(r#"{"corner_radius": 6}"#).unwrap();
    assert_eq!(s.corner_radius, 6.0);
    assert_eq!(s.arrow_size, BubbleStyle::default().arrow_size);
    assert_eq!(s.fill_rgba8, BubbleStyle::default().fill_rgba8);
}

#[test]
fn arrow_padding_follows_corner_radius() {
    let s = BubbleStyle {
        corner_radius: 8.0,
        ..BubbleStyle::default()
    };
    assert_eq!(s.arrow_padding(), EdgeInsets::uniform(8.0));
}

#[test]
fn validate_rejects_negative_lengths() {
    assert!(BubbleStyle::default().validate().is_ok());

    let bad = BubbleStyle {
        border_width: -1.0,
        ..BubbleStyle::default()
    };
    let err = bad.validate().unwrap_err().to_string();
    assert!(err.contains("border_width"), "{err}");

    let bad = BubbleStyle {
        corner_radius: f64::NAN,
        ..BubbleStyle::default()
    };
    assert!(bad.validate().is_err());
}
