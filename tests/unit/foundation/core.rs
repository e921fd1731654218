use super::*;

#[test]
fn canvas_validation() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(70_000, 10).is_err());
    let c = Canvas::new(1280, 720).unwrap();
    assert_eq!(c, Canvas::THUMBNAIL);
    assert_eq!(c.rgba_len(), 1280 * 720 * 4);
}

#[test]
fn brush_size_clamps_to_slider_range() {
    assert_eq!(BrushSize::new(5.0).px(), BrushSize::MIN);
    assert_eq!(BrushSize::new(400.0).px(), BrushSize::MAX);
    assert_eq!(BrushSize::new(64.0).px(), 64.0);
    assert_eq!(BrushSize::new(f64::NAN), BrushSize::DEFAULT);
    assert_eq!(BrushSize::default().px(), 40.0);
}

#[test]
fn brush_size_serializes_as_plain_number() {
    let s = serde_json::to_string(&BrushSize::new(55.0)).unwrap();
    assert_eq!(s, "55.0");
}
