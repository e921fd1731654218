use super::*;
use crate::foundation::core::Canvas;
use crate::instruction::state::EditType;
use crate::session::opts::EditorOpts;

fn session() -> EditorSession {
    let src = image::DynamicImage::ImageRgba8(image::RgbaImage::from_pixel(
        8,
        8,
        image::Rgba([40, 80, 120, 255]),
    ));
    let opts = EditorOpts {
        canvas: Canvas::new(64, 36).unwrap(),
        ..EditorOpts::default()
    };
    EditorSession::open(&src, opts).unwrap()
}

const TWO_STROKES_ONE_UNDONE: &str = r#"{
    "display": {"left": 100, "top": 50, "width": 32, "height": 18},
    "edit": {"edit_type": "replace", "custom_prompt": "a kite"},
    "events": [
        {"type": "brush", "size": 20},
        {"type": "down", "x": 102, "y": 55},
        {"type": "move", "x": 130, "y": 55},
        {"type": "up"},
        {"type": "down", "x": 102, "y": 63},
        {"type": "move", "x": 130, "y": 63},
        {"type": "leave"},
        {"type": "key", "key": "z", "ctrl": true},
        {"type": "key", "key": "y", "ctrl": true, "in_text_field": true}
    ]
}"#;

#[test]
fn replay_applies_settings_and_events() {
    let script: GestureScript = serde_json::from_str(TWO_STROKES_ONE_UNDONE).unwrap();
    let mut s = session();
    script.replay(&mut s).unwrap();

    assert_eq!(s.state().edit_type, EditType::Replace);
    assert_eq!(s.timeline().len(), 2);
    assert!(s.can_redo());
    assert_eq!(s.timeline().active().len(), 1);

    let first = &s.timeline().active()[0];
    assert_eq!(first.width().px(), 20.0);
    assert_eq!(first.points()[0].position(), Point::new(4.0, 10.0));
    assert!(s.can_apply());
}

#[test]
fn replay_is_deterministic() {
    let script: GestureScript = serde_json::from_str(TWO_STROKES_ONE_UNDONE).unwrap();
    let mut a = session();
    let mut b = session();
    script.replay(&mut a).unwrap();
    script.replay(&mut b).unwrap();
    assert_eq!(a.compositor().digest(), b.compositor().digest());
}

#[test]
fn validate_rejects_degenerate_display() {
    let script = GestureScript {
        display: DisplayRect::sized(0.0, 10.0),
        edit: None,
        events: vec![],
    };
    assert!(matches!(script.validate(), Err(MaskError::Validation(_))));
}

#[test]
fn validate_rejects_non_finite_coordinates() {
    let script = GestureScript {
        display: DisplayRect::sized(10.0, 10.0),
        edit: None,
        events: vec![GestureEvent::Down {
            x: f64::NAN,
            y: 1.0,
        }],
    };
    let err = script.validate().unwrap_err();
    assert!(err.to_string().contains("event 0"), "{err}");
}

#[test]
fn missing_edit_keeps_session_defaults() {
    let script: GestureScript =
        serde_json::from_str(r#"{"display": {"left": 0, "top": 0, "width": 64, "height": 36}}"#)
            .unwrap();
    let mut s = session();
    script.replay(&mut s).unwrap();
    assert_eq!(s.state().edit_type, EditType::Erase);
    assert!(!s.has_mask());
}
