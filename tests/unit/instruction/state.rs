use super::*;

#[test]
fn defaults_are_erase_with_medium_centered_white_text() {
    let s = EditSessionState::default();
    assert_eq!(s.edit_type, EditType::Erase);
    assert_eq!(s.font_size, FontSize::Medium);
    assert_eq!(s.text_alignment, TextAlignment::Center);
    assert_eq!(s.font_color, TextColor::WHITE);
    assert!(s.selected_font.is_none());
}

#[test]
fn prompt_is_trimmed_and_blank_is_none() {
    let mut s = EditSessionState::default();
    assert_eq!(s.prompt(), None);
    s.custom_prompt = "  \t ".to_owned();
    assert_eq!(s.prompt(), None);
    s.custom_prompt = "  a cat ".to_owned();
    assert_eq!(s.prompt(), Some("a cat"));
}

#[test]
fn describability_depends_on_edit_type() {
    let mut s = EditSessionState::default();
    assert!(s.is_describable());

    s.edit_type = EditType::Replace;
    assert!(!s.is_describable());
    s.selected_font = Some("Inter".to_owned());
    assert!(s.is_describable());
    s.selected_font = None;
    s.custom_prompt = "sky".to_owned();
    assert!(s.is_describable());
}

#[test]
fn labels_match_instruction_wording() {
    assert_eq!(FontSize::Huge.to_string(), "Huge");
    assert_eq!(TextAlignment::Right.to_string(), "right");
}

#[test]
fn json_uses_snake_case_and_fills_defaults() {
    let s: EditSessionState =
        serde_json::from_str(r##"{"edit_type":"replace","font_color":"#ff0000"}"##).unwrap();
    assert_eq!(s.edit_type, EditType::Replace);
    assert_eq!(s.font_color, TextColor::rgb(255, 0, 0));
    assert_eq!(s.font_size, FontSize::Medium);
}
