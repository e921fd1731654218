use std::fmt;

use serde::{Deserialize, Serialize};

use crate::foundation::color::TextColor;

/// What should happen inside the highlighted region.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditType {
    /// Remove whatever is highlighted and fill in the background.
    #[default]
    Erase,
    /// Replace the highlighted content (or regenerate it in place).
    Replace,
}

/// Discrete size tier for rendered text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontSize {
    /// Smallest tier.
    Small,
    /// Picker default.
    #[default]
    Medium,
    /// Large tier.
    Large,
    /// Largest tier.
    Huge,
}

impl FontSize {
    /// Label as written into instructions.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "Small",
            Self::Medium => "Medium",
            Self::Large => "Large",
            Self::Huge => "Huge",
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal alignment for rendered text.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextAlignment {
    /// Flush left.
    Left,
    /// Centered (picker default).
    #[default]
    Center,
    /// Flush right.
    Right,
}

impl TextAlignment {
    /// Label as written into instructions.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for TextAlignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Settings that shape the instruction text. Independent of the stroke history.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditSessionState {
    /// Erase or replace.
    pub edit_type: EditType,
    /// Free-text description of the replacement content.
    pub custom_prompt: String,
    /// Font family for text in the region; `None` when no text styling is requested.
    pub selected_font: Option<String>,
    /// Text colour.
    pub font_color: TextColor,
    /// Text size tier.
    pub font_size: FontSize,
    /// Text alignment.
    pub text_alignment: TextAlignment,
}

impl EditSessionState {
    /// Trimmed prompt, `None` when blank.
    pub fn prompt(&self) -> Option<&str> {
        let p = self.custom_prompt.trim();
        (!p.is_empty()).then_some(p)
    }

    /// `true` when the state carries enough description to build an instruction.
    pub fn is_describable(&self) -> bool {
        match self.edit_type {
            EditType::Erase => true,
            EditType::Replace => self.prompt().is_some() || self.selected_font.is_some(),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/instruction/state.rs"]
mod tests;
