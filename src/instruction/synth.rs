use crate::encode::jpeg::{encode_jpeg, to_base64};
use crate::foundation::error::{MaskError, MaskResult};
use crate::instruction::state::{EditSessionState, EditType};
use crate::render::compositor::Compositor;

/// Instruction sent for [`EditType::Erase`].
pub const ERASE_INSTRUCTION: &str =
    "Remove the object highlighted in red. Fill the area seamlessly with the background.";

/// Instruction sent for [`EditType::Replace`] without a prompt.
pub const REGENERATE_INSTRUCTION: &str =
    "Regenerate the highlighted area to improve quality and details.";

/// What the external generation service receives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditPayload {
    /// Composited buffer (highlight included) as JPEG.
    pub flattened_image: Vec<u8>,
    /// Natural-language edit instruction.
    pub instruction: String,
}

impl EditPayload {
    /// The image as standard base64 without a `data:` prefix.
    pub fn image_base64(&self) -> String {
        to_base64(&self.flattened_image)
    }
}

/// Build the instruction text for `state`.
///
/// Erase ignores prompt and font settings entirely. Replace uses the trimmed prompt when present,
/// otherwise asks for an in-place regeneration, and appends a text-styling directive when a font
/// is selected.
pub fn instruction_text(state: &EditSessionState) -> String {
    match state.edit_type {
        EditType::Erase => ERASE_INSTRUCTION.to_owned(),
        EditType::Replace => {
            let mut out = match state.prompt() {
                Some(p) => format!("Replace the object highlighted in red with: {p}."),
                None => REGENERATE_INSTRUCTION.to_owned(),
            };
            if let Some(font) = &state.selected_font {
                out.push_str(&format!(
                    " IMPORTANT: Render any text in this area using Font: \"{font}\", Color: {} (Hex Code), Size: {}, Alignment: {}.",
                    state.font_color, state.font_size, state.text_alignment
                ));
            }
            out
        }
    }
}

/// Produce the handoff payload from the current buffer.
///
/// Refuses when there is no active mask, or when a replace has neither a prompt nor a font.
#[tracing::instrument(skip(state, compositor), fields(edit_type = ?state.edit_type))]
pub fn synthesize(
    state: &EditSessionState,
    has_mask: bool,
    compositor: &Compositor,
    jpeg_quality: u8,
) -> MaskResult<EditPayload> {
    if !has_mask {
        return Err(MaskError::validation("nothing is highlighted"));
    }
    if !state.is_describable() {
        return Err(MaskError::validation(
            "replace needs a prompt or a selected font",
        ));
    }

    let instruction = instruction_text(state);
    let flattened_image = encode_jpeg(compositor.buffer(), compositor.canvas(), jpeg_quality)?;
    tracing::debug!(bytes = flattened_image.len(), "payload synthesized");
    Ok(EditPayload {
        flattened_image,
        instruction,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/instruction/synth.rs"]
mod tests;
