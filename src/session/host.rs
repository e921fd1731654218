/// Failure reported by the external generation service.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ServiceError {
    /// Message as reported upstream.
    pub message: String,
}

impl ServiceError {
    /// Wrap an upstream message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// The image-generation collaborator that turns a masked image + instruction into a new image.
///
/// Retries, prompt templating and transport all live behind this trait.
pub trait GenerationService {
    /// Submit the edit. Returns the URL of the generated image.
    fn apply(&mut self, flattened_image: &[u8], instruction: &str) -> Result<String, ServiceError>;
}

/// Callbacks into the UI shell hosting the editor.
pub trait EditorHost {
    /// The user confirmed the edit.
    fn on_apply(&mut self, masked_image_base64: &str, instruction: &str);
    /// The user discarded the session.
    fn on_cancel(&mut self);
}
