/// Crate-wide result alias.
pub type MaskResult<T> = Result<T, MaskError>;

/// Error taxonomy of the mask editor core.
#[derive(thiserror::Error, Debug)]
pub enum MaskError {
    /// A request was made that the editor controls would normally keep unreachable
    /// (apply without a mask, replace without any description, bad script input).
    #[error("validation error: {0}")]
    Validation(String),

    /// The source image could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// The flattened buffer could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// The external generation service rejected the payload. The message is passed through
    /// untouched.
    #[error("generation service error: {0}")]
    Service(String),

    /// Anything else, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MaskError {
    /// Build a [`MaskError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MaskError::Decode`].
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`MaskError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`MaskError::Service`].
    pub fn service(msg: impl Into<String>) -> Self {
        Self::Service(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
