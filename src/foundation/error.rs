/// Convenience result type used across frameline.
pub type FramelineResult<T> = Result<T, FramelineError>;

/// Error taxonomy for the fallible boundary APIs (scene loading and validation).
///
/// Per-frame evaluation and the job queue never return errors.
#[derive(thiserror::Error, Debug)]
pub enum FramelineError {
    /// Invalid user-provided scene or job data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FramelineError {
    /// Build a [`FramelineError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FramelineError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
