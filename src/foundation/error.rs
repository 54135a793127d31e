/// Convenience result type used across the generator.
pub type GradientResult<T> = Result<T, GradientError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Out-of-range numeric parameters are never reported here; they are clamped during
/// sanitization. Only structurally malformed input and resource failures surface as errors.
#[derive(thiserror::Error, Debug)]
pub enum GradientError {
    /// Invalid caller-provided data that cannot be clamped (e.g. an unknown preset name).
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while producing or post-processing a raster.
    #[error("evaluation error: {0}")]
    Evaluation(String),

    /// Errors when serializing or deserializing a parameter payload.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl GradientError {
    /// Build a [`GradientError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`GradientError::Evaluation`] value.
    pub fn evaluation(msg: impl Into<String>) -> Self {
        Self::Evaluation(msg.into())
    }

    /// Build a [`GradientError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for GradientError {
    fn from(e: serde_json::Error) -> Self {
        Self::serde(e.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
