/// Convenience result type used across popfit.
pub type PopfitResult<T> = Result<T, PopfitError>;

/// Error taxonomy for the request and CLI layers.
///
/// Placement itself is total and never produces one of these.
#[derive(thiserror::Error, Debug)]
pub enum PopfitError {
    /// Invalid user-provided geometry or configuration.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing requests and results.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PopfitError {
    /// Build a [`PopfitError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PopfitError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for PopfitError {
    fn from(value: serde_json::Error) -> Self {
        Self::serde(value.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
