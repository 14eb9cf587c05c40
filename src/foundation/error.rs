/// Convenience result type used across the crate.
pub type LcmResult<T> = Result<T, LcmError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum LcmError {
    /// Invalid user-provided input: screen names, source paths, frame counts, timing.
    #[error("input error: {0}")]
    Input(String),

    /// A configuration document or produced asset breaks the data contract.
    #[error("validation error: {0}")]
    Validation(String),

    /// An image could not be decoded where a decode failure is fatal.
    #[error("decode error: {0}")]
    Decode(String),

    /// One or more deploy steps failed.
    #[error("deploy error: {0}")]
    Deploy(String),

    /// Errors when serializing or deserializing documents.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl LcmError {
    /// Build a [`LcmError::Input`] value.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build a [`LcmError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`LcmError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`LcmError::Deploy`] value.
    pub fn deploy(msg: impl Into<String>) -> Self {
        Self::Deploy(msg.into())
    }

    /// Build a [`LcmError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

impl From<serde_json::Error> for LcmError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
