/// Convenience result type used across the crate.
pub type PrintframeResult<T> = Result<T, PrintframeError>;

/// Error type for pricing, compositing, frame storage and order building.
///
/// Every failure is local and recoverable by the caller (re-upload, re-crop, retry).
#[derive(thiserror::Error, Debug)]
pub enum PrintframeError {
    /// An image payload could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// An operation was invoked before its inputs were established.
    #[error("precondition not met: {0}")]
    PreconditionNotMet(String),

    /// Input values are out of range or inconsistent.
    #[error("validation error: {0}")]
    Validation(String),

    /// The composited raster could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Frame storage failed to read or write.
    #[error("storage error: {0}")]
    Storage(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error, with its source chain preserved.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Failure class of a [`PrintframeError`], for callers that branch on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`PrintframeError::Decode`].
    Decode,
    /// See [`PrintframeError::PreconditionNotMet`].
    PreconditionNotMet,
    /// See [`PrintframeError::Validation`].
    Validation,
    /// See [`PrintframeError::Encode`].
    Encode,
    /// See [`PrintframeError::Storage`].
    Storage,
    /// See [`PrintframeError::Serde`].
    Serde,
    /// See [`PrintframeError::Other`].
    Other,
}

impl PrintframeError {
    /// Build a [`PrintframeError::Decode`].
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`PrintframeError::PreconditionNotMet`].
    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::PreconditionNotMet(msg.into())
    }

    /// Build a [`PrintframeError::Validation`].
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PrintframeError::Encode`].
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`PrintframeError::Storage`].
    pub fn storage(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    /// Build a [`PrintframeError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Failure class of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Decode(_) => ErrorKind::Decode,
            Self::PreconditionNotMet(_) => ErrorKind::PreconditionNotMet,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Encode(_) => ErrorKind::Encode,
            Self::Storage(_) => ErrorKind::Storage,
            Self::Serde(_) => ErrorKind::Serde,
            Self::Other(_) => ErrorKind::Other,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
