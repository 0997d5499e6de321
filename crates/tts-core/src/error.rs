//! Unified error types for the encode pipeline.

/// Error returned by every stage of `encode`.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    /// The rewrite pipeline hit an unexpected fault.
    #[error("normalization failed: {0}")]
    Normalization(String),

    /// A phonemizable segment could not be transcribed.
    #[error("phoneme backend unavailable: {0}")]
    BackendUnavailable(String),

    /// Filtering against the vocabulary left nothing to encode.
    #[error("no valid tokens produced")]
    EmptySequence,

    /// The encoded sequence exceeds what the model accepts.
    #[error("sequence too long: {length} tokens (max: {max})")]
    SequenceTooLong { length: usize, max: usize },

    /// Locale identifier is not one of the known locales.
    #[error("unsupported locale: {0} (supported: 'a' American English, 'b' British English)")]
    UnsupportedLocale(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// The call was cancelled before it finished.
    #[error("encode cancelled")]
    Cancelled,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Convenience type alias for Results with EncodeError.
pub type EncodeResult<T> = Result<T, EncodeError>;

impl EncodeError {
    /// Create a normalization error with message.
    pub fn normalization(msg: impl Into<String>) -> Self {
        Self::Normalization(msg.into())
    }

    /// Create a backend error with message.
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::BackendUnavailable(msg.into())
    }

    /// Create a config error with message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Short, stable label for the error kind (used as a metrics label).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Normalization(_) => "normalization",
            Self::BackendUnavailable(_) => "backend_unavailable",
            Self::EmptySequence => "empty_sequence",
            Self::SequenceTooLong { .. } => "sequence_too_long",
            Self::UnsupportedLocale(_) => "unsupported_locale",
            Self::Config(_) => "config",
            Self::Cancelled => "cancelled",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
        }
    }
}

impl From<serde_json::Error> for EncodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EncodeError::normalization("bad year literal");
        assert_eq!(err.to_string(), "normalization failed: bad year literal");

        let err = EncodeError::SequenceTooLong {
            length: 600,
            max: 510,
        };
        assert_eq!(err.to_string(), "sequence too long: 600 tokens (max: 510)");

        assert_eq!(
            EncodeError::EmptySequence.to_string(),
            "no valid tokens produced"
        );
    }

    #[test]
    fn test_error_constructors() {
        let err = EncodeError::backend("espeak-ng exited with status 1");
        assert!(matches!(err, EncodeError::BackendUnavailable(_)));

        let err = EncodeError::config("max_tokens must be positive");
        assert!(matches!(err, EncodeError::Config(_)));
    }

    #[test]
    fn test_error_kind_labels() {
        assert_eq!(EncodeError::EmptySequence.kind(), "empty_sequence");
        assert_eq!(EncodeError::Cancelled.kind(), "cancelled");
        assert_eq!(EncodeError::backend("x").kind(), "backend_unavailable");
    }

    #[test]
    fn test_serde_json_conversion() {
        let err: EncodeError = serde_json::from_str::<u32>("not json").unwrap_err().into();
        assert!(matches!(err, EncodeError::Serialization(_)));
    }
}
