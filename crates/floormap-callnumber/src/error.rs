//! Error types for call number normalization.

use thiserror::Error;

use crate::scheme::CallNumberKind;

/// Errors that can occur while normalizing call numbers or parsing ranges.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CallNumberError {
    /// The token does not match the scheme's pattern.
    #[error("'{token}' is not a valid {kind} call number")]
    InvalidFormat { kind: CallNumberKind, token: String },

    /// Neither scheme accepts the start of the range. Carries the Dewey rejection.
    #[error("unrecognized call number format in range '{range}'")]
    UnrecognizedCallNumberFormat {
        range: String,
        #[source]
        source: Box<CallNumberError>,
    },

    /// The stop key does not sort after the start key.
    #[error("call number range '{range}' ends before it starts")]
    InvertedRange { range: String },
}

impl CallNumberError {
    pub(crate) fn invalid(kind: CallNumberKind, token: &str) -> Self {
        Self::InvalidFormat {
            kind,
            token: token.to_string(),
        }
    }
}

/// Result type for call number operations.
pub type Result<T> = std::result::Result<T, CallNumberError>;

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_error_display() {
        let err = CallNumberError::invalid(CallNumberKind::Dewey, "QA76");
        assert_eq!(err.to_string(), "'QA76' is not a valid Dewey call number");
    }

    #[test]
    fn test_unrecognized_exposes_source() {
        let err = CallNumberError::UnrecognizedCallNumberFormat {
            range: "?? - ??".to_string(),
            source: Box::new(CallNumberError::invalid(CallNumberKind::Dewey, "??")),
        };
        let source = err.source().expect("source error");
        assert_eq!(source.to_string(), "'??' is not a valid Dewey call number");
    }
}
