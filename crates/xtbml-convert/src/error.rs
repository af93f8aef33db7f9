//! Error types for XTbML conversion.
//!
//! Every variant is terminal for the conversion call that produced it; no
//! partial output is returned alongside an error.

use std::fmt;

use thiserror::Error;

/// Errors produced while converting a single XTbML document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConvertError {
    /// The token stream could not be decoded (truncated input, bad markup).
    #[error("malformed XML at byte {position}: {message}")]
    MalformedXml {
        /// Byte offset in the input where decoding stopped.
        position: u64,
        /// Description from the XML reader.
        message: String,
    },

    /// No `<ContentClassification>` element in the document.
    #[error("content classification not found")]
    MissingClassification,

    /// The classification has no (or a blank) `<TableName>`.
    #[error("content classification missing table name")]
    MissingTableName,

    /// A value element has no usable age identifier.
    #[error("rate entry in table {table} missing age identifier")]
    MissingAgeIdentifier {
        /// Ordinal of the owning table.
        table: usize,
    },

    /// A value nested two axes deep has no duration identifier.
    #[error("nested axis in table {table} missing duration identifier")]
    MissingDurationIdentifier {
        /// Ordinal of the owning table.
        table: usize,
    },

    /// Non-empty value text that is not a finite number.
    #[error("invalid rate value '{value}' in table {table}")]
    InvalidRateValue {
        /// Ordinal of the owning table.
        table: usize,
        /// The trimmed source text.
        value: String,
    },

    /// The document contained no `<Y>` values at all.
    #[error("no rate data found")]
    NoRateData,

    /// Reading the input failed.
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// Encoding the payload failed.
    #[error("failed to encode JSON: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

/// Fieldless discriminant of [`ConvertError`] for matching and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedXml,
    MissingClassification,
    MissingTableName,
    MissingAgeIdentifier,
    MissingDurationIdentifier,
    InvalidRateValue,
    NoRateData,
    Io,
    Serialize,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MalformedXml => "malformed-xml",
            ErrorKind::MissingClassification => "missing-classification",
            ErrorKind::MissingTableName => "missing-table-name",
            ErrorKind::MissingAgeIdentifier => "missing-age-identifier",
            ErrorKind::MissingDurationIdentifier => "missing-duration-identifier",
            ErrorKind::InvalidRateValue => "invalid-rate-value",
            ErrorKind::NoRateData => "no-rate-data",
            ErrorKind::Io => "io",
            ErrorKind::Serialize => "serialize",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ConvertError {
    pub(crate) fn malformed(position: u64, message: impl fmt::Display) -> Self {
        Self::MalformedXml {
            position,
            message: message.to_string(),
        }
    }

    /// The kind of failure, without its context.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedXml { .. } => ErrorKind::MalformedXml,
            Self::MissingClassification => ErrorKind::MissingClassification,
            Self::MissingTableName => ErrorKind::MissingTableName,
            Self::MissingAgeIdentifier { .. } => ErrorKind::MissingAgeIdentifier,
            Self::MissingDurationIdentifier { .. } => ErrorKind::MissingDurationIdentifier,
            Self::InvalidRateValue { .. } => ErrorKind::InvalidRateValue,
            Self::NoRateData => ErrorKind::NoRateData,
            Self::Io(_) => ErrorKind::Io,
            Self::Serialize(_) => ErrorKind::Serialize,
        }
    }

    /// True when the input document itself is at fault (as opposed to I/O).
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Serialize(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ConvertError::InvalidRateValue {
            table: 2,
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "invalid rate value 'abc' in table 2");
        assert_eq!(err.kind(), ErrorKind::InvalidRateValue);
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_error_from_io() {
        let err: ConvertError = std::io::Error::other("boom").into();
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(!err.is_invalid_input());
    }

    #[test]
    fn test_malformed_keeps_position() {
        let err = ConvertError::malformed(17, "unexpected end of input");
        assert_eq!(
            err.to_string(),
            "malformed XML at byte 17: unexpected end of input"
        );
    }
}
