//! Error types for parameter parsing and validation.

use thiserror::Error;

/// Result type for parameter file operations.
pub type SpecResult<T> = Result<T, SpecError>;

/// Errors that can occur while reading or validating parameter files.
///
/// Every variant is a hard failure: decoders never hand back a partially
/// interpreted parameter set.
#[derive(Debug, Error)]
pub enum SpecError {
    /// The file does not start with the expected signature.
    #[error("invalid signature: expected {expected:?}, found {found:?}")]
    InvalidSignature {
        /// Expected signature bytes.
        expected: [u8; 4],
        /// Signature bytes actually read.
        found: [u8; 4],
    },

    /// The version field names a layout this reader does not know.
    #[error("unsupported {format} version: {version}")]
    UnsupportedVersion {
        /// Format name (e.g. "sfs").
        format: &'static str,
        /// Version read from the file.
        version: i32,
    },

    /// Input ended before the declared layout was complete.
    #[error("truncated {format} data: {source}")]
    Truncated {
        /// Format name.
        format: &'static str,
        /// Underlying read error.
        #[source]
        source: std::io::Error,
    },

    /// Waveform selector outside 0..=3.
    #[error("invalid waveform selector: {0}")]
    InvalidWaveform(i32),

    /// Export format field outside its supported values.
    #[error("invalid export format '{field}': {value}")]
    InvalidExportFormat {
        /// Field name.
        field: &'static str,
        /// Rejected value.
        value: i64,
    },

    /// JSON (de)serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error outside of a decoder.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpecError {
    /// Creates a truncation error for the named format.
    pub fn truncated(format: &'static str, source: std::io::Error) -> Self {
        Self::Truncated { format, source }
    }

    /// Returns the stable error code string.
    pub fn code(&self) -> &'static str {
        match self {
            SpecError::InvalidSignature { .. } => "SPEC_001",
            SpecError::UnsupportedVersion { .. } => "SPEC_002",
            SpecError::Truncated { .. } => "SPEC_003",
            SpecError::InvalidWaveform(_) => "SPEC_004",
            SpecError::InvalidExportFormat { .. } => "SPEC_005",
            SpecError::Json(_) => "SPEC_006",
            SpecError::Io(_) => "SPEC_007",
        }
    }

    /// Whether this error means the file is unsupported or corrupt, as
    /// opposed to an environment failure.
    pub fn is_corrupt_file(&self) -> bool {
        !matches!(self, SpecError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_distinct() {
        let errors = [
            SpecError::InvalidSignature {
                expected: *b"rFX ",
                found: *b"RIFF",
            },
            SpecError::UnsupportedVersion {
                format: "sfs",
                version: 99,
            },
            SpecError::truncated("rfx", std::io::ErrorKind::UnexpectedEof.into()),
            SpecError::InvalidWaveform(7),
            SpecError::InvalidExportFormat {
                field: "channels",
                value: 3,
            },
        ];

        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_version_message() {
        let err = SpecError::UnsupportedVersion {
            format: "sfs",
            version: 99,
        };
        assert_eq!(err.to_string(), "unsupported sfs version: 99");
        assert!(err.is_corrupt_file());
    }

    #[test]
    fn test_io_is_not_corrupt_file() {
        let err = SpecError::from(std::io::Error::from(std::io::ErrorKind::NotFound));
        assert!(!err.is_corrupt_file());
    }
}
