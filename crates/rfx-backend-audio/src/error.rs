//! Error types for audio backend.

use std::path::PathBuf;

use rfx_spec::SpecError;
use thiserror::Error;

/// Result type for audio operations.
pub type AudioResult<T> = Result<T, AudioError>;

/// Errors that can occur around synthesis.
///
/// Synthesis itself cannot fail; these cover export and WAV parsing.
#[derive(Debug, Error)]
pub enum AudioError {
    /// Parameter or export format error.
    #[error(transparent)]
    Spec(#[from] SpecError),

    /// The export destination could not be written.
    #[error("failed to export {path}: {source}")]
    Export {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A WAV buffer could not be parsed.
    #[error("invalid WAV data: {message}")]
    InvalidWav {
        /// Error message.
        message: String,
    },

    /// A preset name was not recognized.
    #[error("unknown preset '{name}'")]
    UnknownPreset {
        /// The rejected name.
        name: String,
    },
}

impl AudioError {
    /// Creates an invalid WAV error.
    pub fn invalid_wav(message: impl Into<String>) -> Self {
        Self::InvalidWav {
            message: message.into(),
        }
    }

    /// Creates an export error for the given destination.
    pub fn export(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Export {
            path: path.into(),
            source,
        }
    }

    /// Returns the stable error code string.
    pub fn code(&self) -> &'static str {
        match self {
            AudioError::Spec(err) => err.code(),
            AudioError::Export { .. } => "AUDIO_001",
            AudioError::InvalidWav { .. } => "AUDIO_002",
            AudioError::UnknownPreset { .. } => "AUDIO_003",
        }
    }
}
