//! Loading parameter files and classifying output paths.
//!
//! Input files are dispatched by extension (`.sfs`, `.rfx`, `.json`), with
//! content sniffing as the fallback for unknown extensions. Output paths
//! must carry an extension so the writer knows what to produce.

use std::path::Path;

use anyhow::{bail, Context, Result};
use rfx_spec::format::{self, LoadedParams};
use rfx_spec::ParamsFileKind;

/// Recognized WAV extensions.
pub const WAV_EXTENSIONS: &[&str] = &["wav"];

/// What a destination path should receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// Rendered audio.
    Wav,
    /// A parameter file of the given kind.
    Params(ParamsFileKind),
}

/// Whether `path` names a WAV file.
pub fn is_wav_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| WAV_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

/// Classifies an output path by extension.
pub fn output_kind(path: &Path) -> Result<OutputKind> {
    if is_wav_path(path) {
        return Ok(OutputKind::Wav);
    }
    match ParamsFileKind::from_path(path) {
        Some(kind) => Ok(OutputKind::Params(kind)),
        None => bail!(
            "Unknown output extension: {} (expected .wav, .sfs, .rfx or .json)",
            path.display()
        ),
    }
}

/// Reads and decodes a parameter file.
pub fn load_params(path: &Path) -> Result<LoadedParams> {
    let loaded = format::read_file(path)
        .with_context(|| format!("Failed to read parameter file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), kind = %loaded.kind, "loaded parameters");
    Ok(loaded)
}
