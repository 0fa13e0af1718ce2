//! Atomic export to disk.

use std::io::Write;
use std::path::Path;

use rfx_spec::ExportFormat;
use tempfile::NamedTempFile;

use crate::error::{AudioError, AudioResult};
use crate::wave::Wave;

use super::result::WavResult;

/// Encodes `wave` and writes it to `path`.
///
/// An existing file at `path` is replaced; see [`write_atomic`].
pub fn export_wav(path: &Path, wave: &Wave, format: &ExportFormat) -> AudioResult<WavResult> {
    let wav = WavResult::from_wave(wave, format)?;
    write_atomic(path, &wav.wav_data)?;

    tracing::debug!(
        path = %path.display(),
        bytes = wav.wav_data.len(),
        frames = wav.num_frames,
        "exported wav"
    );

    Ok(wav)
}

/// Writes `bytes` to a temporary sibling of `path` and renames it into
/// place, so a failed write never leaves a truncated file at `path`.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> AudioResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| AudioError::export(path, e))?;
    tmp.write_all(bytes)
        .and_then(|()| tmp.flush())
        .map_err(|e| AudioError::export(path, e))?;
    tmp.persist(path)
        .map_err(|e| AudioError::export(path, e.error))?;
    Ok(())
}
