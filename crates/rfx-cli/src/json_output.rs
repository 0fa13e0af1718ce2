//! JSON output types for machine-readable CLI output.
//!
//! These are printed by the `--json` flag of `render`, `preset` and
//! `inspect`.

use rfx_backend_audio::wav::ParsedWav;
use rfx_backend_audio::{Wave, WavResult};
use rfx_spec::{ExportFormat, ParameterSet, ParamsFileKind};
use serde::Serialize;

/// Result of writing a WAV file.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RenderReport {
    /// Destination path.
    pub output: String,
    /// Layout of the written samples.
    pub format: ExportFormat,
    /// Sample frames written.
    pub frames: usize,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// Why generation stopped.
    pub status: String,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
}

impl RenderReport {
    /// Builds the report for an exported file.
    pub fn new(output: &str, wav: &WavResult) -> Self {
        Self {
            output: output.to_string(),
            format: wav.format,
            frames: wav.num_frames,
            duration_seconds: wav.duration_seconds(),
            status: wav.status.to_string(),
            pcm_hash: wav.pcm_hash.clone(),
        }
    }
}

/// Summary of a rendered preview.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PreviewReport {
    /// Samples rendered at 44.1 kHz.
    pub samples: usize,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// Largest absolute sample.
    pub peak: f32,
    /// Why generation stopped.
    pub status: String,
}

impl From<&Wave> for PreviewReport {
    fn from(wave: &Wave) -> Self {
        Self {
            samples: wave.sample_count(),
            duration_seconds: wave.duration_seconds(),
            peak: wave.peak(),
            status: wave.status.to_string(),
        }
    }
}

/// Contents of a parameter file.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ParamsReport {
    /// Inspected path.
    pub path: String,
    /// Codec that decoded the file.
    pub kind: ParamsFileKind,
    /// Decoded parameters.
    pub params: ParameterSet,
    /// Export format stored in the file, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportFormat>,
    /// What the parameters render to.
    pub preview: PreviewReport,
}

/// Header of a WAV file.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WavReport {
    /// Inspected path.
    pub path: String,
    /// `wFormatTag` (1 = PCM, 3 = IEEE float).
    pub format_tag: u16,
    /// Sample layout.
    pub format: ExportFormat,
    /// Sample frames in the data chunk.
    pub frames: usize,
    /// Duration in seconds.
    pub duration_seconds: f64,
    /// BLAKE3 hash of the PCM payload.
    pub pcm_hash: String,
}

impl WavReport {
    /// Builds the report for a parsed WAV buffer.
    pub fn new(path: &str, parsed: &ParsedWav<'_>, pcm_hash: String) -> Self {
        Self {
            path: path.to_string(),
            format_tag: parsed.format_tag,
            format: parsed.format,
            frames: parsed.num_frames(),
            duration_seconds: parsed.duration_seconds(),
            pcm_hash,
        }
    }
}
