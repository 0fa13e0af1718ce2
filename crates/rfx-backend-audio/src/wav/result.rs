//! WAV file generation result type.

use rfx_spec::ExportFormat;

use crate::convert::format_wave;
use crate::error::AudioResult;
use crate::wave::{GenerationStatus, Wave};

use super::writer::write_wav_to_vec;

/// An encoded WAV file with its identifying hash.
#[derive(Debug, Clone)]
pub struct WavResult {
    /// Complete WAV file bytes.
    pub wav_data: Vec<u8>,
    /// BLAKE3 hash of PCM data only.
    pub pcm_hash: String,
    /// Layout of the encoded samples.
    pub format: ExportFormat,
    /// Number of sample frames (samples per channel).
    pub num_frames: usize,
    /// Why the source wave stopped rendering.
    pub status: GenerationStatus,
}

impl WavResult {
    /// Encodes a rendered wave in the given format.
    pub fn from_wave(wave: &Wave, format: &ExportFormat) -> AudioResult<Self> {
        let formatted = format_wave(wave, format)?;
        let pcm_hash = blake3::hash(&formatted.pcm).to_hex().to_string();
        let wav_data = write_wav_to_vec(&formatted.format, &formatted.pcm);

        Ok(Self {
            wav_data,
            pcm_hash,
            format: formatted.format,
            num_frames: formatted.num_frames,
            status: wave.status,
        })
    }

    /// Returns the duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.num_frames as f64 / self.format.sample_rate as f64
    }
}
