//! Export format specification.

use serde::{Deserialize, Serialize};

use crate::error::{SpecError, SpecResult};

/// Sample rates accepted for export.
pub const SUPPORTED_SAMPLE_RATES: [u32; 2] = [22050, 44100];

/// Bit depths accepted for export.
pub const SUPPORTED_BITS_PER_SAMPLE: [u16; 3] = [8, 16, 32];

/// Target layout of an exported sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExportFormat {
    /// Sample rate in Hz (22050 or 44100).
    pub sample_rate: u32,
    /// Bits per sample (8 and 16 are integer PCM, 32 is IEEE float).
    pub bits_per_sample: u16,
    /// Channel count (1 = mono, 2 = stereo).
    pub channels: u16,
}

impl Default for ExportFormat {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            bits_per_sample: 16,
            channels: 1,
        }
    }
}

impl ExportFormat {
    /// Creates and validates an export format.
    pub fn new(sample_rate: u32, bits_per_sample: u16, channels: u16) -> SpecResult<Self> {
        let format = Self {
            sample_rate,
            bits_per_sample,
            channels,
        };
        format.validate()?;
        Ok(format)
    }

    /// Checks every field against the supported values.
    pub fn validate(&self) -> SpecResult<()> {
        if !SUPPORTED_SAMPLE_RATES.contains(&self.sample_rate) {
            return Err(SpecError::InvalidExportFormat {
                field: "sample_rate",
                value: self.sample_rate as i64,
            });
        }
        if !SUPPORTED_BITS_PER_SAMPLE.contains(&self.bits_per_sample) {
            return Err(SpecError::InvalidExportFormat {
                field: "bits_per_sample",
                value: self.bits_per_sample as i64,
            });
        }
        if !(1..=2).contains(&self.channels) {
            return Err(SpecError::InvalidExportFormat {
                field: "channels",
                value: self.channels as i64,
            });
        }
        Ok(())
    }

    /// Whether samples are stored as IEEE floats.
    pub fn is_float(&self) -> bool {
        self.bits_per_sample == 32
    }

    /// Bytes per sample (per channel).
    pub fn bytes_per_sample(&self) -> u16 {
        self.bits_per_sample / 8
    }

    /// Bytes per sample frame.
    pub fn block_align(&self) -> u16 {
        self.channels * self.bytes_per_sample()
    }

    /// Bytes per second.
    pub fn byte_rate(&self) -> u32 {
        self.sample_rate * self.block_align() as u32
    }
}
