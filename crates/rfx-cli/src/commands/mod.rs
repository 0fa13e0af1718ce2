//! CLI command implementations

pub mod convert;
pub mod inspect;
pub mod preset;
pub mod render;

mod reporting;

use anyhow::{Context, Result};
use clap::Args;
use rfx_spec::ExportFormat;

/// Export format flags shared by commands that write files.
///
/// Unset flags keep the value from the input file (`.rfx` carries one) or
/// the default of 44100 Hz, 16-bit, mono.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Args)]
pub struct ExportOverrides {
    /// Output sample rate in Hz (22050 or 44100)
    #[arg(long)]
    pub sample_rate: Option<u32>,

    /// Output bits per sample (8, 16 or 32 for float)
    #[arg(long)]
    pub bits: Option<u16>,

    /// Output channel count (1 or 2)
    #[arg(long)]
    pub channels: Option<u16>,
}

impl ExportOverrides {
    /// Applies the set flags on top of `base` and validates the result.
    pub fn apply(&self, base: ExportFormat) -> Result<ExportFormat> {
        let format = ExportFormat {
            sample_rate: self.sample_rate.unwrap_or(base.sample_rate),
            bits_per_sample: self.bits.unwrap_or(base.bits_per_sample),
            channels: self.channels.unwrap_or(base.channels),
        };
        format.validate().context("Invalid export format")?;
        Ok(format)
    }
}
