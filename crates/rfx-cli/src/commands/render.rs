//! Render command implementation
//!
//! Renders a parameter file (`.sfs`, `.rfx` or `.json`) to a WAV file.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use rfx_backend_audio::{export_wav, generate};

use super::reporting::report_wav;
use super::ExportOverrides;
use crate::input::{self, OutputKind};

/// Run the render command
///
/// # Arguments
/// * `input_path` - Parameter file to render
/// * `output_path` - Destination WAV file
/// * `overrides` - Export format flags
/// * `json` - Print a machine-readable report instead of text
///
/// # Returns
/// Exit code: 0 success
pub fn run(
    input_path: &str,
    output_path: &str,
    overrides: ExportOverrides,
    json: bool,
) -> Result<ExitCode> {
    let output = Path::new(output_path);
    if input::output_kind(output)? != OutputKind::Wav {
        bail!("Render output must be a .wav file: {}", output_path);
    }

    if !json {
        println!("{} {}", "Rendering:".cyan().bold(), input_path);
    }

    let loaded = input::load_params(Path::new(input_path))?;
    let format = overrides.apply(loaded.export.unwrap_or_default())?;
    tracing::debug!(?format, "resolved export format");

    let wave = generate(&loaded.params);
    let wav = export_wav(output, &wave, &format)
        .with_context(|| format!("Failed to export: {}", output_path))?;

    report_wav(output_path, &wav, json)?;
    Ok(ExitCode::SUCCESS)
}
