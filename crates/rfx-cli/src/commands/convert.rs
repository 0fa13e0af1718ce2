//! Convert command implementation
//!
//! Re-encodes a parameter file in another parameter format. The target
//! format comes from the output extension.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use rfx_backend_audio::write_atomic;
use rfx_spec::format;

use super::ExportOverrides;
use crate::input::{self, OutputKind};

/// Run the convert command
///
/// # Arguments
/// * `input_path` - Source parameter file
/// * `output_path` - Destination parameter file (`.sfs`, `.rfx`, `.json`)
/// * `overrides` - Export format stored in `.rfx` outputs
///
/// # Returns
/// Exit code: 0 success
pub fn run(input_path: &str, output_path: &str, overrides: ExportOverrides) -> Result<ExitCode> {
    let output = Path::new(output_path);
    let target = match input::output_kind(output)? {
        OutputKind::Params(kind) => kind,
        OutputKind::Wav => bail!(
            "Cannot convert to WAV: {} (use `rfx render` instead)",
            output_path
        ),
    };

    println!(
        "{} {} -> {}",
        "Converting:".cyan().bold(),
        input_path,
        output_path
    );

    let loaded = input::load_params(Path::new(input_path))?;
    let export = overrides.apply(loaded.export.unwrap_or_default())?;

    if target == rfx_spec::ParamsFileKind::Sfs && loaded.params.rand_seed != 0 {
        println!(
            "  {} .sfs files carry no noise seed; seed {} is dropped",
            "!".yellow(),
            loaded.params.rand_seed
        );
    }

    let bytes =
        format::encode(&loaded.params, &export, target).context("Failed to encode parameters")?;
    write_atomic(output, &bytes).with_context(|| format!("Failed to write: {}", output_path))?;

    println!(
        "{} Converted {} to {}",
        "SUCCESS".green().bold(),
        loaded.kind,
        target
    );
    Ok(ExitCode::SUCCESS)
}
