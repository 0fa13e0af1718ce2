//! Preset command implementation
//!
//! Produces a randomized parameter set for a sound category and writes it as
//! a parameter file, renders it straight to WAV, or prints it as JSON.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use rfx_backend_audio::{export_wav, generate, mutate, write_atomic, ParameterSet, PresetKind};
use rfx_spec::format;

use super::reporting::{print_json, report_wav};
use super::ExportOverrides;
use crate::input::{self, OutputKind};

/// Builds the parameter set for a preset, optionally mutated.
pub fn build(kind: PresetKind, seed: u32, mutate_seed: Option<u32>) -> ParameterSet {
    let params = kind.generate(seed);
    match mutate_seed {
        Some(m) => mutate(&params, m),
        None => params,
    }
}

/// Run the preset command
///
/// # Arguments
/// * `kind` - Sound category
/// * `seed` - Seed for the preset's random draws
/// * `mutate_seed` - If set, mutate the preset with this seed
/// * `output_path` - Destination (`.wav`, `.sfs`, `.rfx`, `.json`); stdout JSON if absent
/// * `overrides` - Export format flags
/// * `json` - Print a machine-readable report instead of text
///
/// # Returns
/// Exit code: 0 success
pub fn run(
    kind: PresetKind,
    seed: u32,
    mutate_seed: Option<u32>,
    output_path: Option<&str>,
    overrides: ExportOverrides,
    json: bool,
) -> Result<ExitCode> {
    let params = build(kind, seed, mutate_seed);

    let Some(output_path) = output_path else {
        print_json(&params)?;
        return Ok(ExitCode::SUCCESS);
    };

    let output = Path::new(output_path);
    let target = input::output_kind(output)?;
    let export = overrides.apply(Default::default())?;

    if !json {
        println!(
            "{} {} (seed {})",
            "Preset:".cyan().bold(),
            kind,
            seed
        );
    }

    match target {
        OutputKind::Wav => {
            let wave = generate(&params);
            let wav = export_wav(output, &wave, &export)
                .with_context(|| format!("Failed to export: {}", output_path))?;
            report_wav(output_path, &wav, json)?;
        }
        OutputKind::Params(file_kind) => {
            let bytes = format::encode(&params, &export, file_kind)
                .context("Failed to encode parameters")?;
            write_atomic(output, &bytes)
                .with_context(|| format!("Failed to write: {}", output_path))?;
            if json {
                print_json(&params)?;
            } else {
                println!(
                    "{} Wrote {} ({})",
                    "SUCCESS".green().bold(),
                    output_path,
                    file_kind
                );
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_is_deterministic() {
        assert_eq!(
            build(PresetKind::Jump, 4, None),
            build(PresetKind::Jump, 4, None)
        );
        assert_eq!(
            build(PresetKind::Jump, 4, Some(1)),
            build(PresetKind::Jump, 4, Some(1))
        );
    }

    #[test]
    fn test_build_mutation_keeps_waveform() {
        let base = build(PresetKind::Explosion, 2, None);
        let mutated = build(PresetKind::Explosion, 2, Some(9));
        assert_eq!(base.waveform, mutated.waveform);
    }
}
