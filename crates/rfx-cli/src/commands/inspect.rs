//! Inspect command implementation
//!
//! Prints the contents of a parameter file together with a rendered preview,
//! or the header of a WAV file.

use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use colored::Colorize;
use rfx_backend_audio::wav::{compute_pcm_hash, parse_wav};
use rfx_backend_audio::{generate, ParameterSet};

use super::reporting::{print_json, status_label};
use crate::input;
use crate::json_output::{ParamsReport, PreviewReport, WavReport};

/// Run the inspect command
///
/// # Arguments
/// * `path` - Parameter or WAV file to inspect
/// * `json` - Print a machine-readable report instead of text
///
/// # Returns
/// Exit code: 0 success
pub fn run(path: &str, json: bool) -> Result<ExitCode> {
    if input::is_wav_path(Path::new(path)) {
        inspect_wav(path, json)
    } else {
        inspect_params(path, json)
    }
}

fn inspect_wav(path: &str, json: bool) -> Result<ExitCode> {
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read file: {}", path))?;
    let parsed = parse_wav(&bytes).with_context(|| format!("Failed to parse WAV: {}", path))?;
    let pcm_hash = compute_pcm_hash(&bytes).unwrap_or_default();
    let report = WavReport::new(path, &parsed, pcm_hash);

    if json {
        print_json(&report)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {}", "WAV:".cyan().bold(), path);
    println!(
        "  {} {} ({})",
        "Format tag:".dimmed(),
        report.format_tag,
        if report.format.is_float() { "IEEE float" } else { "PCM" }
    );
    println!(
        "  {} {} Hz, {}-bit, {} ch",
        "Layout:".dimmed(),
        report.format.sample_rate,
        report.format.bits_per_sample,
        report.format.channels
    );
    println!(
        "  {} {} frames ({:.3}s)",
        "Length:".dimmed(),
        report.frames,
        report.duration_seconds
    );
    println!("  {} {}", "PCM hash:".dimmed(), report.pcm_hash);
    Ok(ExitCode::SUCCESS)
}

fn inspect_params(path: &str, json: bool) -> Result<ExitCode> {
    let loaded = input::load_params(Path::new(path))?;
    let wave = generate(&loaded.params);
    let report = ParamsReport {
        path: path.to_string(),
        kind: loaded.kind,
        params: loaded.params,
        export: loaded.export,
        preview: PreviewReport::from(&wave),
    };

    if json {
        print_json(&report)?;
        return Ok(ExitCode::SUCCESS);
    }

    println!("{} {} ({})", "Parameters:".cyan().bold(), path, report.kind);
    if let Some(export) = report.export {
        println!(
            "  {} {} Hz, {}-bit, {} ch",
            "Export:".dimmed(),
            export.sample_rate,
            export.bits_per_sample,
            export.channels
        );
    }
    for (name, value) in param_rows(&report.params) {
        println!("  {} {}", format!("{:<18}", name).dimmed(), value);
    }
    println!(
        "{} {} samples ({:.3}s), peak {:.3}, {}",
        "Preview:".cyan().bold(),
        report.preview.samples,
        report.preview.duration_seconds,
        report.preview.peak,
        status_label(wave.status)
    );
    if !loaded.params.is_in_range() {
        println!(
            "  {} some values are out of range and will be clamped",
            "!".yellow()
        );
    }
    Ok(ExitCode::SUCCESS)
}

/// Name/value pairs for the parameter table, in file order.
pub(crate) fn param_rows(p: &ParameterSet) -> Vec<(&'static str, String)> {
    let mut rows = vec![
        ("waveform", p.waveform.to_string()),
        ("rand_seed", p.rand_seed.to_string()),
    ];
    let floats: [(&'static str, f32); 22] = [
        ("attack_time", p.attack_time),
        ("sustain_time", p.sustain_time),
        ("sustain_punch", p.sustain_punch),
        ("decay_time", p.decay_time),
        ("start_frequency", p.start_frequency),
        ("min_frequency", p.min_frequency),
        ("slide", p.slide),
        ("delta_slide", p.delta_slide),
        ("vibrato_depth", p.vibrato_depth),
        ("vibrato_speed", p.vibrato_speed),
        ("change_amount", p.change_amount),
        ("change_speed", p.change_speed),
        ("square_duty", p.square_duty),
        ("duty_sweep", p.duty_sweep),
        ("repeat_speed", p.repeat_speed),
        ("phaser_offset", p.phaser_offset),
        ("phaser_sweep", p.phaser_sweep),
        ("lpf_cutoff", p.lpf_cutoff),
        ("lpf_cutoff_sweep", p.lpf_cutoff_sweep),
        ("lpf_resonance", p.lpf_resonance),
        ("hpf_cutoff", p.hpf_cutoff),
        ("hpf_cutoff_sweep", p.hpf_cutoff_sweep),
    ];
    rows.extend(floats.iter().map(|(name, v)| (*name, format!("{:.4}", v))));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_rows_cover_every_field() {
        let rows = param_rows(&ParameterSet::default());
        assert_eq!(rows.len(), 24);
        assert_eq!(rows[0].0, "waveform");
        assert_eq!(rows[23].0, "hpf_cutoff_sweep");
    }
}
