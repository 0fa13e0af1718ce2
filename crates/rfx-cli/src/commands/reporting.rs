//! Shared human-readable and JSON reporting for commands.

use anyhow::{Context, Result};
use colored::Colorize;
use rfx_backend_audio::{GenerationStatus, WavResult};
use serde::Serialize;

use crate::json_output::RenderReport;

/// Prints a value as pretty JSON on stdout.
pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}

/// Colors a generation status for terminal output.
pub(crate) fn status_label(status: GenerationStatus) -> colored::ColoredString {
    match status {
        GenerationStatus::EnvelopeExhausted => status.name().green(),
        GenerationStatus::FloorReached => status.name().cyan(),
        GenerationStatus::DurationCapped => status.name().yellow(),
        GenerationStatus::Running => status.name().red(),
    }
}

/// Reports a written WAV file, as text or JSON.
pub(crate) fn report_wav(output: &str, wav: &WavResult, json: bool) -> Result<()> {
    if json {
        return print_json(&RenderReport::new(output, wav));
    }

    println!("{} Wrote {}", "SUCCESS".green().bold(), output);
    println!(
        "  {} {} Hz, {}-bit{}, {} ch",
        "Format:".dimmed(),
        wav.format.sample_rate,
        wav.format.bits_per_sample,
        if wav.format.is_float() { " float" } else { "" },
        wav.format.channels
    );
    println!(
        "  {} {} frames ({:.3}s), {}",
        "Length:".dimmed(),
        wav.num_frames,
        wav.duration_seconds(),
        status_label(wav.status)
    );
    println!("  {} {}", "PCM hash:".dimmed(), wav.pcm_hash);
    Ok(())
}
