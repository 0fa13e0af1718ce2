//! CLI argument definitions for the rfx command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{Parser, Subcommand};
use rfx_backend_audio::PresetKind;
use rfx_cli::commands::ExportOverrides;

/// rfx - Retro sound effect synthesizer
#[derive(Parser)]
#[command(name = "rfx")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Render a parameter file (.sfs, .rfx, .json) to a WAV file
    Render {
        /// Path to the parameter file
        #[arg(short, long)]
        input: String,

        /// Path to the WAV file to write
        #[arg(short, long)]
        output: String,

        #[command(flatten)]
        export: ExportOverrides,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Generate a randomized sound from a preset category
    Preset {
        /// Category (pickup, laser, explosion, powerup, hit, jump, blip, random)
        #[arg(value_parser = parse_preset)]
        kind: PresetKind,

        /// Seed for the random draws
        #[arg(short, long, default_value_t = 0)]
        seed: u32,

        /// Mutate the preset with this seed
        #[arg(short, long)]
        mutate: Option<u32>,

        /// Output path (.wav, .sfs, .rfx, .json); prints JSON parameters if omitted
        #[arg(short, long)]
        output: Option<String>,

        #[command(flatten)]
        export: ExportOverrides,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },

    /// Convert a parameter file to another parameter format
    Convert {
        /// Path to the source parameter file
        #[arg(short, long)]
        input: String,

        /// Path to the destination (.sfs, .rfx, .json)
        #[arg(short, long)]
        output: String,

        #[command(flatten)]
        export: ExportOverrides,
    },

    /// Show the contents of a parameter file or WAV file
    Inspect {
        /// Path to the file to inspect
        path: String,

        /// Output machine-readable JSON (no colored output)
        #[arg(long)]
        json: bool,
    },
}

fn parse_preset(value: &str) -> Result<PresetKind, String> {
    value.parse::<PresetKind>().map_err(|e| e.to_string())
}
