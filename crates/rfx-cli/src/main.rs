//! rfx CLI - Command-line interface for the rfx sound effect synthesizer
//!
//! This binary renders parameter files and presets to WAV, converts between
//! parameter formats, and inspects files.

mod cli_args;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli_args::{Cli, Commands};
use rfx_cli::{commands, exit_code_for};

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Render {
            input,
            output,
            export,
            json,
        } => commands::render::run(&input, &output, export, json),
        Commands::Preset {
            kind,
            seed,
            mutate,
            output,
            export,
            json,
        } => commands::preset::run(kind, seed, mutate, output.as_deref(), export, json),
        Commands::Convert {
            input,
            output,
            export,
        } => commands::convert::run(&input, &output, export),
        Commands::Inspect { path, json } => commands::inspect::run(&path, json),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(exit_code_for(&e))
        }
    }
}
