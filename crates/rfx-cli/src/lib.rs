//! rfx CLI library.
//!
//! This crate provides the commands behind the `rfx` binary: rendering
//! parameter files and presets to WAV, converting between parameter formats,
//! and inspecting files.

pub mod commands;
pub mod input;
pub mod json_output;

use rfx_backend_audio::AudioError;

/// Exit code for bad input: unreadable, corrupt or unsupported files and
/// invalid arguments.
pub const EXIT_INPUT_ERROR: u8 = 1;

/// Exit code for failures writing the requested output.
pub const EXIT_EXPORT_ERROR: u8 = 2;

/// Maps a command error to the process exit code.
pub fn exit_code_for(err: &anyhow::Error) -> u8 {
    let export_failed = err
        .chain()
        .any(|cause| matches!(cause.downcast_ref::<AudioError>(), Some(AudioError::Export { .. })));
    if export_failed {
        EXIT_EXPORT_ERROR
    } else {
        EXIT_INPUT_ERROR
    }
}
