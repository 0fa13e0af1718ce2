//! Deterministic WAV file writer.
//!
//! Files carry a 44-byte RIFF header and nothing else: no timestamps, no
//! LIST chunks. The BLAKE3 hash of the PCM payload identifies a render
//! independently of the container.

mod export;
mod pcm;
mod result;
mod writer;

#[cfg(test)]
mod tests;

// Re-export public API
pub use export::{export_wav, write_atomic};
pub use pcm::{compute_pcm_hash, extract_pcm_data, parse_wav, ParsedWav};
pub use result::WavResult;
pub use writer::{write_wav, write_wav_to_vec, FORMAT_IEEE_FLOAT, FORMAT_PCM, HEADER_LEN};
