//! rfx Audio Backend
//!
//! This crate renders sound effects described by a [`ParameterSet`] into a
//! finished sample buffer, and exports that buffer as a WAV file.
//!
//! # Overview
//!
//! Rendering is a single synchronous call. [`generate()`] derives its
//! coefficients once, then for each output sample advances the repeat,
//! arpeggio, slide, vibrato, duty, envelope, phaser and high-pass sweep state,
//! runs the oscillator 8 times through the filters and the phaser, and writes
//! the scaled, clamped average. Generation stops when the envelope runs out,
//! when the pitch slides below its floor, or at the 10 second cap.
//!
//! # Determinism
//!
//! All synthesis is deterministic. The only randomness is the noise buffer,
//! drawn from a PCG32 stream seeded with [`ParameterSet::rand_seed`]. No state
//! survives between calls, so calls may run in parallel on any thread.
//!
//! # Example
//!
//! ```
//! use rfx_backend_audio::{generate, GenerationStatus, WavResult};
//! use rfx_spec::{ExportFormat, ParameterSet};
//!
//! let wave = generate(&ParameterSet::default());
//! assert_eq!(wave.status, GenerationStatus::EnvelopeExhausted);
//!
//! let wav = WavResult::from_wave(&wave, &ExportFormat::default()).unwrap();
//! assert_eq!(&wav.wav_data[0..4], b"RIFF");
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Main entry point
//! - [`envelope`] - Attack/sustain/decay volume envelope
//! - [`oscillator`] - Square, sawtooth, sine and stepped noise
//! - [`filter`] - Resonant low-pass and high-pass stages
//! - [`phaser`] - Short delay-line phaser
//! - [`convert`] - Resampling and quantization for export
//! - [`wav`] - Deterministic WAV writer and atomic export
//! - [`presets`] - Randomized parameter producers
//! - [`rng`] - Deterministic RNG with seed derivation

pub mod convert;
pub mod envelope;
pub mod error;
pub mod filter;
pub mod generate;
pub mod oscillator;
pub mod phaser;
pub mod presets;
pub mod rng;
pub mod wav;
pub mod wave;

// Re-export main types at crate root
pub use error::{AudioError, AudioResult};
pub use generate::{generate, generate_with_limit};
pub use presets::{mutate, PresetKind};
pub use rfx_spec::{ExportFormat, ParameterSet, Waveform};
pub use wav::{export_wav, write_atomic, WavResult};
pub use wave::{GenerationStatus, Wave};

#[cfg(test)]
mod integration_tests {
    use super::*;

    #[test]
    fn test_full_pipeline() {
        let params = ParameterSet {
            waveform: Waveform::Sawtooth,
            slide: -0.3,
            ..ParameterSet::default()
        };
        let wave = generate(&params);
        assert!(wave.sample_count() > 0);

        let wav = WavResult::from_wave(&wave, &ExportFormat::default()).expect("export");
        assert_eq!(&wav.wav_data[0..4], b"RIFF");
        assert_eq!(&wav.wav_data[8..12], b"WAVE");
        assert_eq!(wav.num_frames, wave.sample_count());
    }

    #[test]
    fn test_pipeline_determinism() {
        let params = PresetKind::Explosion.generate(99);

        let wav1 = WavResult::from_wave(&generate(&params), &ExportFormat::default()).unwrap();
        let wav2 = WavResult::from_wave(&generate(&params), &ExportFormat::default()).unwrap();

        assert_eq!(wav1.pcm_hash, wav2.pcm_hash);
        assert_eq!(wav1.wav_data, wav2.wav_data);
    }

    #[test]
    fn test_noise_seed_changes_output() {
        let make = |seed| ParameterSet {
            rand_seed: seed,
            waveform: Waveform::Noise,
            ..ParameterSet::default()
        };

        let wav1 = WavResult::from_wave(&generate(&make(1)), &ExportFormat::default()).unwrap();
        let wav2 = WavResult::from_wave(&generate(&make(2)), &ExportFormat::default()).unwrap();

        assert_ne!(wav1.pcm_hash, wav2.pcm_hash);
    }

    #[test]
    fn test_pcm_hash_format() {
        let wav = WavResult::from_wave(
            &generate(&ParameterSet::default()),
            &ExportFormat::default(),
        )
        .unwrap();

        // BLAKE3 hash should be 64 hex characters
        assert_eq!(wav.pcm_hash.len(), 64);
        assert!(wav.pcm_hash.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
