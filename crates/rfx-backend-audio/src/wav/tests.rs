//! Tests for the WAV writer module.

use pretty_assertions::assert_eq;
use rfx_spec::ExportFormat;

use super::pcm::{compute_pcm_hash, extract_pcm_data, parse_wav};
use super::result::WavResult;
use super::writer::{write_wav, write_wav_to_vec, FORMAT_IEEE_FLOAT, FORMAT_PCM, HEADER_LEN};
use super::export::export_wav;
use crate::wave::{GenerationStatus, Wave};

fn test_wave() -> Wave {
    Wave {
        samples: vec![0.0, 0.5, -0.5, 1.0, -1.0],
        status: GenerationStatus::EnvelopeExhausted,
    }
}

fn format(sample_rate: u32, bits: u16, channels: u16) -> ExportFormat {
    ExportFormat::new(sample_rate, bits, channels).unwrap()
}

// =========================================================================
// Header layout
// =========================================================================

#[test]
fn test_header_layout_16bit_mono() {
    let wav = write_wav_to_vec(&ExportFormat::default(), &[1, 2, 3, 4]);

    assert_eq!(wav.len(), HEADER_LEN + 4);
    assert_eq!(&wav[0..4], b"RIFF");
    assert_eq!(u32::from_le_bytes([wav[4], wav[5], wav[6], wav[7]]), 40);
    assert_eq!(&wav[8..12], b"WAVE");
    assert_eq!(&wav[12..16], b"fmt ");
    assert_eq!(u32::from_le_bytes([wav[16], wav[17], wav[18], wav[19]]), 16);
    assert_eq!(u16::from_le_bytes([wav[20], wav[21]]), FORMAT_PCM);
    assert_eq!(u16::from_le_bytes([wav[22], wav[23]]), 1);
    assert_eq!(
        u32::from_le_bytes([wav[24], wav[25], wav[26], wav[27]]),
        44100
    );
    assert_eq!(
        u32::from_le_bytes([wav[28], wav[29], wav[30], wav[31]]),
        88200
    );
    assert_eq!(u16::from_le_bytes([wav[32], wav[33]]), 2);
    assert_eq!(u16::from_le_bytes([wav[34], wav[35]]), 16);
    assert_eq!(&wav[36..40], b"data");
    assert_eq!(u32::from_le_bytes([wav[40], wav[41], wav[42], wav[43]]), 4);
    assert_eq!(&wav[44..], &[1, 2, 3, 4]);
}

#[test]
fn test_float_format_tag() {
    let wav = write_wav_to_vec(&format(22050, 32, 2), &[0; 8]);
    assert_eq!(u16::from_le_bytes([wav[20], wav[21]]), FORMAT_IEEE_FLOAT);
    assert_eq!(u16::from_le_bytes([wav[32], wav[33]]), 8);
}

#[test]
fn test_write_wav_to_writer_matches_vec() {
    let format = format(44100, 8, 1);
    let mut buffer = Vec::new();
    write_wav(&mut buffer, &format, &[128, 129]).unwrap();
    assert_eq!(buffer, write_wav_to_vec(&format, &[128, 129]));
}

// =========================================================================
// Parsing
// =========================================================================

#[test]
fn test_parse_roundtrip() {
    let wav = WavResult::from_wave(&test_wave(), &format(44100, 16, 2)).unwrap();
    let parsed = parse_wav(&wav.wav_data).unwrap();

    assert_eq!(parsed.format_tag, FORMAT_PCM);
    assert_eq!(parsed.format, wav.format);
    assert_eq!(parsed.num_frames(), 5);
    assert_eq!(parsed.pcm.len(), 5 * 2 * 2);
}

#[test]
fn test_parse_rejects_garbage() {
    assert!(parse_wav(b"not a wav file at all").is_err());
    assert!(parse_wav(&[]).is_err());
}

#[test]
fn test_parse_rejects_overrun() {
    let mut wav = write_wav_to_vec(&ExportFormat::default(), &[0, 0]);
    wav.truncate(HEADER_LEN + 1);
    let err = parse_wav(&wav).unwrap_err();
    assert_eq!(err.code(), "AUDIO_002");
}

#[test]
fn test_extract_pcm_skips_unknown_chunks() {
    let mut wav = Vec::new();
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&0u32.to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"LIST");
    wav.extend_from_slice(&3u32.to_le_bytes());
    wav.extend_from_slice(&[9, 9, 9, 0]); // odd chunk plus pad byte
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&2u32.to_le_bytes());
    wav.extend_from_slice(&[7, 8]);

    assert_eq!(extract_pcm_data(&wav), Some(&[7u8, 8][..]));
}

// =========================================================================
// WavResult
// =========================================================================

#[test]
fn test_pcm_hash_matches_container() {
    let wav = WavResult::from_wave(&test_wave(), &ExportFormat::default()).unwrap();
    assert_eq!(compute_pcm_hash(&wav.wav_data), Some(wav.pcm_hash.clone()));
}

#[test]
fn test_result_sizes_per_format() {
    let cases = [
        (format(44100, 8, 1), 5, 5),
        (format(44100, 16, 1), 5, 10),
        (format(44100, 32, 1), 5, 20),
        (format(44100, 16, 2), 5, 20),
        (format(22050, 16, 1), 3, 6),
    ];
    for (format, frames, pcm_bytes) in cases {
        let wav = WavResult::from_wave(&test_wave(), &format).unwrap();
        assert_eq!(wav.num_frames, frames);
        assert_eq!(wav.wav_data.len(), HEADER_LEN + pcm_bytes);
    }
}

#[test]
fn test_result_keeps_status() {
    let wave = Wave {
        samples: vec![0.0; 10],
        status: GenerationStatus::DurationCapped,
    };
    let wav = WavResult::from_wave(&wave, &ExportFormat::default()).unwrap();
    assert_eq!(wav.status, GenerationStatus::DurationCapped);
    assert!((wav.duration_seconds() - 10.0 / 44100.0).abs() < 1e-12);
}

#[test]
fn test_empty_wave_encodes() {
    let wave = Wave {
        samples: Vec::new(),
        status: GenerationStatus::DurationCapped,
    };
    let wav = WavResult::from_wave(&wave, &ExportFormat::default()).unwrap();
    assert_eq!(wav.wav_data.len(), HEADER_LEN);
    assert_eq!(wav.num_frames, 0);
}

// =========================================================================
// Export
// =========================================================================

#[test]
fn test_export_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.wav");

    let wav = export_wav(&path, &test_wave(), &ExportFormat::default()).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), wav.wav_data);
}

#[test]
fn test_export_replaces_existing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.wav");
    std::fs::write(&path, b"old contents").unwrap();

    let wav = export_wav(&path, &test_wave(), &ExportFormat::default()).unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), wav.wav_data);
}

#[test]
fn test_export_to_missing_directory_fails_cleanly() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("out.wav");

    let err = export_wav(&path, &test_wave(), &ExportFormat::default()).unwrap_err();
    assert_eq!(err.code(), "AUDIO_001");
    assert!(!path.exists());
}

#[test]
fn test_export_invalid_format_leaves_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.wav");
    let bad = ExportFormat {
        sample_rate: 8000,
        bits_per_sample: 16,
        channels: 1,
    };

    assert!(export_wav(&path, &test_wave(), &bad).is_err());
    assert!(!path.exists());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_write_atomic_plain_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("params.json");

    super::write_atomic(&path, b"{}").unwrap();
    assert_eq!(std::fs::read(&path).unwrap(), b"{}");
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}
