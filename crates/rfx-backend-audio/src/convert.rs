//! Conversion of a rendered wave into export-ready PCM.
//!
//! The synthesizer always renders mono 32-bit float at 44.1 kHz. This module
//! resamples to the export rate, duplicates channels and quantizes to the
//! requested bit depth.

use rfx_spec::ExportFormat;

use crate::error::AudioResult;
use crate::wave::Wave;

/// Interleaved PCM ready for a WAV data chunk.
#[derive(Debug, Clone, PartialEq)]
pub struct FormattedWave {
    /// Layout of `pcm`.
    pub format: ExportFormat,
    /// Number of sample frames (samples per channel).
    pub num_frames: usize,
    /// Little-endian interleaved sample bytes.
    pub pcm: Vec<u8>,
}

/// Converts a wave to the given export format.
///
/// Fails only when the format itself is unsupported.
pub fn format_wave(wave: &Wave, format: &ExportFormat) -> AudioResult<FormattedWave> {
    format.validate()?;

    let resampled = resample(&wave.samples, wave.sample_rate(), format.sample_rate);
    let channels = format.channels as usize;
    let mut pcm =
        Vec::with_capacity(resampled.len() * channels * format.bytes_per_sample() as usize);

    for &sample in &resampled {
        for _ in 0..channels {
            quantize_into(&mut pcm, sample, format.bits_per_sample);
        }
    }

    Ok(FormattedWave {
        format: *format,
        num_frames: resampled.len(),
        pcm,
    })
}

/// Number of frames a resample from `src_rate` to `dst_rate` produces.
pub fn resampled_len(len: usize, src_rate: u32, dst_rate: u32) -> usize {
    if len == 0 || src_rate == dst_rate {
        return len;
    }
    let src = src_rate as u64;
    ((len as u64 * dst_rate as u64).div_ceil(src)) as usize
}

/// Linear-interpolation resampler. Identity when the rates match.
pub fn resample(samples: &[f32], src_rate: u32, dst_rate: u32) -> Vec<f32> {
    if src_rate == dst_rate {
        return samples.to_vec();
    }

    let len = resampled_len(samples.len(), src_rate, dst_rate);
    let step = src_rate as f64 / dst_rate as f64;
    let last = samples.len().saturating_sub(1);

    (0..len)
        .map(|i| {
            let pos = i as f64 * step;
            let index = (pos as usize).min(last);
            let frac = (pos - index as f64) as f32;
            let a = samples[index];
            let b = samples[(index + 1).min(last)];
            a + (b - a) * frac
        })
        .collect()
}

/// Quantizes one sample to 8-bit unsigned PCM.
pub fn to_pcm8(sample: f32) -> u8 {
    ((sample.clamp(-1.0, 1.0) * 127.0).round() as i16 + 128) as u8
}

/// Quantizes one sample to 16-bit signed PCM.
pub fn to_pcm16(sample: f32) -> i16 {
    (sample.clamp(-1.0, 1.0) * 32767.0).round() as i16
}

fn quantize_into(pcm: &mut Vec<u8>, sample: f32, bits_per_sample: u16) {
    match bits_per_sample {
        8 => pcm.push(to_pcm8(sample)),
        16 => pcm.extend_from_slice(&to_pcm16(sample).to_le_bytes()),
        _ => pcm.extend_from_slice(&sample.to_le_bytes()),
    }
}
