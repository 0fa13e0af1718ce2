//! WAV parsing and PCM hashing.

use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};
use rfx_spec::ExportFormat;

use crate::error::{AudioError, AudioResult};

use super::writer::{FORMAT_IEEE_FLOAT, FORMAT_PCM};

/// Header fields and payload of a parsed WAV buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedWav<'a> {
    /// `wFormatTag` of the fmt chunk.
    pub format_tag: u16,
    /// Layout described by the fmt chunk.
    pub format: ExportFormat,
    /// Contents of the data chunk.
    pub pcm: &'a [u8],
}

impl ParsedWav<'_> {
    /// Number of sample frames in the data chunk.
    pub fn num_frames(&self) -> usize {
        match self.format.block_align() {
            0 => 0,
            align => self.pcm.len() / align as usize,
        }
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        if self.format.sample_rate == 0 {
            return 0.0;
        }
        self.num_frames() as f64 / self.format.sample_rate as f64
    }
}

struct Chunk<'a> {
    id: [u8; 4],
    body: &'a [u8],
}

fn chunks(wav_data: &[u8]) -> AudioResult<Vec<Chunk<'_>>> {
    if wav_data.len() < 12 || &wav_data[0..4] != b"RIFF" || &wav_data[8..12] != b"WAVE" {
        return Err(AudioError::invalid_wav("missing RIFF/WAVE header"));
    }

    let mut found = Vec::new();
    let mut pos = 12;
    while pos + 8 <= wav_data.len() {
        let mut id = [0u8; 4];
        id.copy_from_slice(&wav_data[pos..pos + 4]);
        let size = u32::from_le_bytes([
            wav_data[pos + 4],
            wav_data[pos + 5],
            wav_data[pos + 6],
            wav_data[pos + 7],
        ]) as usize;

        let start = pos + 8;
        let end = start
            .checked_add(size)
            .filter(|&end| end <= wav_data.len())
            .ok_or_else(|| {
                AudioError::invalid_wav(format!(
                    "chunk '{}' overruns the buffer",
                    String::from_utf8_lossy(&id)
                ))
            })?;
        found.push(Chunk {
            id,
            body: &wav_data[start..end],
        });

        pos = end;
        // Align to word boundary
        if size % 2 != 0 {
            pos += 1;
        }
    }
    Ok(found)
}

/// Parses the fmt and data chunks of a WAV buffer.
pub fn parse_wav(wav_data: &[u8]) -> AudioResult<ParsedWav<'_>> {
    let chunks = chunks(wav_data)?;

    let fmt = chunks
        .iter()
        .find(|c| &c.id == b"fmt ")
        .ok_or_else(|| AudioError::invalid_wav("missing fmt chunk"))?;
    let data = chunks
        .iter()
        .find(|c| &c.id == b"data")
        .ok_or_else(|| AudioError::invalid_wav("missing data chunk"))?;

    let mut reader = Cursor::new(fmt.body);
    let (format_tag, channels, sample_rate, bits_per_sample) = read_fmt(&mut reader)
        .map_err(|e| AudioError::invalid_wav(format!("short fmt chunk: {e}")))?;

    if format_tag != FORMAT_PCM && format_tag != FORMAT_IEEE_FLOAT {
        return Err(AudioError::invalid_wav(format!(
            "unsupported format tag {format_tag}"
        )));
    }

    Ok(ParsedWav {
        format_tag,
        format: ExportFormat {
            sample_rate,
            bits_per_sample,
            channels,
        },
        pcm: data.body,
    })
}

fn read_fmt<R: Read>(reader: &mut R) -> std::io::Result<(u16, u16, u32, u16)> {
    let format_tag = reader.read_u16::<LittleEndian>()?;
    let channels = reader.read_u16::<LittleEndian>()?;
    let sample_rate = reader.read_u32::<LittleEndian>()?;
    let _byte_rate = reader.read_u32::<LittleEndian>()?;
    let _block_align = reader.read_u16::<LittleEndian>()?;
    let bits_per_sample = reader.read_u16::<LittleEndian>()?;
    Ok((format_tag, channels, sample_rate, bits_per_sample))
}

/// Extracts PCM data from a WAV file buffer.
///
/// Used for comparing WAV files by their audio content only.
pub fn extract_pcm_data(wav_data: &[u8]) -> Option<&[u8]> {
    chunks(wav_data)
        .ok()?
        .into_iter()
        .find(|c| &c.id == b"data")
        .map(|c| c.body)
}

/// Computes the BLAKE3 hash of a WAV file's PCM data, as lowercase hex.
///
/// Returns `None` if the buffer is not a WAV file.
pub fn compute_pcm_hash(wav_data: &[u8]) -> Option<String> {
    extract_pcm_data(wav_data).map(|pcm| blake3::hash(pcm).to_hex().to_string())
}
