//! Core WAV writing.

use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};
use rfx_spec::ExportFormat;

/// Size of the RIFF, fmt and data headers together.
pub const HEADER_LEN: usize = 44;

/// `wFormatTag` for integer PCM.
pub const FORMAT_PCM: u16 = 1;

/// `wFormatTag` for IEEE float samples.
pub const FORMAT_IEEE_FLOAT: u16 = 3;

/// Writes a complete WAV file to a writer.
///
/// # Arguments
/// * `writer` - Output writer
/// * `format` - Layout of `pcm_data`
/// * `pcm_data` - Interleaved little-endian sample bytes
pub fn write_wav<W: Write>(
    writer: &mut W,
    format: &ExportFormat,
    pcm_data: &[u8],
) -> io::Result<()> {
    let data_size = pcm_data.len() as u32;
    let file_size = 36 + data_size; // Total file size minus 8 bytes for RIFF header
    let format_tag = if format.is_float() {
        FORMAT_IEEE_FLOAT
    } else {
        FORMAT_PCM
    };

    // RIFF header
    writer.write_all(b"RIFF")?;
    writer.write_u32::<LittleEndian>(file_size)?;
    writer.write_all(b"WAVE")?;

    // fmt chunk
    writer.write_all(b"fmt ")?;
    writer.write_u32::<LittleEndian>(16)?;
    writer.write_u16::<LittleEndian>(format_tag)?;
    writer.write_u16::<LittleEndian>(format.channels)?;
    writer.write_u32::<LittleEndian>(format.sample_rate)?;
    writer.write_u32::<LittleEndian>(format.byte_rate())?;
    writer.write_u16::<LittleEndian>(format.block_align())?;
    writer.write_u16::<LittleEndian>(format.bits_per_sample)?;

    // data chunk
    writer.write_all(b"data")?;
    writer.write_u32::<LittleEndian>(data_size)?;
    writer.write_all(pcm_data)?;

    Ok(())
}

/// Writes a WAV file to a byte vector.
pub fn write_wav_to_vec(format: &ExportFormat, pcm_data: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + pcm_data.len());
    write_wav(&mut buffer, format, pcm_data).expect("writing to Vec should not fail");
    buffer
}
