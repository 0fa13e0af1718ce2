//! `.rfx` parameter layout.
//!
//! Little-endian:
//!
//! | offset | size | field                                  |
//! |--------|------|----------------------------------------|
//! | 0      | 4    | signature `rFX `                       |
//! | 4      | 4    | version (i32)                          |
//! | 8      | 4    | export sample rate (i32)               |
//! | 12     | 4    | export bits per sample (i32)           |
//! | 16     | 4    | export channel count (i32)             |
//! | 20     | 96   | parameter record                       |
//!
//! The parameter record is the [`ParameterSet`] in declaration order: the
//! seed and waveform as `i32`, then 22 `f32` controls.

use std::io::{Cursor, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use serde::{Deserialize, Serialize};

use crate::error::{SpecError, SpecResult};
use crate::export::ExportFormat;
use crate::params::{ParameterSet, Waveform};

/// File signature.
pub const SIGNATURE: [u8; 4] = *b"rFX ";

/// Layout version written and accepted.
pub const VERSION: i32 = 100;

/// Size of the file header in bytes.
pub const HEADER_LEN: usize = 20;

/// Size of the parameter record in bytes.
pub const RECORD_LEN: usize = 96;

const FORMAT: &str = "rfx";

/// Decoded contents of an `.rfx` file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RfxFile {
    /// Export format stored in the header.
    pub format: ExportFormat,
    /// Sound parameters.
    pub params: ParameterSet,
}

/// Decodes an `.rfx` file.
pub fn from_bytes(bytes: &[u8]) -> SpecResult<RfxFile> {
    let mut cursor = Cursor::new(bytes);
    read(&mut cursor)
}

/// Decodes an `.rfx` file from a reader.
pub fn read<R: Read>(reader: &mut R) -> SpecResult<RfxFile> {
    let mut signature = [0u8; 4];
    reader
        .read_exact(&mut signature)
        .map_err(|e| SpecError::truncated(FORMAT, e))?;
    if signature != SIGNATURE {
        return Err(SpecError::InvalidSignature {
            expected: SIGNATURE,
            found: signature,
        });
    }

    let version = read_i32(reader)?;
    if version != VERSION {
        return Err(SpecError::UnsupportedVersion {
            format: FORMAT,
            version,
        });
    }

    let sample_rate = read_i32(reader)?;
    let bits_per_sample = read_i32(reader)?;
    let channels = read_i32(reader)?;
    let format = ExportFormat {
        sample_rate: header_field("sample_rate", sample_rate)?,
        bits_per_sample: header_field("bits_per_sample", bits_per_sample)?,
        channels: header_field("channels", channels)?,
    };
    format.validate()?;

    let params = read_record(reader)?;
    Ok(RfxFile { format, params })
}

fn header_field<T: TryFrom<i32>>(field: &'static str, value: i32) -> SpecResult<T> {
    T::try_from(value).map_err(|_| SpecError::InvalidExportFormat {
        field,
        value: value as i64,
    })
}

/// Reads the 96-byte parameter record.
pub fn read_record<R: Read>(reader: &mut R) -> SpecResult<ParameterSet> {
    let rand_seed = read_i32(reader)? as u32;
    let waveform = Waveform::from_i32(read_i32(reader)?)?;

    Ok(ParameterSet {
        rand_seed,
        waveform,
        attack_time: read_f32(reader)?,
        sustain_time: read_f32(reader)?,
        sustain_punch: read_f32(reader)?,
        decay_time: read_f32(reader)?,
        start_frequency: read_f32(reader)?,
        min_frequency: read_f32(reader)?,
        slide: read_f32(reader)?,
        delta_slide: read_f32(reader)?,
        vibrato_depth: read_f32(reader)?,
        vibrato_speed: read_f32(reader)?,
        change_amount: read_f32(reader)?,
        change_speed: read_f32(reader)?,
        square_duty: read_f32(reader)?,
        duty_sweep: read_f32(reader)?,
        repeat_speed: read_f32(reader)?,
        phaser_offset: read_f32(reader)?,
        phaser_sweep: read_f32(reader)?,
        lpf_cutoff: read_f32(reader)?,
        lpf_cutoff_sweep: read_f32(reader)?,
        lpf_resonance: read_f32(reader)?,
        hpf_cutoff: read_f32(reader)?,
        hpf_cutoff_sweep: read_f32(reader)?,
    })
}

fn read_i32<R: Read>(reader: &mut R) -> SpecResult<i32> {
    reader
        .read_i32::<LittleEndian>()
        .map_err(|e| SpecError::truncated(FORMAT, e))
}

fn read_f32<R: Read>(reader: &mut R) -> SpecResult<f32> {
    reader
        .read_f32::<LittleEndian>()
        .map_err(|e| SpecError::truncated(FORMAT, e))
}

/// Encodes an `.rfx` file.
pub fn to_bytes(params: &ParameterSet, format: &ExportFormat) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(HEADER_LEN + RECORD_LEN);
    write(&mut buffer, params, format).expect("writing to Vec should not fail");
    buffer
}

/// Writes an `.rfx` file.
pub fn write<W: Write>(
    writer: &mut W,
    params: &ParameterSet,
    format: &ExportFormat,
) -> std::io::Result<()> {
    writer.write_all(&SIGNATURE)?;
    writer.write_i32::<LittleEndian>(VERSION)?;
    writer.write_i32::<LittleEndian>(format.sample_rate as i32)?;
    writer.write_i32::<LittleEndian>(format.bits_per_sample as i32)?;
    writer.write_i32::<LittleEndian>(format.channels as i32)?;
    write_record(writer, params)
}

/// Writes the 96-byte parameter record.
pub fn write_record<W: Write>(writer: &mut W, params: &ParameterSet) -> std::io::Result<()> {
    writer.write_i32::<LittleEndian>(params.rand_seed as i32)?;
    writer.write_i32::<LittleEndian>(params.waveform.as_i32())?;

    for value in [
        params.attack_time,
        params.sustain_time,
        params.sustain_punch,
        params.decay_time,
        params.start_frequency,
        params.min_frequency,
        params.slide,
        params.delta_slide,
        params.vibrato_depth,
        params.vibrato_speed,
        params.change_amount,
        params.change_speed,
        params.square_duty,
        params.duty_sweep,
        params.repeat_speed,
        params.phaser_offset,
        params.phaser_sweep,
        params.lpf_cutoff,
        params.lpf_cutoff_sweep,
        params.lpf_resonance,
        params.hpf_cutoff,
        params.hpf_cutoff_sweep,
    ] {
        writer.write_f32::<LittleEndian>(value)?;
    }

    Ok(())
}
