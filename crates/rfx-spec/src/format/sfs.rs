//! Legacy `.sfs` parameter layout.
//!
//! Little-endian, no signature. A leading `i32` version (100, 101 or 102)
//! selects which fields follow:
//!
//! | field                | type | versions |
//! |----------------------|------|----------|
//! | version              | i32  | all      |
//! | waveform             | i32  | all      |
//! | volume               | f32  | 102      |
//! | start frequency      | f32  | all      |
//! | min frequency        | f32  | all      |
//! | slide                | f32  | all      |
//! | delta slide          | f32  | >= 101   |
//! | square duty          | f32  | all      |
//! | duty sweep           | f32  | all      |
//! | vibrato depth        | f32  | all      |
//! | vibrato speed        | f32  | all      |
//! | vibrato delay        | f32  | all      |
//! | attack               | f32  | all      |
//! | sustain              | f32  | all      |
//! | decay                | f32  | all      |
//! | punch                | f32  | all      |
//! | filter on            | u8   | all      |
//! | lpf resonance        | f32  | all      |
//! | lpf cutoff           | f32  | all      |
//! | lpf cutoff sweep     | f32  | all      |
//! | hpf cutoff           | f32  | all      |
//! | hpf cutoff sweep     | f32  | all      |
//! | phaser offset        | f32  | all      |
//! | phaser sweep         | f32  | all      |
//! | repeat speed         | f32  | all      |
//! | change speed         | f32  | >= 101   |
//! | change amount        | f32  | >= 101   |
//!
//! Volume, vibrato delay and the filter flag have no counterpart in
//! [`ParameterSet`]; they are skipped on read and written as fixed values.
//! The layout carries no noise seed.

use std::io::{Cursor, Read, Write};

use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};

use crate::error::{SpecError, SpecResult};
use crate::params::{ParameterSet, Waveform};

/// Versions this reader understands.
pub const SUPPORTED_VERSIONS: [i32; 3] = [100, 101, 102];

/// Version emitted by the writer.
pub const WRITE_VERSION: i32 = 102;

/// Volume written for version 102 files.
pub const DEFAULT_VOLUME: f32 = 0.5;

const FORMAT: &str = "sfs";

/// Decodes a legacy parameter file.
///
/// Fields absent from older versions keep their reset values.
pub fn from_bytes(bytes: &[u8]) -> SpecResult<ParameterSet> {
    let mut cursor = Cursor::new(bytes);
    read(&mut cursor)
}

/// Decodes a legacy parameter file from a reader.
pub fn read<R: Read>(reader: &mut R) -> SpecResult<ParameterSet> {
    let version = read_i32(reader)?;
    if !SUPPORTED_VERSIONS.contains(&version) {
        return Err(SpecError::UnsupportedVersion {
            format: FORMAT,
            version,
        });
    }

    let mut params = ParameterSet::default();

    params.waveform = Waveform::from_i32(read_i32(reader)?)?;
    if version == 102 {
        let _volume = read_f32(reader)?;
    }

    params.start_frequency = read_f32(reader)?;
    params.min_frequency = read_f32(reader)?;
    params.slide = read_f32(reader)?;
    if version >= 101 {
        params.delta_slide = read_f32(reader)?;
    }
    params.square_duty = read_f32(reader)?;
    params.duty_sweep = read_f32(reader)?;

    params.vibrato_depth = read_f32(reader)?;
    params.vibrato_speed = read_f32(reader)?;
    let _vibrato_delay = read_f32(reader)?;

    params.attack_time = read_f32(reader)?;
    params.sustain_time = read_f32(reader)?;
    params.decay_time = read_f32(reader)?;
    params.sustain_punch = read_f32(reader)?;

    let _filter_on = reader
        .read_u8()
        .map_err(|e| SpecError::truncated(FORMAT, e))?;
    params.lpf_resonance = read_f32(reader)?;
    params.lpf_cutoff = read_f32(reader)?;
    params.lpf_cutoff_sweep = read_f32(reader)?;
    params.hpf_cutoff = read_f32(reader)?;
    params.hpf_cutoff_sweep = read_f32(reader)?;

    params.phaser_offset = read_f32(reader)?;
    params.phaser_sweep = read_f32(reader)?;

    params.repeat_speed = read_f32(reader)?;

    if version >= 101 {
        params.change_speed = read_f32(reader)?;
        params.change_amount = read_f32(reader)?;
    }

    Ok(params)
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

/// Encodes a parameter set as a version 102 legacy file.
pub fn to_bytes(params: &ParameterSet) -> Vec<u8> {
    let mut buffer = Vec::with_capacity(encoded_len(WRITE_VERSION));
    write(&mut buffer, params).expect("writing to Vec should not fail");
    buffer
}

/// Writes a parameter set as a version 102 legacy file.
pub fn write<W: Write>(writer: &mut W, params: &ParameterSet) -> std::io::Result<()> {
    writer.write_i32::<LittleEndian>(WRITE_VERSION)?;
    writer.write_i32::<LittleEndian>(params.waveform.as_i32())?;
    writer.write_f32::<LittleEndian>(DEFAULT_VOLUME)?;

    writer.write_f32::<LittleEndian>(params.start_frequency)?;
    writer.write_f32::<LittleEndian>(params.min_frequency)?;
    writer.write_f32::<LittleEndian>(params.slide)?;
    writer.write_f32::<LittleEndian>(params.delta_slide)?;
    writer.write_f32::<LittleEndian>(params.square_duty)?;
    writer.write_f32::<LittleEndian>(params.duty_sweep)?;

    writer.write_f32::<LittleEndian>(params.vibrato_depth)?;
    writer.write_f32::<LittleEndian>(params.vibrato_speed)?;
    // Vibrato delay
    writer.write_f32::<LittleEndian>(0.0)?;

    writer.write_f32::<LittleEndian>(params.attack_time)?;
    writer.write_f32::<LittleEndian>(params.sustain_time)?;
    writer.write_f32::<LittleEndian>(params.decay_time)?;
    writer.write_f32::<LittleEndian>(params.sustain_punch)?;

    writer.write_u8(params.has_active_filter() as u8)?;
    writer.write_f32::<LittleEndian>(params.lpf_resonance)?;
    writer.write_f32::<LittleEndian>(params.lpf_cutoff)?;
    writer.write_f32::<LittleEndian>(params.lpf_cutoff_sweep)?;
    writer.write_f32::<LittleEndian>(params.hpf_cutoff)?;
    writer.write_f32::<LittleEndian>(params.hpf_cutoff_sweep)?;

    writer.write_f32::<LittleEndian>(params.phaser_offset)?;
    writer.write_f32::<LittleEndian>(params.phaser_sweep)?;

    writer.write_f32::<LittleEndian>(params.repeat_speed)?;

    writer.write_f32::<LittleEndian>(params.change_speed)?;
    writer.write_f32::<LittleEndian>(params.change_amount)?;

    Ok(())
}

/// Size in bytes of a file of the given version.
pub fn encoded_len(version: i32) -> usize {
    // version + waveform + 20 common floats + filter flag
    let mut len = 4 + 4 + 20 * 4 + 1;
    if version >= 101 {
        len += 3 * 4;
    }
    if version == 102 {
        len += 4;
    }
    len
}
