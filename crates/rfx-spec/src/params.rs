//! Sound parameter types.

use serde::{Deserialize, Serialize};

use crate::error::{SpecError, SpecResult};

/// Base waveform produced by the oscillator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    /// Square wave with variable duty cycle.
    #[default]
    Square,
    /// Falling sawtooth.
    Sawtooth,
    /// Sine wave.
    Sine,
    /// Stepped white noise (32 values per period).
    Noise,
}

impl Waveform {
    /// All waveforms in wire order.
    pub const ALL: [Waveform; 4] = [
        Waveform::Square,
        Waveform::Sawtooth,
        Waveform::Sine,
        Waveform::Noise,
    ];

    /// Returns the integer selector used by the binary file formats.
    pub fn as_i32(self) -> i32 {
        match self {
            Waveform::Square => 0,
            Waveform::Sawtooth => 1,
            Waveform::Sine => 2,
            Waveform::Noise => 3,
        }
    }

    /// Parses the integer selector used by the binary file formats.
    pub fn from_i32(value: i32) -> SpecResult<Self> {
        match value {
            0 => Ok(Waveform::Square),
            1 => Ok(Waveform::Sawtooth),
            2 => Ok(Waveform::Sine),
            3 => Ok(Waveform::Noise),
            other => Err(SpecError::InvalidWaveform(other)),
        }
    }

    /// Returns the lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            Waveform::Square => "square",
            Waveform::Sawtooth => "sawtooth",
            Waveform::Sine => "sine",
            Waveform::Noise => "noise",
        }
    }
}

impl std::fmt::Display for Waveform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Complete description of one sound effect.
///
/// All controls are normalized. Unsigned controls live in `[0, 1]`, signed
/// ones in `[-1, 1]`. Values outside those ranges are tolerated here and
/// bounded by [`ParameterSet::clamped`] before synthesis.
///
/// Field order matches the `.rfx` record layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ParameterSet {
    /// Seed for the noise buffer.
    pub rand_seed: u32,
    /// Base waveform.
    pub waveform: Waveform,

    /// Attack length (0 to 1).
    pub attack_time: f32,
    /// Sustain length (0 to 1).
    pub sustain_time: f32,
    /// Extra volume at the start of sustain, decaying to 1.0 (0 to 1).
    pub sustain_punch: f32,
    /// Decay length (0 to 1).
    pub decay_time: f32,

    /// Initial pitch (0 to 1).
    pub start_frequency: f32,
    /// Pitch floor; reaching it ends the sound when non-zero (0 to 1).
    pub min_frequency: f32,
    /// Pitch slide (-1 to 1).
    pub slide: f32,
    /// Acceleration of the pitch slide (-1 to 1).
    pub delta_slide: f32,
    /// Vibrato depth (0 to 1).
    pub vibrato_depth: f32,
    /// Vibrato speed (0 to 1).
    pub vibrato_speed: f32,

    /// Arpeggio pitch jump (-1 to 1).
    pub change_amount: f32,
    /// Arpeggio trigger speed; 1.0 disables the jump (0 to 1).
    pub change_speed: f32,

    /// Square wave duty (0 to 1, mapped to 50%..0%).
    pub square_duty: f32,
    /// Duty sweep (-1 to 1).
    pub duty_sweep: f32,

    /// Retrigger speed; 0.0 never repeats (0 to 1).
    pub repeat_speed: f32,

    /// Phaser delay offset (-1 to 1).
    pub phaser_offset: f32,
    /// Phaser delay sweep (-1 to 1).
    pub phaser_sweep: f32,

    /// Low-pass cutoff; exactly 1.0 disables the filter (0 to 1).
    pub lpf_cutoff: f32,
    /// Low-pass cutoff sweep (-1 to 1).
    pub lpf_cutoff_sweep: f32,
    /// Low-pass resonance (0 to 1).
    pub lpf_resonance: f32,
    /// High-pass cutoff (0 to 1).
    pub hpf_cutoff: f32,
    /// High-pass cutoff sweep (-1 to 1).
    pub hpf_cutoff_sweep: f32,
}

impl Default for ParameterSet {
    /// The reset preset: a short square beep that every preset mutates from.
    fn default() -> Self {
        Self {
            rand_seed: 0,
            waveform: Waveform::Square,
            attack_time: 0.0,
            sustain_time: 0.3,
            sustain_punch: 0.0,
            decay_time: 0.4,
            start_frequency: 0.3,
            min_frequency: 0.0,
            slide: 0.0,
            delta_slide: 0.0,
            vibrato_depth: 0.0,
            vibrato_speed: 0.0,
            change_amount: 0.0,
            change_speed: 0.0,
            square_duty: 0.0,
            duty_sweep: 0.0,
            repeat_speed: 0.0,
            phaser_offset: 0.0,
            phaser_sweep: 0.0,
            lpf_cutoff: 1.0,
            lpf_cutoff_sweep: 0.0,
            lpf_resonance: 0.0,
            hpf_cutoff: 0.0,
            hpf_cutoff_sweep: 0.0,
        }
    }
}

fn unsigned(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, 1.0)
    } else {
        fallback
    }
}

fn signed(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value.clamp(-1.0, 1.0)
    } else {
        fallback
    }
}

impl ParameterSet {
    /// Returns a copy with every control bounded to its documented range.
    ///
    /// Non-finite values fall back to the reset preset's value for that field.
    pub fn clamped(&self) -> Self {
        let d = Self::default();
        Self {
            rand_seed: self.rand_seed,
            waveform: self.waveform,
            attack_time: unsigned(self.attack_time, d.attack_time),
            sustain_time: unsigned(self.sustain_time, d.sustain_time),
            sustain_punch: unsigned(self.sustain_punch, d.sustain_punch),
            decay_time: unsigned(self.decay_time, d.decay_time),
            start_frequency: unsigned(self.start_frequency, d.start_frequency),
            min_frequency: unsigned(self.min_frequency, d.min_frequency),
            slide: signed(self.slide, d.slide),
            delta_slide: signed(self.delta_slide, d.delta_slide),
            vibrato_depth: unsigned(self.vibrato_depth, d.vibrato_depth),
            vibrato_speed: unsigned(self.vibrato_speed, d.vibrato_speed),
            change_amount: signed(self.change_amount, d.change_amount),
            change_speed: unsigned(self.change_speed, d.change_speed),
            square_duty: unsigned(self.square_duty, d.square_duty),
            duty_sweep: signed(self.duty_sweep, d.duty_sweep),
            repeat_speed: unsigned(self.repeat_speed, d.repeat_speed),
            phaser_offset: signed(self.phaser_offset, d.phaser_offset),
            phaser_sweep: signed(self.phaser_sweep, d.phaser_sweep),
            lpf_cutoff: unsigned(self.lpf_cutoff, d.lpf_cutoff),
            lpf_cutoff_sweep: signed(self.lpf_cutoff_sweep, d.lpf_cutoff_sweep),
            lpf_resonance: unsigned(self.lpf_resonance, d.lpf_resonance),
            hpf_cutoff: unsigned(self.hpf_cutoff, d.hpf_cutoff),
            hpf_cutoff_sweep: signed(self.hpf_cutoff_sweep, d.hpf_cutoff_sweep),
        }
    }

    /// Returns true if every control is already within range.
    pub fn is_in_range(&self) -> bool {
        *self == self.clamped()
    }

    /// Whether either filter changes the signal.
    pub fn has_active_filter(&self) -> bool {
        self.lpf_cutoff != 1.0 || self.hpf_cutoff != 0.0
    }

    /// Parses a parameter set from JSON. Missing fields take reset values.
    pub fn from_json(json: &str) -> SpecResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Returns true if no control is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.controls().iter().all(|v| v.is_finite())
    }

    /// Serializes the parameter set as pretty JSON.
    ///
    /// JSON has no NaN or infinity, so a set carrying one is written clamped.
    /// Rendering clamps anyway, so the written file sounds the same.
    pub fn to_json_pretty(&self) -> SpecResult<String> {
        if self.is_finite() {
            Ok(serde_json::to_string_pretty(self)?)
        } else {
            Ok(serde_json::to_string_pretty(&self.clamped())?)
        }
    }

    fn controls(&self) -> [f32; 22] {
        [
            self.attack_time,
            self.sustain_time,
            self.sustain_punch,
            self.decay_time,
            self.start_frequency,
            self.min_frequency,
            self.slide,
            self.delta_slide,
            self.vibrato_depth,
            self.vibrato_speed,
            self.change_amount,
            self.change_speed,
            self.square_duty,
            self.duty_sweep,
            self.repeat_speed,
            self.phaser_offset,
            self.phaser_sweep,
            self.lpf_cutoff,
            self.lpf_cutoff_sweep,
            self.lpf_resonance,
            self.hpf_cutoff,
            self.hpf_cutoff_sweep,
        ]
    }
}
