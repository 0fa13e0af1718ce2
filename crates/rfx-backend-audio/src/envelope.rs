//! Attack-Sustain-Decay volume envelope.
//!
//! Stage lengths are measured in output samples. The sustain stage starts
//! with an overshoot of `2 * punch` above full volume that falls back to 1.0,
//! giving percussive sounds their initial hit.

use rfx_spec::ParameterSet;

/// Samples per unit of squared envelope time.
pub const ENVELOPE_TIME_SCALE: f32 = 100_000.0;

/// Envelope stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum EnvelopeStage {
    /// Volume ramps linearly from 0 to 1.
    Attack,
    /// Volume falls from `1 + 2 * punch` to 1.
    Sustain,
    /// Volume ramps linearly from 1 to 0.
    Decay,
    /// All stages elapsed.
    Finished,
}

impl EnvelopeStage {
    fn index(self) -> usize {
        match self {
            EnvelopeStage::Attack => 0,
            EnvelopeStage::Sustain => 1,
            EnvelopeStage::Decay => 2,
            EnvelopeStage::Finished => 3,
        }
    }

    fn next(self) -> Self {
        match self {
            EnvelopeStage::Attack => EnvelopeStage::Sustain,
            EnvelopeStage::Sustain => EnvelopeStage::Decay,
            EnvelopeStage::Decay | EnvelopeStage::Finished => EnvelopeStage::Finished,
        }
    }
}

/// Converts a normalized stage time to a length in samples.
pub fn stage_length(time: f32) -> u32 {
    (time * time * ENVELOPE_TIME_SCALE) as u32
}

/// Volume envelope state.
#[derive(Debug, Clone)]
pub struct Envelope {
    lengths: [u32; 3],
    punch: f32,
    stage: EnvelopeStage,
    time: u32,
    volume: f32,
}

impl Envelope {
    /// Creates an envelope from stage lengths in samples.
    pub fn new(attack: u32, sustain: u32, decay: u32, punch: f32) -> Self {
        Self {
            lengths: [attack, sustain, decay],
            punch,
            stage: EnvelopeStage::Attack,
            time: 0,
            volume: 0.0,
        }
    }

    /// Creates the envelope described by a parameter set.
    pub fn from_params(params: &ParameterSet) -> Self {
        Self::new(
            stage_length(params.attack_time),
            stage_length(params.sustain_time),
            stage_length(params.decay_time),
            params.sustain_punch,
        )
    }

    /// Advances one output sample and returns the volume for it.
    ///
    /// Once the envelope is finished the last volume is held.
    pub fn advance(&mut self) -> f32 {
        if self.stage == EnvelopeStage::Finished {
            return self.volume;
        }

        self.time += 1;
        if self.time > self.lengths[self.stage.index()] {
            self.time = 0;
            self.stage = self.stage.next();
        }

        match self.stage {
            EnvelopeStage::Attack => self.volume = self.progress(),
            EnvelopeStage::Sustain => {
                self.volume = 1.0 + (1.0 - self.progress()) * 2.0 * self.punch;
            }
            EnvelopeStage::Decay => self.volume = 1.0 - self.progress(),
            EnvelopeStage::Finished => {}
        }
        self.volume
    }

    // A zero-length stage reports no progress instead of dividing by zero.
    fn progress(&self) -> f32 {
        let length = self.lengths[self.stage.index()];
        if length == 0 {
            0.0
        } else {
            self.time as f32 / length as f32
        }
    }

    /// Current stage.
    pub fn stage(&self) -> EnvelopeStage {
        self.stage
    }

    /// Volume of the last advanced sample.
    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Whether all stages have elapsed.
    pub fn is_finished(&self) -> bool {
        self.stage == EnvelopeStage::Finished
    }

    /// Number of samples until the envelope finishes, counted from a fresh
    /// envelope (including the sample that finishes it).
    pub fn total_samples(&self) -> usize {
        self.lengths.iter().map(|&l| l as usize + 1).sum()
    }
}
