//! Raw waveform source.
//!
//! The oscillator advances an integer phase counter once per sub-sample tick
//! and wraps it at the current integer period. Noise is a stepped lookup into
//! a 32-entry buffer that is re-rolled each time the phase wraps.

use rand_pcg::Pcg32;
use rfx_spec::Waveform;

use crate::rng::{create_rng, signed_unit};

/// Number of entries in the noise buffer.
pub const NOISE_BUFFER_LEN: usize = 32;

/// Smallest integer period the oscillator runs at.
pub const MIN_PERIOD: u32 = 8;

/// Oscillator state for one generation call.
#[derive(Debug, Clone)]
pub struct Oscillator {
    waveform: Waveform,
    phase: u32,
    noise: [f32; NOISE_BUFFER_LEN],
    rng: Pcg32,
}

impl Oscillator {
    /// Creates an oscillator whose noise buffer is drawn from `seed`.
    pub fn new(waveform: Waveform, seed: u32) -> Self {
        let mut osc = Self {
            waveform,
            phase: 0,
            noise: [0.0; NOISE_BUFFER_LEN],
            rng: create_rng(seed),
        };
        osc.reroll_noise();
        osc
    }

    /// Produces the next raw sample in `[-1, 1]`.
    ///
    /// `period` is clamped to at least [`MIN_PERIOD`]; `duty` is the fraction
    /// of the cycle the square wave spends high.
    pub fn next(&mut self, period: u32, duty: f32) -> f32 {
        let period = period.max(MIN_PERIOD);

        self.phase += 1;
        if self.phase >= period {
            self.phase %= period;
            if self.waveform == Waveform::Noise {
                self.reroll_noise();
            }
        }

        let fp = self.phase as f32 / period as f32;
        match self.waveform {
            Waveform::Square => {
                if fp < duty {
                    0.5
                } else {
                    -0.5
                }
            }
            Waveform::Sawtooth => 1.0 - fp * 2.0,
            Waveform::Sine => (fp * 2.0 * std::f32::consts::PI).sin(),
            Waveform::Noise => {
                let index = (self.phase as u64 * NOISE_BUFFER_LEN as u64 / period as u64) as usize;
                self.noise[index.min(NOISE_BUFFER_LEN - 1)]
            }
        }
    }

    /// Current phase counter.
    pub fn phase(&self) -> u32 {
        self.phase
    }

    /// Current noise buffer.
    pub fn noise(&self) -> &[f32; NOISE_BUFFER_LEN] {
        &self.noise
    }

    fn reroll_noise(&mut self) {
        for value in self.noise.iter_mut() {
            *value = signed_unit(&mut self.rng);
        }
    }
}
