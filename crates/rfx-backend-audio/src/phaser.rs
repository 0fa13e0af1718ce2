//! Short delay-line phaser.
//!
//! Each sub-sample is written to a 1024-entry ring and summed with the entry
//! `offset` positions behind it. The offset follows a phase that moves once
//! per output sample.

use rfx_spec::ParameterSet;

/// Ring length in samples.
pub const PHASER_LEN: usize = 1024;

/// Scale from squared offset parameter to phase.
const PHASE_SCALE: f32 = 1020.0;

/// Integer-delay ring buffer.
#[derive(Debug, Clone)]
pub struct DelayRing {
    buffer: Box<[f32; PHASER_LEN]>,
    cursor: usize,
}

impl Default for DelayRing {
    fn default() -> Self {
        Self::new()
    }
}

impl DelayRing {
    /// Creates a silent ring.
    pub fn new() -> Self {
        Self {
            buffer: Box::new([0.0; PHASER_LEN]),
            cursor: 0,
        }
    }

    /// Writes `input`, returns it summed with the sample `offset` slots
    /// behind, and advances the cursor.
    ///
    /// An offset of 0 reads back the value just written.
    pub fn process(&mut self, input: f32, offset: usize) -> f32 {
        let offset = offset.min(PHASER_LEN - 1);
        self.buffer[self.cursor] = input;
        let delayed = self.buffer[(self.cursor + PHASER_LEN - offset) % PHASER_LEN];
        self.cursor = (self.cursor + 1) % PHASER_LEN;
        input + delayed
    }

    /// Current write position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Phaser with its sweeping delay offset.
#[derive(Debug, Clone)]
pub struct Phaser {
    ring: DelayRing,
    phase: f32,
    phase_delta: f32,
    offset: usize,
}

impl Phaser {
    /// Builds the phaser described by a parameter set.
    pub fn from_params(params: &ParameterSet) -> Self {
        let phase = signed_square(params.phaser_offset) * PHASE_SCALE;
        let mut phaser = Self {
            ring: DelayRing::new(),
            phase,
            phase_delta: signed_square(params.phaser_sweep),
            offset: 0,
        };
        phaser.offset = phaser.offset_for_phase();
        phaser
    }

    /// Moves the phase by one output sample.
    pub fn sweep(&mut self) {
        self.phase += self.phase_delta;
        self.offset = self.offset_for_phase();
    }

    /// Processes one sub-sample at the current offset.
    pub fn process(&mut self, input: f32) -> f32 {
        self.ring.process(input, self.offset)
    }

    /// Current delay in samples.
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn offset_for_phase(&self) -> usize {
        ((self.phase as i32).unsigned_abs() as usize).min(PHASER_LEN - 1)
    }
}

fn signed_square(value: f32) -> f32 {
    if value < 0.0 {
        -value * value
    } else {
        value * value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_offset_doubles() {
        let mut ring = DelayRing::new();
        assert_eq!(ring.process(0.25, 0), 0.5);
        assert_eq!(ring.process(-0.1, 0), -0.2);
    }

    #[test]
    fn test_delayed_readback() {
        let mut ring = DelayRing::new();
        for i in 0..10 {
            ring.process(i as f32, 3);
        }
        // Writing 10.0 reads back the value written three slots earlier.
        assert_eq!(ring.process(10.0, 3), 10.0 + 7.0);
    }

    #[test]
    fn test_cursor_wraps() {
        let mut ring = DelayRing::new();
        for _ in 0..PHASER_LEN {
            ring.process(0.0, 0);
        }
        assert_eq!(ring.cursor(), 0);
    }

    #[test]
    fn test_offset_from_params() {
        let params = ParameterSet {
            phaser_offset: 0.5,
            ..ParameterSet::default()
        };
        assert_eq!(Phaser::from_params(&params).offset(), 255);

        let params = ParameterSet {
            phaser_offset: -0.5,
            ..ParameterSet::default()
        };
        assert_eq!(Phaser::from_params(&params).offset(), 255);
    }

    #[test]
    fn test_sweep_clamps_offset() {
        let params = ParameterSet {
            phaser_offset: 1.0,
            phaser_sweep: 1.0,
            ..ParameterSet::default()
        };
        let mut phaser = Phaser::from_params(&params);
        assert_eq!(phaser.offset(), 1020);
        for _ in 0..10 {
            phaser.sweep();
        }
        assert_eq!(phaser.offset(), PHASER_LEN - 1);
    }

    #[test]
    fn test_negative_sweep_passes_through_zero() {
        let params = ParameterSet {
            phaser_offset: 0.1,
            phaser_sweep: -1.0,
            ..ParameterSet::default()
        };
        let mut phaser = Phaser::from_params(&params);
        assert_eq!(phaser.offset(), 10);
        for _ in 0..10 {
            phaser.sweep();
        }
        assert_eq!(phaser.offset(), 0);
        for _ in 0..11 {
            phaser.sweep();
        }
        assert_eq!(phaser.offset(), 10);
    }
}
