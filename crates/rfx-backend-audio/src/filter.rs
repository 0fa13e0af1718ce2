//! Resonant low-pass and leaky high-pass filters.
//!
//! Both filters are single-pole and run in series on every sub-sample. The
//! low-pass keeps a position and a velocity (`prev`, `delta`) and chases its
//! input with a spring of stiffness `width` and friction `damping`. The
//! high-pass integrates the low-pass output's differences and leaks by
//! `width` per sub-sample.

use rfx_spec::ParameterSet;

/// Upper bound for both filter widths.
pub const MAX_WIDTH: f32 = 0.1;

/// Lower bound for the high-pass width.
pub const MIN_HIGH_PASS_WIDTH: f32 = 0.000_01;

/// Resonant low-pass filter.
#[derive(Debug, Clone)]
pub struct LowPass {
    enabled: bool,
    width: f32,
    width_sweep: f32,
    damping: f32,
    prev: f32,
    delta: f32,
}

impl LowPass {
    /// Builds the low-pass described by a parameter set.
    ///
    /// A cutoff of exactly 1.0 disables the filter.
    pub fn from_params(params: &ParameterSet) -> Self {
        let width = params.lpf_cutoff.powi(3) * 0.1;
        let resonance = params.lpf_resonance;
        let damping = (5.0 / (1.0 + resonance * resonance * 20.0) * (0.01 + width)).min(0.8);

        Self {
            enabled: params.lpf_cutoff != 1.0,
            width,
            width_sweep: 1.0 + params.lpf_cutoff_sweep * 0.0001,
            damping,
            prev: 0.0,
            delta: 0.0,
        }
    }

    /// Filters one sub-sample. The width sweep is applied first.
    pub fn process(&mut self, input: f32) -> f32 {
        self.width = (self.width * self.width_sweep).clamp(0.0, MAX_WIDTH);

        if self.enabled {
            self.delta += (input - self.prev) * self.width;
            self.delta -= self.delta * self.damping;
        } else {
            self.prev = input;
            self.delta = 0.0;
        }
        self.prev += self.delta;
        self.prev
    }

    /// Last output value.
    pub fn output(&self) -> f32 {
        self.prev
    }

    /// Whether the filter shapes its input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current width.
    pub fn width(&self) -> f32 {
        self.width
    }
}

/// Leaky high-pass filter.
#[derive(Debug, Clone)]
pub struct HighPass {
    width: f32,
    width_sweep: f32,
    accum: f32,
}

impl HighPass {
    /// Builds the high-pass described by a parameter set.
    pub fn from_params(params: &ParameterSet) -> Self {
        Self {
            width: params.hpf_cutoff * params.hpf_cutoff * 0.1,
            width_sweep: 1.0 + params.hpf_cutoff_sweep * 0.0003,
            accum: 0.0,
        }
    }

    /// Applies the width sweep. Called once per output sample.
    ///
    /// The clamp applies even without a sweep, so a zero cutoff becomes
    /// [`MIN_HIGH_PASS_WIDTH`] after the first sample.
    pub fn sweep(&mut self) {
        self.width = (self.width * self.width_sweep).clamp(MIN_HIGH_PASS_WIDTH, MAX_WIDTH);
    }

    /// Filters the change between two consecutive low-pass outputs.
    pub fn process(&mut self, change: f32) -> f32 {
        self.accum += change;
        self.accum -= self.accum * self.width;
        self.accum
    }

    /// Current width.
    pub fn width(&self) -> f32 {
        self.width
    }
}

/// Low-pass followed by high-pass.
#[derive(Debug, Clone)]
pub struct FilterStage {
    low_pass: LowPass,
    high_pass: HighPass,
}

impl FilterStage {
    /// Builds both filters from a parameter set.
    pub fn from_params(params: &ParameterSet) -> Self {
        Self {
            low_pass: LowPass::from_params(params),
            high_pass: HighPass::from_params(params),
        }
    }

    /// Filters one sub-sample.
    pub fn process(&mut self, input: f32) -> f32 {
        let before = self.low_pass.output();
        let low = self.low_pass.process(input);
        self.high_pass.process(low - before)
    }

    /// Advances the per-sample high-pass sweep.
    pub fn sweep_high_pass(&mut self) {
        self.high_pass.sweep();
    }

    /// The low-pass stage.
    pub fn low_pass(&self) -> &LowPass {
        &self.low_pass
    }

    /// The high-pass stage.
    pub fn high_pass(&self) -> &HighPass {
        &self.high_pass
    }
}
