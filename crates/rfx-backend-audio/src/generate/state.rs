//! Per-call generation state.
//!
//! Everything here is created fresh by [`Generator::new`] and dropped when
//! the call returns. Nothing is shared between calls.

use rfx_spec::ParameterSet;

use crate::envelope::Envelope;
use crate::filter::FilterStage;
use crate::oscillator::Oscillator;
use crate::phaser::Phaser;
use crate::wave::GenerationStatus;

/// Oversampling factor: oscillator ticks per output sample.
pub const OVERSAMPLING: usize = 8;

/// Output gain applied after averaging the sub-samples.
pub const OUTPUT_SCALE: f32 = 0.2;

/// Computes a repeat or arpeggio interval in samples from a speed in `[0, 1]`.
fn interval_limit(speed: f32) -> u32 {
    let inv = 1.0 - speed;
    (inv * inv * 20_000.0 + 32.0) as u32
}

/// Pitch, slide, duty and arpeggio state.
///
/// This is the part of the state a repeat restores to its initial values.
#[derive(Debug, Clone)]
pub(crate) struct PitchState {
    pub(crate) period: f64,
    pub(crate) max_period: f64,
    pub(crate) slide: f64,
    pub(crate) delta_slide: f64,
    pub(crate) duty: f32,
    pub(crate) duty_sweep: f32,
    pub(crate) arpeggio_ratio: f64,
    pub(crate) arpeggio_time: u32,
    pub(crate) arpeggio_limit: u32,
}

impl PitchState {
    pub(crate) fn new(params: &ParameterSet) -> Self {
        let start = params.start_frequency as f64;
        let floor = params.min_frequency as f64;
        let change = params.change_amount as f64;

        let arpeggio_ratio = if params.change_amount >= 0.0 {
            1.0 - change * change * 0.9
        } else {
            1.0 + change * change * 10.0
        };
        let arpeggio_limit = if params.change_speed == 1.0 {
            0
        } else {
            interval_limit(params.change_speed)
        };

        Self {
            period: 100.0 / (start * start + 0.001),
            max_period: 100.0 / (floor * floor + 0.001),
            slide: 1.0 - (params.slide as f64).powi(3) * 0.01,
            delta_slide: -(params.delta_slide as f64).powi(3) * 0.000_001,
            duty: 0.5 - params.square_duty * 0.5,
            duty_sweep: -params.duty_sweep * 0.000_05,
            arpeggio_ratio,
            arpeggio_time: 0,
            arpeggio_limit,
        }
    }
}

/// The per-sample state machine for one generation call.
#[derive(Debug, Clone)]
pub(crate) struct Generator {
    params: ParameterSet,
    pub(crate) pitch: PitchState,
    repeat_time: u32,
    repeat_limit: u32,
    vibrato_phase: f64,
    vibrato_speed: f64,
    vibrato_amplitude: f64,
    pub(crate) envelope: Envelope,
    oscillator: Oscillator,
    filters: FilterStage,
    phaser: Phaser,
    pub(crate) status: GenerationStatus,
}

impl Generator {
    /// Derives all coefficients from an already clamped parameter set.
    pub(crate) fn new(params: &ParameterSet) -> Self {
        let repeat_limit = if params.repeat_speed == 0.0 {
            0
        } else {
            interval_limit(params.repeat_speed)
        };
        let vibrato_speed = params.vibrato_speed as f64;

        Self {
            params: *params,
            pitch: PitchState::new(params),
            repeat_time: 0,
            repeat_limit,
            vibrato_phase: 0.0,
            vibrato_speed: vibrato_speed * vibrato_speed * 0.01,
            vibrato_amplitude: params.vibrato_depth as f64 * 0.5,
            envelope: Envelope::from_params(params),
            oscillator: Oscillator::new(params.waveform, params.rand_seed),
            filters: FilterStage::from_params(params),
            phaser: Phaser::from_params(params),
            status: GenerationStatus::Running,
        }
    }

    /// Renders one output sample and updates [`Generator::status`].
    ///
    /// The sample that ends generation is still rendered; callers write it
    /// and then stop.
    pub(crate) fn step(&mut self) -> f32 {
        self.repeat_time += 1;
        if self.repeat_limit != 0 && self.repeat_time >= self.repeat_limit {
            self.repeat_time = 0;
            self.pitch = PitchState::new(&self.params);
        }

        let pitch = &mut self.pitch;
        pitch.arpeggio_time += 1;
        if pitch.arpeggio_limit != 0 && pitch.arpeggio_time >= pitch.arpeggio_limit {
            pitch.arpeggio_limit = 0;
            pitch.period *= pitch.arpeggio_ratio;
        }

        pitch.slide += pitch.delta_slide;
        pitch.period *= pitch.slide;
        let mut floor_reached = false;
        if pitch.period > pitch.max_period {
            pitch.period = pitch.max_period;
            floor_reached = self.params.min_frequency > 0.0;
        }

        let mut effective_period = pitch.period;
        if self.vibrato_amplitude > 0.0 {
            self.vibrato_phase += self.vibrato_speed;
            let wobble = self.vibrato_phase.sin() * self.vibrato_amplitude;
            effective_period = pitch.period * (1.0 + wobble);
        }
        let period = effective_period as u32;

        pitch.duty = (pitch.duty + pitch.duty_sweep).clamp(0.0, 0.5);
        let duty = pitch.duty;

        let volume = self.envelope.advance();
        let envelope_done = self.envelope.is_finished();

        self.phaser.sweep();
        self.filters.sweep_high_pass();

        let mut accum = 0.0f32;
        for _ in 0..OVERSAMPLING {
            let raw = self.oscillator.next(period, duty);
            let filtered = self.filters.process(raw);
            accum += self.phaser.process(filtered) * volume;
        }

        if floor_reached {
            self.status = GenerationStatus::FloorReached;
        } else if envelope_done {
            self.status = GenerationStatus::EnvelopeExhausted;
        }

        (accum / OVERSAMPLING as f32 * OUTPUT_SCALE).clamp(-1.0, 1.0)
    }
}
