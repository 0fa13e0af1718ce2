//! Main entry point for sound generation.
//!
//! [`generate`] clamps its input, derives a fresh [`Generator`] and steps it
//! until it reports a terminal [`GenerationStatus`] or the sample limit is
//! reached.

mod state;


use rfx_spec::ParameterSet;

use crate::wave::{GenerationStatus, Wave, MAX_SAMPLES};

pub use state::{OUTPUT_SCALE, OVERSAMPLING};

use state::Generator;

/// Renders a parameter set into a finished wave.
///
/// Never fails: out-of-range parameters are clamped first. The result is a
/// pure function of `params`, including the noise seed.
pub fn generate(params: &ParameterSet) -> Wave {
    generate_with_limit(params, MAX_SAMPLES)
}

/// Renders at most `max_samples` samples.
///
/// Limits above [`MAX_SAMPLES`] are lowered to it. When the limit is hit
/// first, the wave's status is [`GenerationStatus::DurationCapped`].
pub fn generate_with_limit(params: &ParameterSet, max_samples: usize) -> Wave {
    let params = params.clamped();
    let max_samples = max_samples.min(MAX_SAMPLES);

    tracing::debug!(
        waveform = %params.waveform,
        seed = params.rand_seed,
        max_samples,
        "generating sound"
    );

    let mut generator = Generator::new(&params);
    let mut samples = Vec::with_capacity(expected_len(&generator, max_samples));

    while samples.len() < max_samples {
        samples.push(generator.step());
        if generator.status.is_terminal() {
            break;
        }
    }

    let status = if generator.status.is_terminal() {
        generator.status
    } else {
        GenerationStatus::DurationCapped
    };

    tracing::debug!(samples = samples.len(), %status, "generation finished");

    Wave { samples, status }
}

fn expected_len(generator: &Generator, max_samples: usize) -> usize {
    generator.envelope.total_samples().min(max_samples)
}
