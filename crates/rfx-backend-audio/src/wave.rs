//! Rendered sample buffer.

/// Output sample rate of the synthesizer in Hz.
pub const SAMPLE_RATE: u32 = 44100;

/// Hard cap on a rendered sound, in seconds.
pub const MAX_WAVE_SECONDS: usize = 10;

/// Hard cap on a rendered sound, in samples.
pub const MAX_SAMPLES: usize = MAX_WAVE_SECONDS * SAMPLE_RATE as usize;

/// Why generation stopped (or that it has not yet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenerationStatus {
    /// Still producing samples.
    Running,
    /// The pitch slid past its floor while a floor was set.
    FloorReached,
    /// Attack, sustain and decay have all elapsed.
    EnvelopeExhausted,
    /// The sample limit was hit first.
    DurationCapped,
}

impl GenerationStatus {
    /// Whether generation has ended.
    pub fn is_terminal(self) -> bool {
        self != GenerationStatus::Running
    }

    /// Returns the snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            GenerationStatus::Running => "running",
            GenerationStatus::FloorReached => "floor_reached",
            GenerationStatus::EnvelopeExhausted => "envelope_exhausted",
            GenerationStatus::DurationCapped => "duration_capped",
        }
    }
}

impl std::fmt::Display for GenerationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A rendered sound: mono, 32-bit float, [`SAMPLE_RATE`] Hz.
///
/// Owned by the caller; the generator keeps no reference to it.
#[derive(Debug, Clone, PartialEq)]
pub struct Wave {
    /// Samples in `[-1, 1]`, truncated to what was actually rendered.
    pub samples: Vec<f32>,
    /// Why rendering stopped.
    pub status: GenerationStatus,
}

impl Wave {
    /// Sample rate in Hz.
    pub fn sample_rate(&self) -> u32 {
        SAMPLE_RATE
    }

    /// Number of rendered samples.
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// Duration in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.samples.len() as f64 / SAMPLE_RATE as f64
    }

    /// Largest absolute sample value.
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |peak, s| peak.max(s.abs()))
    }
}
