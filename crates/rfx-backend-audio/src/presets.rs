//! Randomized parameter producers.
//!
//! Each preset starts from [`ParameterSet::default`] and draws its values
//! from a PCG32 stream derived from the caller's seed and the preset name.
//! The same seed always yields the same parameter set. Producers touch no
//! generation state; they only build parameters.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rand_pcg::Pcg32;
use rfx_spec::{ParameterSet, Waveform};

use crate::error::AudioError;
use crate::rng::{coin, create_component_rng, frnd, rnd};

/// Sound categories with a dedicated parameter producer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PresetKind {
    /// Coin or item pickup.
    Pickup,
    /// Laser or shot.
    Laser,
    /// Explosion.
    Explosion,
    /// Power-up.
    Powerup,
    /// Hit or hurt.
    Hit,
    /// Jump.
    Jump,
    /// Menu blip or select.
    Blip,
    /// Anything goes.
    Random,
}

impl PresetKind {
    /// All presets, in menu order.
    pub const ALL: [PresetKind; 8] = [
        PresetKind::Pickup,
        PresetKind::Laser,
        PresetKind::Explosion,
        PresetKind::Powerup,
        PresetKind::Hit,
        PresetKind::Jump,
        PresetKind::Blip,
        PresetKind::Random,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            PresetKind::Pickup => "pickup",
            PresetKind::Laser => "laser",
            PresetKind::Explosion => "explosion",
            PresetKind::Powerup => "powerup",
            PresetKind::Hit => "hit",
            PresetKind::Jump => "jump",
            PresetKind::Blip => "blip",
            PresetKind::Random => "random",
        }
    }

    /// Produces the parameter set for `seed`.
    pub fn generate(self, seed: u32) -> ParameterSet {
        let mut rng = create_component_rng(seed, self.name());
        let mut params = ParameterSet::default();

        match self {
            PresetKind::Pickup => pickup(&mut rng, &mut params),
            PresetKind::Laser => laser(&mut rng, &mut params),
            PresetKind::Explosion => explosion(&mut rng, &mut params),
            PresetKind::Powerup => powerup(&mut rng, &mut params),
            PresetKind::Hit => hit(&mut rng, &mut params),
            PresetKind::Jump => jump(&mut rng, &mut params),
            PresetKind::Blip => blip(&mut rng, &mut params),
            PresetKind::Random => random(&mut rng, &mut params),
        }

        params.rand_seed = rng.gen();
        tracing::debug!(preset = self.name(), seed, "generated preset");
        params.clamped()
    }
}

impl fmt::Display for PresetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PresetKind {
    type Err = AudioError;

    /// Accepts the canonical names plus the classic aliases
    /// (`coin`, `shoot`, `hurt`, `select`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pickup" | "coin" => Ok(PresetKind::Pickup),
            "laser" | "shoot" => Ok(PresetKind::Laser),
            "explosion" => Ok(PresetKind::Explosion),
            "powerup" => Ok(PresetKind::Powerup),
            "hit" | "hurt" => Ok(PresetKind::Hit),
            "jump" => Ok(PresetKind::Jump),
            "blip" | "select" => Ok(PresetKind::Blip),
            "random" => Ok(PresetKind::Random),
            _ => Err(AudioError::UnknownPreset {
                name: s.to_string(),
            }),
        }
    }
}

fn waveform_at(index: u32) -> Waveform {
    Waveform::ALL[(index as usize).min(Waveform::ALL.len() - 1)]
}

fn pickup(rng: &mut Pcg32, p: &mut ParameterSet) {
    p.start_frequency = 0.4 + frnd(rng, 0.5);
    p.attack_time = 0.0;
    p.sustain_time = frnd(rng, 0.1);
    p.decay_time = 0.1 + frnd(rng, 0.4);
    p.sustain_punch = 0.3 + frnd(rng, 0.3);
    if coin(rng) {
        p.change_speed = 0.5 + frnd(rng, 0.2);
        p.change_amount = 0.2 + frnd(rng, 0.4);
    }
}

fn laser(rng: &mut Pcg32, p: &mut ParameterSet) {
    let mut wave = rnd(rng, 2);
    if wave == 2 && coin(rng) {
        wave = rnd(rng, 1);
    }
    p.waveform = waveform_at(wave);

    p.start_frequency = 0.5 + frnd(rng, 0.5);
    p.min_frequency = (p.start_frequency - 0.2 - frnd(rng, 0.6)).max(0.2);
    p.slide = -0.15 - frnd(rng, 0.2);
    if rnd(rng, 2) == 0 {
        p.start_frequency = 0.3 + frnd(rng, 0.6);
        p.min_frequency = frnd(rng, 0.1);
        p.slide = -0.35 - frnd(rng, 0.3);
    }

    if coin(rng) {
        p.square_duty = frnd(rng, 0.5);
        p.duty_sweep = frnd(rng, 0.2);
    } else {
        p.square_duty = 0.4 + frnd(rng, 0.5);
        p.duty_sweep = -frnd(rng, 0.7);
    }

    p.attack_time = 0.0;
    p.sustain_time = 0.1 + frnd(rng, 0.2);
    p.decay_time = frnd(rng, 0.4);
    if coin(rng) {
        p.sustain_punch = frnd(rng, 0.3);
    }
    if rnd(rng, 2) == 0 {
        p.phaser_offset = frnd(rng, 0.2);
        p.phaser_sweep = -frnd(rng, 0.2);
    }
    if coin(rng) {
        p.hpf_cutoff = frnd(rng, 0.3);
    }
}

fn explosion(rng: &mut Pcg32, p: &mut ParameterSet) {
    p.waveform = Waveform::Noise;
    if coin(rng) {
        p.start_frequency = 0.1 + frnd(rng, 0.4);
        p.slide = -0.1 + frnd(rng, 0.4);
    } else {
        p.start_frequency = 0.2 + frnd(rng, 0.7);
        p.slide = -0.2 - frnd(rng, 0.2);
    }
    p.start_frequency *= p.start_frequency;
    if rnd(rng, 4) == 0 {
        p.slide = 0.0;
    }
    if rnd(rng, 2) == 0 {
        p.repeat_speed = 0.3 + frnd(rng, 0.5);
    }

    p.attack_time = 0.0;
    p.sustain_time = 0.1 + frnd(rng, 0.3);
    p.decay_time = frnd(rng, 0.5);
    if !coin(rng) {
        p.phaser_offset = -0.3 + frnd(rng, 0.9);
        p.phaser_sweep = -frnd(rng, 0.3);
    }
    p.sustain_punch = 0.2 + frnd(rng, 0.6);
    if coin(rng) {
        p.vibrato_depth = frnd(rng, 0.7);
        p.vibrato_speed = frnd(rng, 0.6);
    }
    if rnd(rng, 2) == 0 {
        p.change_speed = 0.6 + frnd(rng, 0.3);
        p.change_amount = 0.8 - frnd(rng, 1.6);
    }
}

fn powerup(rng: &mut Pcg32, p: &mut ParameterSet) {
    if coin(rng) {
        p.waveform = Waveform::Sawtooth;
    } else {
        p.square_duty = frnd(rng, 0.6);
    }

    p.start_frequency = 0.2 + frnd(rng, 0.3);
    if coin(rng) {
        p.slide = 0.1 + frnd(rng, 0.4);
        p.repeat_speed = 0.4 + frnd(rng, 0.4);
    } else {
        p.slide = 0.05 + frnd(rng, 0.2);
        if coin(rng) {
            p.vibrato_depth = frnd(rng, 0.7);
            p.vibrato_speed = frnd(rng, 0.6);
        }
    }

    p.attack_time = 0.0;
    p.sustain_time = frnd(rng, 0.4);
    p.decay_time = 0.1 + frnd(rng, 0.4);
}

fn hit(rng: &mut Pcg32, p: &mut ParameterSet) {
    p.waveform = match rnd(rng, 2) {
        0 => Waveform::Square,
        1 => Waveform::Sawtooth,
        _ => Waveform::Noise,
    };
    if p.waveform == Waveform::Square {
        p.square_duty = frnd(rng, 0.6);
    }

    p.start_frequency = 0.2 + frnd(rng, 0.6);
    p.slide = -0.3 - frnd(rng, 0.4);

    p.attack_time = 0.0;
    p.sustain_time = frnd(rng, 0.1);
    p.decay_time = 0.1 + frnd(rng, 0.2);
    if coin(rng) {
        p.hpf_cutoff = frnd(rng, 0.3);
    }
}

fn jump(rng: &mut Pcg32, p: &mut ParameterSet) {
    p.waveform = Waveform::Square;
    p.square_duty = frnd(rng, 0.6);
    p.start_frequency = 0.3 + frnd(rng, 0.3);
    p.slide = 0.1 + frnd(rng, 0.2);

    p.attack_time = 0.0;
    p.sustain_time = 0.1 + frnd(rng, 0.3);
    p.decay_time = 0.1 + frnd(rng, 0.2);
    if coin(rng) {
        p.hpf_cutoff = frnd(rng, 0.3);
    }
    if coin(rng) {
        p.lpf_cutoff = 1.0 - frnd(rng, 0.6);
    }
}

fn blip(rng: &mut Pcg32, p: &mut ParameterSet) {
    p.waveform = waveform_at(rnd(rng, 1));
    if p.waveform == Waveform::Square {
        p.square_duty = frnd(rng, 0.6);
    }
    p.start_frequency = 0.2 + frnd(rng, 0.4);

    p.attack_time = 0.0;
    p.sustain_time = 0.1 + frnd(rng, 0.1);
    p.decay_time = frnd(rng, 0.2);
    p.hpf_cutoff = 0.1;
}

/// Uniform value in `[-1, 1)` raised to `power`, keeping the sign for odd
/// powers.
fn spread(rng: &mut Pcg32, power: i32) -> f32 {
    (frnd(rng, 2.0) - 1.0).powi(power)
}

fn random(rng: &mut Pcg32, p: &mut ParameterSet) {
    p.waveform = waveform_at(rnd(rng, 3));

    p.start_frequency = spread(rng, 2);
    if coin(rng) {
        p.start_frequency = spread(rng, 3) + 0.5;
    }
    p.min_frequency = 0.0;
    p.slide = spread(rng, 5);
    if p.start_frequency > 0.7 && p.slide > 0.2 {
        p.slide = -p.slide;
    }
    if p.start_frequency < 0.2 && p.slide < -0.05 {
        p.slide = -p.slide;
    }
    p.delta_slide = spread(rng, 3);

    p.square_duty = spread(rng, 1);
    p.duty_sweep = spread(rng, 3);
    p.vibrato_depth = spread(rng, 3);
    p.vibrato_speed = spread(rng, 1);

    p.attack_time = spread(rng, 3);
    p.sustain_time = spread(rng, 2);
    p.decay_time = spread(rng, 1);
    p.sustain_punch = frnd(rng, 0.8).powi(2);
    if p.attack_time + p.sustain_time + p.decay_time < 0.2 {
        p.sustain_time += 0.2 + frnd(rng, 0.3);
        p.decay_time += 0.2 + frnd(rng, 0.3);
    }

    p.lpf_resonance = spread(rng, 1);
    p.lpf_cutoff = 1.0 - frnd(rng, 1.0).powi(3);
    p.lpf_cutoff_sweep = spread(rng, 3);
    if p.lpf_cutoff < 0.1 && p.lpf_cutoff_sweep < -0.05 {
        p.lpf_cutoff_sweep = -p.lpf_cutoff_sweep;
    }
    p.hpf_cutoff = frnd(rng, 1.0).powi(5);
    p.hpf_cutoff_sweep = spread(rng, 5);

    p.phaser_offset = spread(rng, 3);
    p.phaser_sweep = spread(rng, 3);
    p.repeat_speed = spread(rng, 1);
    p.change_speed = spread(rng, 1);
    p.change_amount = spread(rng, 1);
}

/// Nudges roughly half of the fields of `params` by up to +/-0.05.
///
/// The waveform and noise seed are kept, so the result still sounds like a
/// variation of the input. Deterministic in `seed`.
pub fn mutate(params: &ParameterSet, seed: u32) -> ParameterSet {
    let mut rng = create_component_rng(seed, "mutate");
    let mut p = *params;

    for field in [
        &mut p.start_frequency,
        &mut p.slide,
        &mut p.delta_slide,
        &mut p.square_duty,
        &mut p.duty_sweep,
        &mut p.vibrato_depth,
        &mut p.vibrato_speed,
        &mut p.attack_time,
        &mut p.sustain_time,
        &mut p.decay_time,
        &mut p.sustain_punch,
        &mut p.lpf_resonance,
        &mut p.lpf_cutoff,
        &mut p.lpf_cutoff_sweep,
        &mut p.hpf_cutoff,
        &mut p.hpf_cutoff_sweep,
        &mut p.phaser_offset,
        &mut p.phaser_sweep,
        &mut p.repeat_speed,
        &mut p.change_speed,
        &mut p.change_amount,
    ] {
        if coin(&mut rng) {
            *field += frnd(&mut rng, 0.1) - 0.05;
        }
    }

    tracing::debug!(seed, "mutated parameters");
    p.clamped()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_presets_are_deterministic() {
        for kind in PresetKind::ALL {
            assert_eq!(kind.generate(7), kind.generate(7), "{kind}");
        }
    }

    #[test]
    fn test_presets_are_in_range() {
        for kind in PresetKind::ALL {
            for seed in 0..50 {
                assert!(kind.generate(seed).is_in_range(), "{kind} seed {seed}");
            }
        }
    }

    #[test]
    fn test_seeds_differ() {
        for kind in PresetKind::ALL {
            assert_ne!(kind.generate(1), kind.generate(2), "{kind}");
        }
    }

    #[test]
    fn test_kinds_differ_for_same_seed() {
        assert_ne!(
            PresetKind::Laser.generate(3),
            PresetKind::Jump.generate(3)
        );
    }

    #[test]
    fn test_preset_shapes() {
        for seed in 0..20 {
            assert_eq!(PresetKind::Explosion.generate(seed).waveform, Waveform::Noise);
            assert_eq!(PresetKind::Jump.generate(seed).waveform, Waveform::Square);
            assert_eq!(PresetKind::Blip.generate(seed).hpf_cutoff, 0.1);

            let laser = PresetKind::Laser.generate(seed);
            assert!(laser.slide < 0.0);
            assert_ne!(laser.waveform, Waveform::Noise);

            let pickup = PresetKind::Pickup.generate(seed);
            assert!(pickup.start_frequency >= 0.4);
            assert_eq!(pickup.attack_time, 0.0);
        }
    }

    #[test]
    fn test_parse_names_and_aliases() {
        for kind in PresetKind::ALL {
            assert_eq!(kind.name().parse::<PresetKind>().unwrap(), kind);
        }
        assert_eq!("coin".parse::<PresetKind>().unwrap(), PresetKind::Pickup);
        assert_eq!("Shoot".parse::<PresetKind>().unwrap(), PresetKind::Laser);
        assert_eq!("hurt".parse::<PresetKind>().unwrap(), PresetKind::Hit);
        assert_eq!("select".parse::<PresetKind>().unwrap(), PresetKind::Blip);

        let err = "thunder".parse::<PresetKind>().unwrap_err();
        assert_eq!(err.code(), "AUDIO_003");
    }

    #[test]
    fn test_mutate_stays_close() {
        let base = PresetKind::Powerup.generate(11);
        let mutated = mutate(&base, 5);

        assert_eq!(mutated, mutate(&base, 5));
        assert_ne!(mutated, base);
        assert_eq!(mutated.waveform, base.waveform);
        assert_eq!(mutated.rand_seed, base.rand_seed);
        assert!(mutated.is_in_range());
        assert!((mutated.start_frequency - base.start_frequency).abs() <= 0.05 + 1e-6);
        assert!((mutated.decay_time - base.decay_time).abs() <= 0.05 + 1e-6);
    }
}
