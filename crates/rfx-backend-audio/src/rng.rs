//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! All randomness in the audio backend flows through this module: the noise
//! buffer of a single generation call, and the preset producers.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The 32-bit seed is expanded to 64 bits by duplicating the value in both
/// halves, as required by PCG32's state initialization.
pub fn create_rng(seed: u32) -> Pcg32 {
    // Expand 32-bit seed to 64-bit for PCG32 state
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives a seed for a named component from a base seed.
///
/// Uses BLAKE3 to hash the base seed concatenated with the key, so that, for
/// example, a laser and an explosion drawn with the same seed are unrelated.
pub fn derive_component_seed(base_seed: u32, key: &str) -> u32 {
    let mut input = Vec::with_capacity(4 + key.len());
    input.extend_from_slice(&base_seed.to_le_bytes());
    input.extend_from_slice(key.as_bytes());

    let hash = blake3::hash(&input);
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Creates an RNG for a named component.
pub fn create_component_rng(base_seed: u32, key: &str) -> Pcg32 {
    create_rng(derive_component_seed(base_seed, key))
}

/// Uniform value in `[0, range)`.
pub fn frnd(rng: &mut Pcg32, range: f32) -> f32 {
    rng.gen::<f32>() * range
}

/// Uniform value in `[-1, 1]`.
pub fn signed_unit(rng: &mut Pcg32) -> f32 {
    rng.gen_range(-1.0f32..=1.0)
}

/// Uniform integer in `0..=max`.
pub fn rnd(rng: &mut Pcg32, max: u32) -> u32 {
    rng.gen_range(0..=max)
}

/// Fair coin.
pub fn coin(rng: &mut Pcg32) -> bool {
    rnd(rng, 1) == 1
}
