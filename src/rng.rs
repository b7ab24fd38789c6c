use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Create a deterministic RNG from a seed.
pub fn create_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Seeded RNG when a seed is given, otherwise one seeded from OS entropy.
pub fn rng_from(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => create_rng(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}
