use rand::prelude::{SeedableRng, StdRng};

/// A seeded rng when `seed` is provided so searches can be replayed exactly, otherwise one
/// seeded from entropy.
pub fn create_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
