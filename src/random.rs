//! Random source construction.
//!
//! Every stochastic decision in the engine draws from one explicitly passed
//! generator. A fixed seed therefore replays a run exactly.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates the engine's random source from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a random source from `seed`, or from fresh entropy when `None`.
pub fn rng_from_option(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => create_rng(seed),
        None => create_rng(rand::random()),
    }
}
