//! UniformSelector: pseudo-random index source for the map.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Draws positions uniformly over the occupied range of the dense storage.
///
/// Each map owns its own selector; state is never shared across instances.
/// The default constructor seeds from OS entropy, `from_seed_u64` gives a
/// reproducible stream for tests and benchmarks.
#[derive(Debug, Clone)]
pub struct UniformSelector {
    rng: ChaCha8Rng,
}

impl UniformSelector {
    /// Selector seeded from a non-deterministic OS source.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Deterministic selector. Same seed, same draw sequence.
    pub fn from_seed_u64(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Draw a position in `0..len`, uniformly. `None` iff `len == 0`; the
    /// degenerate empty range is never handed to the generator.
    pub fn pick(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.gen_range(0..len))
    }
}

impl Default for UniformSelector {
    fn default() -> Self {
        Self::from_entropy()
    }
}
