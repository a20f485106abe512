//! Shuffle selection
//!
//! Shuffle picks the next track uniformly among every catalog track except the
//! current one. The random source is injectable so tests can fix the sequence.

use melody_core::{Catalog, TrackId};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};

/// Source of uniform random indices
pub trait RandomSource: Send {
    /// Uniform index in `0..len`
    ///
    /// Callers never pass `len == 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Thread-local RNG, non-deterministic
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn pick(&mut self, len: usize) -> usize {
        thread_rng().gen_range(0..len)
    }
}

/// Seeded RNG for reproducible shuffles
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

/// Pick the shuffled successor of `current`
///
/// With a single-track catalog there is nothing to exclude against, so the
/// current track is returned again.
pub fn pick_shuffled_next(
    catalog: &Catalog,
    current: TrackId,
    random: &mut dyn RandomSource,
) -> TrackId {
    let candidates = catalog.ids_except(current);
    if candidates.is_empty() {
        return current;
    }

    let index = random.pick(candidates.len()) % candidates.len();
    candidates[index]
}
