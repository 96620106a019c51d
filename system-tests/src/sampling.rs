// system-tests/src/sampling.rs
// ============================================================================
// Module: Seeded Sampling
// Description: Reproducible uniform draws from fixture lists.
// Purpose: Make randomized breed selection replayable from a recorded seed.
// Dependencies: rand
// ============================================================================

//! ## Overview
//! Sampled tests pick breeds from lists fetched at runtime. Each draw owns an
//! RNG seeded from the session seed plus the draw index, so draws are
//! independent samples (repeats across draws are possible) and a run can be
//! replayed by exporting the seed recorded in its summary.

// ============================================================================
// SECTION: Imports
// ============================================================================

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

// ============================================================================
// SECTION: Sampler
// ============================================================================

/// Uniform sampler keyed by a session seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sampler {
    /// Session seed.
    seed: u64,
}

impl Sampler {
    /// Creates a sampler from an explicit seed.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self {
            seed,
        }
    }

    /// Creates a sampler from `seed`, or from a fresh random seed when `None`.
    #[must_use]
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        Self::new(seed.unwrap_or_else(rand::random))
    }

    /// Returns the session seed.
    #[must_use]
    pub const fn seed(self) -> u64 {
        self.seed
    }

    /// Returns the seed used for draw `draw`.
    #[must_use]
    pub fn draw_seed(self, draw: u32) -> u64 {
        self.seed.wrapping_add(u64::from(draw))
    }

    /// Picks one item uniformly at random for draw `draw`.
    ///
    /// Returns `None` only when `items` is empty.
    #[must_use]
    pub fn choose<T>(self, draw: u32, items: &[T]) -> Option<&T> {
        let mut rng = StdRng::seed_from_u64(self.draw_seed(draw));
        items.choose(&mut rng)
    }
}
