//! Randomness used by horse generation and scheduling
//!
//! The engine consumes randomness through the [`Randomness`] trait so that
//! tests can substitute scripted values. [`RaceRng`] is the production
//! implementation, backed by `rand`'s `StdRng`.

use crate::names;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const HEX_DIGITS: &[u8; 16] = b"0123456789ABCDEF";

/// Source of the random values the race engine depends on
pub trait Randomness {
    /// Uniform value in `[0, 1)`
    fn unit(&mut self) -> f64;

    /// Random `#RRGGBB` color with uppercase hex digits
    fn color(&mut self) -> String;

    /// Random horse name; uniqueness is not guaranteed
    fn name(&mut self) -> String;

    /// Uniformly random subset of `pool` of size `min(k, pool.len())`,
    /// drawn without replacement
    fn subset<T: Clone>(&mut self, pool: &[T], k: usize) -> Vec<T>;
}

/// Default randomness source
///
/// ```
/// use gallop_core::{RaceRng, Randomness};
///
/// let mut rng = RaceRng::new(42);
/// let picked = rng.subset(&[1, 2, 3, 4, 5], 3);
/// assert_eq!(picked.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct RaceRng {
    rng: StdRng,
}

impl RaceRng {
    /// Create a seeded RNG
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded when a seed is given, entropy otherwise
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Default for RaceRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl Randomness for RaceRng {
    fn unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    fn color(&mut self) -> String {
        let mut color = String::with_capacity(7);
        color.push('#');
        for _ in 0..6 {
            color.push(HEX_DIGITS[self.rng.gen_range(0..HEX_DIGITS.len())] as char);
        }
        color
    }

    fn name(&mut self) -> String {
        names::random_name(&mut self.rng)
    }

    fn subset<T: Clone>(&mut self, pool: &[T], k: usize) -> Vec<T> {
        let mut candidates = pool.to_vec();
        // partial_shuffle clamps k to the pool length
        let (chosen, _) = candidates.partial_shuffle(&mut self.rng, k);
        chosen.to_vec()
    }
}
