use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of randomness for layout generation.
///
/// `Fixed` returns the same unit draw every time and makes generation fully predictable,
/// which is what the tests rely on.
#[derive(Debug, Clone)]
pub enum RandomType {
    Uniform(StdRng),
    Fixed(f64),
}

impl RandomType {
    pub fn seeded(seed: u64) -> Self {
        RandomType::Uniform(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        RandomType::Uniform(StdRng::from_entropy())
    }

    /// A draw from `[0, 1)`.
    pub fn random(&mut self) -> f64 {
        match self {
            RandomType::Uniform(rng) => rng.gen::<f64>(),
            RandomType::Fixed(value) => *value,
        }
    }

    /// An integer draw from `lo..=hi`. Returns `lo` when the range is empty.
    pub fn int_in_range(&mut self, lo: i64, hi: i64) -> i64 {
        if hi <= lo {
            return lo;
        }
        match self {
            RandomType::Uniform(rng) => rng.gen_range(lo..=hi),
            RandomType::Fixed(value) => {
                let span = (hi - lo + 1) as f64;
                (lo + (*value * span).floor() as i64).clamp(lo, hi)
            }
        }
    }
}
