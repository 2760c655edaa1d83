use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub trait CoinFlipper: Send + Sync {
    // true means the tower grows one more level
    fn flip(&mut self) -> bool;
}

/// Fair coin backed by a generator that is seeded exactly once, when the flipper is built.
pub struct CoinFlipperRand {
    rng: StdRng,
}

impl CoinFlipperRand {
    pub fn new() -> CoinFlipperRand {
        return CoinFlipperRand { rng: StdRng::from_entropy() };
    }

    pub fn seeded(seed: u64) -> CoinFlipperRand {
        return CoinFlipperRand { rng: StdRng::seed_from_u64(seed) };
    }
}

impl CoinFlipper for CoinFlipperRand {
    fn flip(&mut self) -> bool {
        return self.rng.gen_bool(0.5);
    }
}

/// Replays fixed outcomes, then always stops. Makes the shape of a list predictable.
pub struct CoinFlipperScripted {
    outcomes: VecDeque<bool>,
}

impl CoinFlipperScripted {
    pub fn new(outcomes: impl IntoIterator<Item = bool>) -> CoinFlipperScripted {
        return CoinFlipperScripted { outcomes: outcomes.into_iter().collect() };
    }

    // each entry is the tower level count of one insert
    pub fn from_levels(levels: &[usize]) -> CoinFlipperScripted {
        let mut outcomes = Vec::new();
        for &level in levels {
            outcomes.extend(std::iter::repeat(true).take(level));
            outcomes.push(false);
        }
        return CoinFlipperScripted::new(outcomes);
    }
}

impl CoinFlipper for CoinFlipperScripted {
    fn flip(&mut self) -> bool {
        return self.outcomes.pop_front().unwrap_or(false);
    }
}
