//! Fixed-odds prize draw kept from the earliest version of the machine.
//!
//! The draw ignores the reels entirely and is never used to settle a spin;
//! spins are paid from [`crate::grid::evaluate`]. It stays available for the
//! `odds` report.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::symbols::PrizeTier;

/// Upper bound (exclusive) of each tier's slice of a roll in `0..100`.
const CUMULATIVE_ODDS: [(u32, PrizeTier); 4] = [
    (1, PrizeTier::Jackpot),
    (5, PrizeTier::Grand),
    (15, PrizeTier::Medium),
    (40, PrizeTier::Small),
];

pub const ROLL_RANGE: u32 = 100;

pub fn tier_for_roll(roll: u32) -> PrizeTier {
    CUMULATIVE_ODDS
        .iter()
        .find(|(bound, _)| roll < *bound)
        .map(|(_, tier)| *tier)
        .unwrap_or(PrizeTier::None)
}

/// Expected probability of each tier, in percent.
pub fn expected_percent(tier: PrizeTier) -> u32 {
    let mut lower = 0;
    for (bound, t) in CUMULATIVE_ODDS {
        if t == tier {
            return bound - lower;
        }
        lower = bound;
    }
    ROLL_RANGE - lower
}

pub struct LegacyPrizeDraw {
    rng: ChaCha20Rng,
}

impl LegacyPrizeDraw {
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    pub fn generate(&mut self) -> PrizeTier {
        tier_for_roll(self.rng.gen_range(0..ROLL_RANGE))
    }
}
