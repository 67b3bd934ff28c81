use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::grid::{Grid, GRID_SIZE};
use crate::symbols::Symbol;

// Each reel owns an independent ChaCha20 stream. Seeded reels make a whole
// session reproducible; entropy-seeded reels are used for normal play.

pub struct Reel {
    rng: ChaCha20Rng,
}

impl Reel {
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

    /// Uniform draw over the five symbols.
    pub fn spin(&mut self) -> Symbol {
        Symbol::ALL[self.rng.gen_range(0..Symbol::ALL.len())]
    }
}

/// The three reels of the machine. Reel `i` fills row `i` of the grid.
pub struct ReelSet {
    reels: [Reel; GRID_SIZE],
}

impl ReelSet {
    pub fn from_entropy() -> Self {
        Self {
            reels: [Reel::from_entropy(), Reel::from_entropy(), Reel::from_entropy()],
        }
    }

    /// Reel `i` is seeded with `seed + i` (wrapping).
    pub fn seeded(seed: u64) -> Self {
        Self {
            reels: [
                Reel::seeded(seed),
                Reel::seeded(seed.wrapping_add(1)),
                Reel::seeded(seed.wrapping_add(2)),
            ],
        }
    }

    pub fn draw_grid(&mut self) -> Grid {
        let mut cells = [[Symbol::Tiger; GRID_SIZE]; GRID_SIZE];
        for (row, reel) in self.reels.iter_mut().enumerate() {
            for cell in cells[row].iter_mut() {
                *cell = reel.spin();
            }
        }
        Grid::new(cells)
    }
}
