pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod paytable;
pub mod player;
pub mod prize;
pub mod rng;
pub mod symbols;

pub use crate::config::{GameConfig, DEFAULT_BET};
pub use crate::engine::{Engine, SessionState, SpinOutcome};
pub use crate::error::{GameError, GameResult};
pub use crate::grid::{evaluate, Evaluation, Grid, WinLine, GRID_SIZE};
pub use crate::paytable::Paytable;
pub use crate::player::{LedgerEntry, LedgerKind, Player};
pub use crate::prize::{expected_percent, tier_for_roll, LegacyPrizeDraw};
pub use crate::rng::{Reel, ReelSet};
pub use crate::symbols::{PrizeTier, Symbol};
