use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::paytable::Paytable;

pub const DEFAULT_BET: f64 = 1.0;

/// Tunables for a game session. Every field has a default, so a config file
/// only needs to name what it changes.
///
/// ```yaml
/// bet: 2.0
/// starting_balance: 10.0
/// seed: 1234
/// paytable:
///   jackpot: 250.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    /// Charged once per spin.
    pub bet: f64,
    /// Credited to every new player as an initial deposit.
    pub starting_balance: f64,
    pub paytable: Paytable,
    /// Seeds the reels; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            bet: DEFAULT_BET,
            starting_balance: 0.0,
            paytable: Paytable::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn from_yaml_str(yaml: &str) -> GameResult<Self> {
        let config: GameConfig =
            serde_yaml::from_str(yaml).map_err(|e| GameError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> GameResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            GameError::InvalidConfig(format!("could not read {}: {e}", path.display()))
        })?;
        Self::from_yaml_str(&raw)
    }

    pub fn validate(&self) -> GameResult<()> {
        // balances are kept in cents
        if !self.bet.is_finite() || (self.bet * 100.0).round() < 1.0 {
            return Err(GameError::InvalidConfig(format!(
                "bet must be at least 0.01, got {}",
                self.bet
            )));
        }
        if !self.starting_balance.is_finite() || self.starting_balance < 0.0 {
            return Err(GameError::InvalidConfig(format!(
                "starting_balance must be non-negative, got {}",
                self.starting_balance
            )));
        }
        self.paytable.validate()
    }
}
