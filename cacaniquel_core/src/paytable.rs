use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};
use crate::symbols::PrizeTier;

/// Fixed payout per tier, credited in currency units (not a bet multiplier).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Paytable {
    pub jackpot: f64,
    pub grand: f64,
    pub medium: f64,
    pub small: f64,
}

impl Default for Paytable {
    fn default() -> Self {
        Self {
            jackpot: PrizeTier::Jackpot.default_payout(),
            grand: PrizeTier::Grand.default_payout(),
            medium: PrizeTier::Medium.default_payout(),
            small: PrizeTier::Small.default_payout(),
        }
    }
}

impl Paytable {
    pub fn payout(&self, tier: PrizeTier) -> f64 {
        match tier {
            PrizeTier::Jackpot => self.jackpot,
            PrizeTier::Grand => self.grand,
            PrizeTier::Medium => self.medium,
            PrizeTier::Small => self.small,
            PrizeTier::None => 0.0,
        }
    }

    pub fn validate(&self) -> GameResult<()> {
        for tier in PrizeTier::ALL {
            let payout = self.payout(tier);
            if !payout.is_finite() || payout < 0.0 {
                return Err(GameError::InvalidConfig(format!(
                    "payout for {tier} must be a non-negative number, got {payout}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_tier_payouts() {
        let table = Paytable::default();
        for tier in PrizeTier::ALL {
            assert_eq!(table.payout(tier), tier.default_payout());
        }
        assert!(table.validate().is_ok());
    }

    #[test]
    fn negative_payout_rejected() {
        let table = Paytable {
            grand: -5.0,
            ..Paytable::default()
        };
        assert!(matches!(table.validate(), Err(GameError::InvalidConfig(_))));
        let table = Paytable {
            small: f64::NAN,
            ..Paytable::default()
        };
        assert!(table.validate().is_err());
    }
}
