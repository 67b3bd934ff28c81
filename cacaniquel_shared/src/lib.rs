use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One exported spin. Flat so it fits a CSV row.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SpinRecord {
    pub spin: u64,
    pub ts: DateTime<Utc>,
    /// Symbol indices, rows separated by `/`, e.g. `0-1-2/3-4-0/1-1-1`.
    pub reels: String,
    pub tier: String,
    /// Empty when nothing paid.
    pub line: String,
    pub bet: f64,
    pub payout: f64,
    pub balance: f64,
}

impl SpinRecord {
    pub fn encode_reels(reels: &[Vec<u8>]) -> String {
        reels
            .iter()
            .map(|row| {
                row.iter()
                    .map(|s| s.to_string())
                    .collect::<Vec<_>>()
                    .join("-")
            })
            .collect::<Vec<_>>()
            .join("/")
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct TierCount {
    pub tier: String,
    pub hits: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SimulationSummary {
    pub spins: u64,
    pub seed: Option<u64>,
    pub total_bet: f64,
    pub total_payout: f64,
    /// Return to player: total payout over total bet.
    pub rtp: f64,
    pub tiers: Vec<TierCount>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OddsRow {
    pub tier: String,
    pub expected_percent: f64,
    pub observed_percent: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reels_encode_row_by_row() {
        let reels = vec![vec![0, 1, 2], vec![3, 4, 0], vec![1, 1, 1]];
        assert_eq!(SpinRecord::encode_reels(&reels), "0-1-2/3-4-0/1-1-1");
    }

    #[test]
    fn summary_serializes_with_null_seed() {
        let summary = SimulationSummary {
            spins: 2,
            seed: None,
            total_bet: 2.0,
            total_payout: 10.0,
            rtp: 5.0,
            tiers: vec![TierCount {
                tier: "SMALL PRIZE".into(),
                hits: 1,
            }],
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert!(json["seed"].is_null());
        assert_eq!(json["tiers"][0]["hits"], 1);
    }
}
