use std::collections::BTreeMap;
use std::path::Path;

use anyhow::Context;
use cacaniquel_core::{expected_percent, Engine, GameConfig, LegacyPrizeDraw, PrizeTier};
use cacaniquel_shared::{OddsRow, SimulationSummary, SpinRecord, TierCount};
use chrono::Utc;
use tracing::info;

const SIM_PLAYER: &str = "simulator";

/// Plays `spins` rounds for an internal player funded to cover every bet,
/// optionally writing one CSV row per spin.
pub fn simulate(
    config: GameConfig,
    spins: u64,
    csv_path: Option<&Path>,
) -> anyhow::Result<SimulationSummary> {
    let seed = config.seed;
    let bet = config.bet;
    let mut engine = Engine::new(config)?;
    engine.create_player(SIM_PLAYER, SIM_PLAYER)?;
    engine.login(SIM_PLAYER, SIM_PLAYER)?;
    if spins > 0 {
        engine.deposit(bet * spins as f64)?;
    }

    let mut writer = match csv_path {
        Some(path) => Some(
            csv::Writer::from_path(path)
                .with_context(|| format!("creating {}", path.display()))?,
        ),
        None => None,
    };

    let mut hits: BTreeMap<PrizeTier, u64> = BTreeMap::new();
    let mut total_bet = 0.0;
    let mut total_payout = 0.0;
    for n in 1..=spins {
        let outcome = engine.spin()?;
        total_bet += outcome.bet;
        total_payout += outcome.payout;
        *hits.entry(outcome.evaluation.tier).or_default() += 1;

        if let Some(wtr) = writer.as_mut() {
            wtr.serialize(SpinRecord {
                spin: n,
                ts: Utc::now(),
                reels: SpinRecord::encode_reels(&outcome.grid.to_indices()),
                tier: outcome.evaluation.tier.to_string(),
                line: outcome
                    .evaluation
                    .line
                    .map(|l| l.to_string())
                    .unwrap_or_default(),
                bet: outcome.bet,
                payout: outcome.payout,
                balance: outcome.balance,
            })?;
        }
    }
    if let Some(mut wtr) = writer {
        wtr.flush()?;
    }

    let rtp = if total_bet > 0.0 {
        total_payout / total_bet
    } else {
        0.0
    };
    info!(spins, rtp, "simulation finished");

    Ok(SimulationSummary {
        spins,
        seed,
        total_bet,
        total_payout,
        rtp,
        tiers: PrizeTier::ALL
            .iter()
            .map(|tier| TierCount {
                tier: tier.to_string(),
                hits: hits.get(tier).copied().unwrap_or(0),
            })
            .collect(),
    })
}

/// Samples the fixed-odds legacy draw and compares against its table.
pub fn odds(draws: u64, seed: Option<u64>) -> Vec<OddsRow> {
    let mut draw = match seed {
        Some(seed) => LegacyPrizeDraw::seeded(seed),
        None => LegacyPrizeDraw::from_entropy(),
    };
    let mut hits: BTreeMap<PrizeTier, u64> = BTreeMap::new();
    for _ in 0..draws {
        *hits.entry(draw.generate()).or_default() += 1;
    }
    PrizeTier::ALL
        .iter()
        .map(|tier| {
            let observed = hits.get(tier).copied().unwrap_or(0);
            OddsRow {
                tier: tier.to_string(),
                expected_percent: expected_percent(*tier) as f64,
                observed_percent: if draws == 0 {
                    0.0
                } else {
                    observed as f64 * 100.0 / draws as f64
                },
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded(seed: u64) -> GameConfig {
        GameConfig {
            seed: Some(seed),
            ..GameConfig::default()
        }
    }

    #[test]
    fn simulation_is_reproducible() {
        let a = simulate(seeded(3), 300, None).unwrap();
        let b = simulate(seeded(3), 300, None).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.total_bet, 300.0);
        assert_eq!(a.tiers.iter().map(|t| t.hits).sum::<u64>(), 300);
        assert_eq!(a.seed, Some(3));
    }

    #[test]
    fn csv_has_one_row_per_spin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("spins.csv");
        let summary = simulate(seeded(21), 50, Some(&path)).unwrap();

        let mut rdr = csv::Reader::from_path(&path).unwrap();
        let rows: Vec<SpinRecord> = rdr.deserialize().collect::<Result<_, _>>().unwrap();
        assert_eq!(rows.len(), 50);
        assert_eq!(rows[0].spin, 1);
        assert_eq!(rows[49].spin, 50);
        let paid: f64 = rows.iter().map(|r| r.payout).sum();
        assert_eq!(paid, summary.total_payout);
        for row in &rows {
            assert_eq!(row.reels.split('/').count(), 3);
            assert_eq!(row.line.is_empty(), row.payout == 0.0);
        }
    }

    #[test]
    fn zero_spins_is_empty_summary() {
        let summary = simulate(seeded(1), 0, None).unwrap();
        assert_eq!(summary.rtp, 0.0);
        assert_eq!(summary.total_payout, 0.0);
    }

    #[test]
    fn odds_track_the_table() {
        let rows = odds(20_000, Some(4));
        assert_eq!(rows.len(), 5);
        let total: f64 = rows.iter().map(|r| r.observed_percent).sum();
        assert!((total - 100.0).abs() < 1e-6);
        for row in rows {
            assert!(
                (row.observed_percent - row.expected_percent).abs() < 2.0,
                "{row:?}"
            );
        }
    }
}
