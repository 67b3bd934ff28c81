use std::io;
use std::path::PathBuf;

use anyhow::Context;
use cacaniquel_core::{Engine, GameConfig};
use clap::{Parser, Subcommand};
use tracing::info;

mod menu;
mod report;

use menu::Menu;

#[derive(Parser)]
#[command(name = "cacaniquel", about = "Console slot machine with player accounts")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// YAML game configuration (bet, starting balance, paytable, seed)
    #[arg(long, global = true, env = "CACANIQUEL_CONFIG")]
    config: Option<PathBuf>,
    /// Seed the reels for a reproducible session
    #[arg(long, global = true, env = "CACANIQUEL_SEED")]
    seed: Option<u64>,
    /// Amount charged per spin, overrides the config file
    #[arg(long, global = true)]
    bet: Option<f64>,
    /// Log filter, e.g. `info` or `cacaniquel_core=debug`. Logs go to stderr.
    #[arg(long, global = true, env = "RUST_LOG", default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Play,
    /// Spin many times for one funded player and report the return to player
    Simulate {
        #[arg(long, default_value_t = 10_000)]
        spins: u64,
        /// Write one CSV row per spin
        #[arg(long)]
        csv: Option<PathBuf>,
        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Sample the fixed-odds legacy prize draw
    Odds {
        #[arg(long, default_value_t = 100_000)]
        draws: u64,
    },
}

fn load_config(cli: &Cli) -> anyhow::Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }
    if let Some(bet) = cli.bet {
        config.bet = bet;
    }
    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_env_filter(cli.log_level.as_str())
        .with_writer(io::stderr)
        .init();

    let config = load_config(&cli)?;

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            info!(bet = config.bet, seeded = config.seed.is_some(), "starting session");
            let mut engine = Engine::new(config)?;
            let stdin = io::stdin();
            Menu::new(&mut engine, stdin.lock(), io::stdout().lock())
                .run()
                .context("console i/o failed")?;
        }
        Commands::Simulate { spins, csv, json } => {
            let summary = report::simulate(config, spins, csv.as_deref())?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("spins:        {}", summary.spins);
                println!("total bet:    ${:.2}", summary.total_bet);
                println!("total payout: ${:.2}", summary.total_payout);
                println!("rtp:          {:.4}", summary.rtp);
                for t in &summary.tiers {
                    println!("{:<13} {}", t.tier, t.hits);
                }
            }
            if let Some(path) = csv {
                println!("Exported {} rows to {}", summary.spins, path.display());
            }
        }
        Commands::Odds { draws } => {
            println!("{:<13} {:>9} {:>9}", "tier", "expected", "observed");
            for row in report::odds(draws, config.seed) {
                println!(
                    "{:<13} {:>8.2}% {:>8.2}%",
                    row.tier, row.expected_percent, row.observed_percent
                );
            }
        }
    }

    Ok(())
}
