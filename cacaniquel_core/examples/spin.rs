use cacaniquel_core::{Engine, GameConfig};

fn main() -> Result<(), cacaniquel_core::GameError> {
    // Example end-to-end session
    let config = GameConfig {
        seed: Some(2024),
        ..GameConfig::default()
    };
    let mut engine = Engine::new(config)?;
    engine.create_player("demo", "demo")?;
    engine.login("demo", "demo")?;
    engine.deposit(5.0)?;
    let outcome = engine.spin()?;
    print!("{}", outcome.grid);
    println!(
        "tier={} line={:?} payout={} balance={}",
        outcome.evaluation.tier, outcome.evaluation.line, outcome.payout, outcome.balance
    );
    Ok(())
}
