use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::{
    config::GameConfig,
    error::{GameError, GameResult},
    grid::{evaluate, Evaluation, Grid},
    player::{LedgerEntry, Player},
    rng::ReelSet,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SpinOutcome {
    pub grid: Grid,
    pub evaluation: Evaluation,
    pub bet: f64,
    pub payout: f64,
    /// Player balance after the bet and any prize.
    pub balance: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState<'a> {
    LoggedOut,
    LoggedIn(&'a str),
}

/// A game session: the registered players, the reels, and at most one
/// logged-in player.
pub struct Engine {
    config: GameConfig,
    players: Vec<Player>,
    reels: ReelSet,
    // name of the logged-in player; always refers to an entry of `players`
    current: Option<String>,
}

impl Engine {
    pub fn new(config: GameConfig) -> GameResult<Self> {
        config.validate()?;
        let reels = match config.seed {
            Some(seed) => ReelSet::seeded(seed),
            None => ReelSet::from_entropy(),
        };
        Ok(Self {
            config,
            players: Vec::new(),
            reels,
            current: None,
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Names are matched after trimming, the same way they are stored.
    pub fn find_player(&self, name: &str) -> Option<&Player> {
        let name = name.trim();
        self.players.iter().find(|p| p.name() == name)
    }

    pub fn create_player(&mut self, name: &str, secret: &str) -> GameResult<&Player> {
        let name = name.trim();
        if name.is_empty() {
            return Err(GameError::EmptyName);
        }
        if self.find_player(name).is_some() {
            warn!(name, "duplicate player rejected");
            return Err(GameError::DuplicatePlayer(name.to_string()));
        }
        let mut player = Player::new(name, secret);
        if self.config.starting_balance > 0.0 {
            player.deposit(self.config.starting_balance)?;
        }
        info!(name, "player created");
        self.players.push(player);
        Ok(&self.players[self.players.len() - 1])
    }

    /// Removes a player, ending the session if it belonged to them.
    pub fn remove_player(&mut self, name: &str) -> GameResult<Player> {
        let name = name.trim();
        let idx = self
            .players
            .iter()
            .position(|p| p.name() == name)
            .ok_or_else(|| GameError::PlayerNotFound(name.to_string()))?;
        if self.current.as_deref() == Some(name) {
            info!(name, "removed player was logged in; session closed");
            self.current = None;
        }
        info!(name, "player removed");
        Ok(self.players.remove(idx))
    }

    pub fn login(&mut self, name: &str, secret: &str) -> GameResult<&Player> {
        let name = name.trim();
        let idx = self
            .players
            .iter()
            .position(|p| p.name() == name && p.verify_credential(secret));
        match idx {
            Some(idx) => {
                info!(name, "logged in");
                self.current = Some(name.to_string());
                Ok(&self.players[idx])
            }
            None => {
                warn!(name, "login failed");
                Err(GameError::AuthenticationFailed)
            }
        }
    }

    /// Returns the name of the player that was logged in, if any.
    pub fn logout(&mut self) -> Option<String> {
        let previous = self.current.take();
        if let Some(name) = &previous {
            info!(name = name.as_str(), "logged out");
        }
        previous
    }

    pub fn state(&self) -> SessionState<'_> {
        match &self.current {
            Some(name) => SessionState::LoggedIn(name),
            None => SessionState::LoggedOut,
        }
    }

    pub fn current_player(&self) -> GameResult<&Player> {
        let name = self.current.as_deref().ok_or(GameError::NotAuthenticated)?;
        self.find_player(name).ok_or(GameError::NotAuthenticated)
    }

    fn current_player_mut(&mut self) -> GameResult<&mut Player> {
        let name = self.current.as_deref().ok_or(GameError::NotAuthenticated)?;
        self.players
            .iter_mut()
            .find(|p| p.name() == name)
            .ok_or(GameError::NotAuthenticated)
    }

    pub fn balance(&self) -> GameResult<f64> {
        Ok(self.current_player()?.balance())
    }

    pub fn history(&self) -> GameResult<&[LedgerEntry]> {
        Ok(self.current_player()?.history())
    }

    /// Returns the new balance.
    pub fn deposit(&mut self, amount: f64) -> GameResult<f64> {
        let player = self.current_player_mut()?;
        player.deposit(amount)?;
        debug!(name = player.name(), amount, "deposit");
        Ok(player.balance())
    }

    /// Returns the new balance.
    pub fn withdraw(&mut self, amount: f64) -> GameResult<f64> {
        let player = self.current_player_mut()?;
        player.withdraw(amount)?;
        debug!(name = player.name(), amount, "withdrawal");
        Ok(player.balance())
    }

    /// Charges the bet, draws a fresh grid and credits the prize of the first
    /// paying line.
    ///
    /// Affordability is checked before anything is drawn: a player who cannot
    /// cover the bet gets `InsufficientFunds` and the session is unchanged.
    pub fn spin(&mut self) -> GameResult<SpinOutcome> {
        let bet = self.config.bet;
        let paytable = self.config.paytable;

        let player = self.current_player()?;
        if !player.can_afford(bet) {
            warn!(name = player.name(), balance = player.balance(), bet, "spin rejected");
            return Err(GameError::InsufficientFunds {
                balance: player.balance(),
                requested: bet,
            });
        }

        let grid = self.reels.draw_grid();
        debug!(grid = ?grid.to_indices(), "reels drawn");
        let evaluation = evaluate(&grid);
        let payout = paytable.payout(evaluation.tier);

        let player = self.current_player_mut()?;
        player.place_bet(bet)?;
        if evaluation.tier.is_win() {
            player.credit_prize(payout)?;
            info!(name = player.name(), tier = %evaluation.tier, payout, "winning spin");
        }

        Ok(SpinOutcome {
            grid,
            evaluation,
            bet,
            payout,
            balance: player.balance(),
        })
    }
}
