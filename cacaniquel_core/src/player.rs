use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{GameError, GameResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum LedgerKind {
    Deposit,
    Withdrawal,
    Bet,
    Prize,
}

/// One line of a player's history. Entries are only ever appended.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LedgerEntry {
    pub at: DateTime<Utc>,
    pub kind: LedgerKind,
    pub amount: f64,
}

impl fmt::Display for LedgerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.kind {
            LedgerKind::Deposit => "Deposit",
            LedgerKind::Withdrawal => "Withdrawal",
            LedgerKind::Bet => "Bet",
            LedgerKind::Prize => "Prize",
        };
        write!(
            f,
            "{} {} of ${:.2}",
            self.at.format("%Y-%m-%d %H:%M:%S"),
            label,
            self.amount
        )
    }
}

/// Balances are kept in whole cents; amounts are rounded to the nearest cent
/// on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    name: String,
    credential: String,
    balance_cents: i64,
    history: Vec<LedgerEntry>,
}

/// Converts a currency amount to cents. Rejects anything that is not finite
/// or does not fit the balance type.
pub fn to_cents(amount: f64) -> GameResult<i64> {
    let cents = (amount * 100.0).round();
    if cents.is_finite() && cents.abs() < i64::MAX as f64 {
        Ok(cents as i64)
    } else {
        Err(GameError::InvalidAmount(amount))
    }
}

pub fn from_cents(cents: i64) -> f64 {
    cents as f64 / 100.0
}

/// Strictly positive amount in cents.
fn positive_cents(amount: f64) -> GameResult<i64> {
    match to_cents(amount)? {
        cents if cents > 0 => Ok(cents),
        _ => Err(GameError::InvalidAmount(amount)),
    }
}

impl Player {
    pub fn new(name: impl Into<String>, credential: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            credential: credential.into(),
            balance_cents: 0,
            history: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> f64 {
        from_cents(self.balance_cents)
    }

    pub fn balance_cents(&self) -> i64 {
        self.balance_cents
    }

    pub fn history(&self) -> &[LedgerEntry] {
        &self.history
    }

    pub fn verify_credential(&self, secret: &str) -> bool {
        self.credential == secret
    }

    pub fn deposit(&mut self, amount: f64) -> GameResult<()> {
        let cents = positive_cents(amount)?;
        self.credit(LedgerKind::Deposit, amount, cents)
    }

    pub fn withdraw(&mut self, amount: f64) -> GameResult<()> {
        self.debit(LedgerKind::Withdrawal, amount)
    }

    pub fn place_bet(&mut self, amount: f64) -> GameResult<()> {
        self.debit(LedgerKind::Bet, amount)
    }

    pub fn credit_prize(&mut self, amount: f64) -> GameResult<()> {
        let cents = to_cents(amount)?;
        if cents < 0 {
            return Err(GameError::InvalidAmount(amount));
        }
        self.credit(LedgerKind::Prize, amount, cents)
    }

    pub fn can_afford(&self, amount: f64) -> bool {
        to_cents(amount).is_ok_and(|cents| self.balance_cents >= cents)
    }

    // The balance is untouched when the sum would overflow.
    fn credit(&mut self, kind: LedgerKind, amount: f64, cents: i64) -> GameResult<()> {
        self.balance_cents = self
            .balance_cents
            .checked_add(cents)
            .ok_or(GameError::InvalidAmount(amount))?;
        self.record(kind, cents);
        Ok(())
    }

    fn debit(&mut self, kind: LedgerKind, amount: f64) -> GameResult<()> {
        let cents = positive_cents(amount)?;
        if self.balance_cents < cents {
            return Err(GameError::InsufficientFunds {
                balance: self.balance(),
                requested: from_cents(cents),
            });
        }
        self.balance_cents -= cents;
        self.record(kind, cents);
        Ok(())
    }

    fn record(&mut self, kind: LedgerKind, cents: i64) {
        self.history.push(LedgerEntry {
            at: Utc::now(),
            kind,
            amount: from_cents(cents),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn kinds(player: &Player) -> Vec<LedgerKind> {
        player.history().iter().map(|e| e.kind).collect()
    }

    #[test]
    fn deposit_then_withdraw_restores_balance() {
        let mut p = Player::new("ana", "pw");
        p.deposit(30.0).unwrap();
        let before = p.balance();
        p.deposit(50.0).unwrap();
        p.withdraw(50.0).unwrap();
        assert_eq!(p.balance(), before);
        assert_eq!(
            kinds(&p),
            vec![LedgerKind::Deposit, LedgerKind::Deposit, LedgerKind::Withdrawal]
        );
    }

    #[test]
    fn overdraw_leaves_state_untouched() {
        let mut p = Player::new("ana", "pw");
        p.deposit(5.0).unwrap();
        let err = p.withdraw(6.0).unwrap_err();
        assert_eq!(
            err,
            GameError::InsufficientFunds {
                balance: 5.0,
                requested: 6.0
            }
        );
        assert!(matches!(
            p.place_bet(10.0),
            Err(GameError::InsufficientFunds { .. })
        ));
        assert_eq!(p.balance(), 5.0);
        assert_eq!(p.history().len(), 1);
    }

    #[test]
    fn non_positive_amounts_rejected() {
        let mut p = Player::new("ana", "pw");
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(p.deposit(bad), Err(GameError::InvalidAmount(_))));
            assert!(matches!(p.withdraw(bad), Err(GameError::InvalidAmount(_))));
        }
        assert!(p.history().is_empty());
        assert_eq!(p.balance(), 0.0);
    }

    #[test]
    fn credential_is_exact_match() {
        let p = Player::new("ana", "Secret");
        assert!(p.verify_credential("Secret"));
        assert!(!p.verify_credential("secret"));
        assert!(!p.verify_credential("Secret "));
    }

    #[test]
    fn ledger_lines_read_naturally() {
        let mut p = Player::new("ana", "pw");
        p.deposit(50.0).unwrap();
        p.place_bet(1.0).unwrap();
        p.credit_prize(20.0).unwrap();
        let lines: Vec<String> = p.history().iter().map(|e| e.to_string()).collect();
        assert!(lines[0].ends_with("Deposit of $50.00"));
        assert!(lines[1].ends_with("Bet of $1.00"));
        assert!(lines[2].ends_with("Prize of $20.00"));
    }

    #[test]
    fn fractional_bets_settle_to_the_cent() {
        let mut p = Player::new("ana", "pw");
        p.deposit(0.30).unwrap();
        for expected in [20, 10, 0] {
            p.place_bet(0.10).unwrap();
            assert_eq!(p.balance_cents(), expected);
        }
        assert_eq!(p.balance(), 0.0);
        assert!(matches!(
            p.place_bet(0.10),
            Err(GameError::InsufficientFunds { .. })
        ));
    }

    #[test]
    fn sub_cent_amounts_rejected() {
        let mut p = Player::new("ana", "pw");
        assert!(matches!(p.deposit(0.004), Err(GameError::InvalidAmount(_))));
        p.deposit(0.006).unwrap();
        assert_eq!(p.balance_cents(), 1);
    }

    #[test]
    fn huge_deposits_cannot_overflow_the_balance() {
        let mut p = Player::new("ana", "pw");
        assert!(matches!(p.deposit(f64::MAX), Err(GameError::InvalidAmount(_))));
        assert!(matches!(p.deposit(1e308), Err(GameError::InvalidAmount(_))));
        p.deposit(9e16).unwrap();
        let before = p.balance_cents();
        assert!(matches!(p.deposit(9e16), Err(GameError::InvalidAmount(_))));
        assert_eq!(p.balance_cents(), before);
        assert_eq!(p.history().len(), 1);
        // the account still works
        p.withdraw(1.0).unwrap();
        assert_eq!(p.balance_cents(), before - 100);
    }

    proptest! {
        #[test]
        fn bet_within_balance_debits_exactly(
            funds in 1u32..10_000,
            cents in 1u32..10_000,
        ) {
            let cents = i64::from(cents).min(i64::from(funds) * 100);
            let mut p = Player::new("p", "s");
            p.deposit(funds as f64).unwrap();
            p.place_bet(cents as f64 / 100.0).unwrap();
            prop_assert_eq!(p.balance_cents(), i64::from(funds) * 100 - cents);
            prop_assert_eq!(p.history().len(), 2);
            prop_assert_eq!(p.history()[1].kind, LedgerKind::Bet);
        }

        #[test]
        fn bet_above_balance_fails(funds in 0u32..1_000, extra in 1u32..1_000) {
            let mut p = Player::new("p", "s");
            if funds > 0 {
                p.deposit(funds as f64).unwrap();
            }
            let entries = p.history().len();
            let bet = (funds + extra) as f64;
            let is_insufficient = matches!(p.place_bet(bet), Err(GameError::InsufficientFunds { .. }));
            prop_assert!(is_insufficient);
            prop_assert_eq!(p.balance(), funds as f64);
            prop_assert_eq!(p.history().len(), entries);
        }
    }
}
