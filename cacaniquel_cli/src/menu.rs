use std::io::{self, BufRead, Write};

use cacaniquel_core::{Engine, GameError, SessionState, SpinOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    CreatePlayer,
    RemovePlayer,
    FindPlayer,
    ListPlayers,
    Login,
    Logout,
    Spin,
    Balance,
    Deposit,
    Exit,
    Withdraw,
    History,
}

impl MenuItem {
    const ALL: [MenuItem; 12] = [
        MenuItem::CreatePlayer,
        MenuItem::RemovePlayer,
        MenuItem::FindPlayer,
        MenuItem::ListPlayers,
        MenuItem::Login,
        MenuItem::Logout,
        MenuItem::Spin,
        MenuItem::Balance,
        MenuItem::Deposit,
        MenuItem::Exit,
        MenuItem::Withdraw,
        MenuItem::History,
    ];

    fn from_choice(choice: &str) -> Option<Self> {
        let n: usize = choice.trim().parse().ok()?;
        Self::ALL.get(n.checked_sub(1)?).copied()
    }

    fn label(self) -> &'static str {
        match self {
            MenuItem::CreatePlayer => "Create player",
            MenuItem::RemovePlayer => "Remove player",
            MenuItem::FindPlayer => "Find player",
            MenuItem::ListPlayers => "List players",
            MenuItem::Login => "Log in",
            MenuItem::Logout => "Log out",
            MenuItem::Spin => "Spin",
            MenuItem::Balance => "View balance",
            MenuItem::Deposit => "Deposit",
            MenuItem::Exit => "Exit",
            MenuItem::Withdraw => "Withdraw",
            MenuItem::History => "View history",
        }
    }
}

/// Interactive text menu over an [`Engine`]. Reads from any `BufRead` and
/// writes to any `Write`; end of input behaves like choosing Exit.
pub struct Menu<'a, R, W> {
    engine: &'a mut Engine,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(engine: &'a mut Engine, input: R, out: W) -> Self {
        Self { engine, input, out }
    }

    pub fn run(mut self) -> io::Result<()> {
        loop {
            self.print_menu()?;
            let Some(line) = self.prompt("Choose an option: ")? else {
                writeln!(self.out)?;
                writeln!(self.out, "Thanks for playing!")?;
                return Ok(());
            };
            let Some(item) = MenuItem::from_choice(&line) else {
                writeln!(self.out, "Invalid option. Try again.")?;
                continue;
            };
            if item == MenuItem::Exit {
                writeln!(self.out, "Thanks for playing!")?;
                return Ok(());
            }
            if !self.dispatch(item)? {
                // input ran out mid-operation
                writeln!(self.out)?;
                writeln!(self.out, "Thanks for playing!")?;
                return Ok(());
            }
        }
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "--- MENU ---")?;
        for (i, item) in MenuItem::ALL.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, item.label())?;
        }
        Ok(())
    }

    /// Returns `false` when input ended before the operation could finish.
    fn dispatch(&mut self, item: MenuItem) -> io::Result<bool> {
        match item {
            MenuItem::CreatePlayer => {
                let Some(name) = self.prompt("Player name: ")? else {
                    return Ok(false);
                };
                let Some(secret) = self.prompt("Password: ")? else {
                    return Ok(false);
                };
                match self.engine.create_player(&name, &secret) {
                    Ok(player) => writeln!(self.out, "Player created: {}", player.name())?,
                    Err(e) => self.report(e)?,
                }
            }
            MenuItem::RemovePlayer => {
                let Some(name) = self.prompt("Name of the player to remove: ")? else {
                    return Ok(false);
                };
                let was_current = self.engine.state() == SessionState::LoggedIn(name.trim());
                match self.engine.remove_player(&name) {
                    Ok(player) => {
                        writeln!(self.out, "Player removed: {}", player.name())?;
                        if was_current {
                            writeln!(self.out, "You have been logged out.")?;
                        }
                    }
                    Err(e) => self.report(e)?,
                }
            }
            MenuItem::FindPlayer => {
                let Some(name) = self.prompt("Name of the player to find: ")? else {
                    return Ok(false);
                };
                match self.engine.find_player(&name) {
                    Some(player) => writeln!(self.out, "Player found: {}", player.name())?,
                    None => writeln!(self.out, "Player not found.")?,
                }
            }
            MenuItem::ListPlayers => {
                writeln!(self.out, "Players:")?;
                if self.engine.players().is_empty() {
                    writeln!(self.out, "(none)")?;
                }
                for player in self.engine.players() {
                    writeln!(self.out, "{}", player.name())?;
                }
            }
            MenuItem::Login => {
                let Some(name) = self.prompt("User name: ")? else {
                    return Ok(false);
                };
                let Some(secret) = self.prompt("Password: ")? else {
                    return Ok(false);
                };
                match self.engine.login(&name, &secret) {
                    Ok(player) => writeln!(self.out, "Logged in as {}", player.name())?,
                    Err(e) => self.report(e)?,
                }
            }
            MenuItem::Logout => {
                self.engine.logout();
                writeln!(self.out, "Logged out.")?;
            }
            MenuItem::Spin => match self.engine.spin() {
                Ok(outcome) => self.print_spin(&outcome)?,
                Err(e) => self.report(e)?,
            },
            MenuItem::Balance => match self.engine.balance() {
                Ok(balance) => writeln!(self.out, "Balance: ${balance:.2}")?,
                Err(e) => self.report(e)?,
            },
            MenuItem::Deposit | MenuItem::Withdraw => {
                if let Err(e) = self.engine.current_player() {
                    self.report(e)?;
                    return Ok(true);
                }
                let label = if item == MenuItem::Deposit {
                    "Amount to deposit: $"
                } else {
                    "Amount to withdraw: $"
                };
                let Some(amount) = self.prompt_amount(label)? else {
                    return Ok(false);
                };
                let result = if item == MenuItem::Deposit {
                    self.engine.deposit(amount)
                } else {
                    self.engine.withdraw(amount)
                };
                match result {
                    Ok(balance) => writeln!(self.out, "Done. Balance: ${balance:.2}")?,
                    Err(e) => self.report(e)?,
                }
            }
            MenuItem::History => match self.engine.current_player() {
                Ok(player) => {
                    writeln!(self.out, "History for {}:", player.name())?;
                    if player.history().is_empty() {
                        writeln!(self.out, "(empty)")?;
                    }
                    for entry in player.history() {
                        writeln!(self.out, "{entry}")?;
                    }
                }
                Err(e) => self.report(e)?,
            },
            MenuItem::Exit => unreachable!("exit is handled by the loop"),
        }
        Ok(true)
    }

    fn print_spin(&mut self, outcome: &SpinOutcome) -> io::Result<()> {
        writeln!(self.out, "Bet: ${:.2}", outcome.bet)?;
        writeln!(self.out, "Spin result:")?;
        write!(self.out, "{}", outcome.grid)?;
        match outcome.evaluation.line {
            Some(line) if outcome.evaluation.tier.is_win() => writeln!(
                self.out,
                "Congratulations! You won the {} on {line}: +${:.2}",
                outcome.evaluation.tier, outcome.payout
            )?,
            _ => writeln!(self.out, "No prize this time.")?,
        }
        writeln!(self.out, "Balance: ${:.2}", outcome.balance)
    }

    fn report(&mut self, err: GameError) -> io::Result<()> {
        writeln!(self.out, "Error: {err}")
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim_end_matches(|c: char| c == '\n' || c == '\r').to_string()))
    }

    /// Re-prompts until a number is entered.
    fn prompt_amount(&mut self, label: &str) -> io::Result<Option<f64>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match line.trim().parse::<f64>() {
                Ok(amount) => return Ok(Some(amount)),
                Err(_) => writeln!(self.out, "Please enter a number.")?,
            }
        }
    }
}
