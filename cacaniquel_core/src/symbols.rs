use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Symbol {
    Tiger,
    Fish,
    Algae,
    Shell,
    Starfish,
}

impl Symbol {
    pub const ALL: [Symbol; 5] = [
        Symbol::Tiger,
        Symbol::Fish,
        Symbol::Algae,
        Symbol::Shell,
        Symbol::Starfish,
    ];

    pub fn to_index(self) -> u8 {
        match self {
            Symbol::Tiger => 0,
            Symbol::Fish => 1,
            Symbol::Algae => 2,
            Symbol::Shell => 3,
            Symbol::Starfish => 4,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Symbol::Tiger => "TIGER",
            Symbol::Fish => "FISH",
            Symbol::Algae => "ALGAE",
            Symbol::Shell => "SHELL",
            Symbol::Starfish => "STARFISH",
        };
        // pad so grid columns line up
        f.pad(name)
    }
}

/// Payout level awarded for a matched line.
///
/// Variants are declared from lowest to highest payout so the derived
/// ordering follows payout magnitude.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PrizeTier {
    None,
    Small,
    Medium,
    Grand,
    Jackpot,
}

impl PrizeTier {
    /// Highest tier first.
    pub const ALL: [PrizeTier; 5] = [
        PrizeTier::Jackpot,
        PrizeTier::Grand,
        PrizeTier::Medium,
        PrizeTier::Small,
        PrizeTier::None,
    ];

    pub fn default_payout(self) -> f64 {
        match self {
            PrizeTier::Jackpot => 100.0,
            PrizeTier::Grand => 50.0,
            PrizeTier::Medium => 20.0,
            PrizeTier::Small => 10.0,
            PrizeTier::None => 0.0,
        }
    }

    pub fn is_win(self) -> bool {
        self != PrizeTier::None
    }

    /// Tier paid by a line of three equal symbols.
    ///
    /// Starfish has no tier: three starfish in a line pay nothing.
    pub fn for_line(symbol: Symbol) -> PrizeTier {
        match symbol {
            Symbol::Tiger => PrizeTier::Jackpot,
            Symbol::Fish => PrizeTier::Grand,
            Symbol::Algae => PrizeTier::Medium,
            Symbol::Shell => PrizeTier::Small,
            Symbol::Starfish => PrizeTier::None,
        }
    }
}

impl fmt::Display for PrizeTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PrizeTier::Jackpot => "JACKPOT",
            PrizeTier::Grand => "GRAND PRIZE",
            PrizeTier::Medium => "MEDIUM PRIZE",
            PrizeTier::Small => "SMALL PRIZE",
            PrizeTier::None => "NO PRIZE",
        };
        f.write_str(name)
    }
}
