use std::fmt;

use serde::{Deserialize, Serialize};

use crate::symbols::{PrizeTier, Symbol};

pub const GRID_SIZE: usize = 3;

/// One spin's worth of symbols, `cells[row][col]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Grid {
    cells: [[Symbol; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    pub fn new(cells: [[Symbol; GRID_SIZE]; GRID_SIZE]) -> Self {
        Self { cells }
    }

    pub fn cell(&self, row: usize, col: usize) -> Symbol {
        self.cells[row][col]
    }

    pub fn rows(&self) -> &[[Symbol; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    /// Symbol indices row by row, the shape used by spin exports.
    pub fn to_indices(&self) -> Vec<Vec<u8>> {
        self.cells
            .iter()
            .map(|row| row.iter().map(|s| s.to_index()).collect())
            .collect()
    }

    fn line(&self, line: WinLine) -> [Symbol; GRID_SIZE] {
        line.cells().map(|(r, c)| self.cells[r][c])
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            writeln!(f, "{:<8} {:<8} {:<8}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum WinLine {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

impl WinLine {
    /// Lines in the order they are checked. Only the first paying line counts.
    pub const SCAN_ORDER: [WinLine; 8] = [
        WinLine::Row(0),
        WinLine::Row(1),
        WinLine::Row(2),
        WinLine::Column(0),
        WinLine::Column(1),
        WinLine::Column(2),
        WinLine::MainDiagonal,
        WinLine::AntiDiagonal,
    ];

    pub fn cells(self) -> [(usize, usize); GRID_SIZE] {
        match self {
            WinLine::Row(r) => [(r, 0), (r, 1), (r, 2)],
            WinLine::Column(c) => [(0, c), (1, c), (2, c)],
            WinLine::MainDiagonal => [(0, 0), (1, 1), (2, 2)],
            WinLine::AntiDiagonal => [(0, 2), (1, 1), (2, 0)],
        }
    }
}

impl fmt::Display for WinLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinLine::Row(r) => write!(f, "row {}", r + 1),
            WinLine::Column(c) => write!(f, "column {}", c + 1),
            WinLine::MainDiagonal => f.write_str("main diagonal"),
            WinLine::AntiDiagonal => f.write_str("anti-diagonal"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Evaluation {
    pub tier: PrizeTier,
    /// The line that produced `tier`, `None` when nothing paid.
    pub line: Option<WinLine>,
}

impl Evaluation {
    pub const LOSS: Evaluation = Evaluation {
        tier: PrizeTier::None,
        line: None,
    };
}

/// Scan rows, then columns, then the main and anti diagonals; the first line
/// of three equal symbols with a paying tier decides the result. A line of
/// starfish has no tier and the scan carries on past it.
pub fn evaluate(grid: &Grid) -> Evaluation {
    for line in WinLine::SCAN_ORDER {
        let [a, b, c] = grid.line(line);
        if a == b && b == c {
            let tier = PrizeTier::for_line(a);
            if tier.is_win() {
                return Evaluation {
                    tier,
                    line: Some(line),
                };
            }
        }
    }
    Evaluation::LOSS
}
