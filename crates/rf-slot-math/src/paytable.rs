//! Paytables, paylines and line win evaluation

use serde::{Deserialize, Serialize};

use crate::symbols::{SYMBOL_COUNT, Symbol};
use crate::window::{REEL_COUNT, Window};

/// Number of paylines
pub const LINE_COUNT: usize = 25;

/// Shortest paying run
pub const MIN_RUN: u8 = 3;

/// Row index per reel (0 = top, 1 = middle, 2 = bottom)
pub type LinePattern = [u8; REEL_COUNT];

/// The fixed 25 line patterns
pub const PAYLINES: [LinePattern; LINE_COUNT] = [
    [1, 1, 1, 1, 1],
    [0, 0, 0, 0, 0],
    [2, 2, 2, 2, 2],
    [0, 1, 2, 1, 0],
    [2, 1, 0, 1, 2],
    [0, 0, 1, 2, 2],
    [2, 2, 1, 0, 0],
    [1, 2, 2, 2, 1],
    [1, 0, 0, 0, 1],
    [0, 1, 1, 1, 0],
    [2, 1, 1, 1, 2],
    [1, 0, 1, 2, 1],
    [1, 2, 1, 0, 1],
    [0, 0, 2, 2, 0],
    [2, 2, 0, 0, 2],
    [0, 2, 2, 2, 0],
    [2, 0, 0, 0, 2],
    [1, 0, 2, 0, 1],
    [1, 2, 0, 2, 1],
    [0, 1, 0, 1, 0],
    [2, 1, 2, 1, 2],
    [1, 1, 0, 1, 1],
    [1, 1, 2, 1, 1],
    [0, 2, 0, 2, 0],
    [2, 0, 2, 0, 2],
];

/// Leftmost run found on one payline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRun {
    /// Paying symbol; `Wild` when the line holds no other candidate
    pub symbol: Symbol,
    /// Consecutive matching reels from the left (0..=5)
    pub length: u8,
}

/// Find the target symbol and leftmost run length for one line.
///
/// The target is the first cell that is neither wild nor scatter. A scatter
/// ends the run without counting; wilds and the target extend it.
#[inline]
pub fn line_run(window: &Window, line: &LinePattern) -> LineRun {
    let symbol = line
        .iter()
        .enumerate()
        .map(|(reel, &row)| window.get(reel, row as usize))
        .find(|s| !s.is_special())
        .unwrap_or(Symbol::Wild);

    let mut length = 0u8;
    for (reel, &row) in line.iter().enumerate() {
        match window.get(reel, row as usize) {
            Symbol::Scatter => break,
            s if s == Symbol::Wild || s == symbol => length += 1,
            _ => break,
        }
    }

    LineRun { symbol, length }
}

/// Pay multipliers for 3, 4 and 5 of a kind, one row per symbol
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paytable {
    pays: [[f64; 3]; SYMBOL_COUNT],
}

impl Paytable {
    /// Build from raw rows indexed by [`Symbol::index`]
    pub const fn new(pays: [[f64; 3]; SYMBOL_COUNT]) -> Self {
        Self { pays }
    }

    /// Base game table
    pub const fn base_game() -> Self {
        Self::new([
            [5.0, 10.0, 40.0],     // 9
            [5.0, 15.0, 50.0],     // 10
            [10.0, 15.0, 75.0],    // J
            [10.0, 20.0, 100.0],   // Q
            [10.0, 25.0, 150.0],   // K
            [40.0, 200.0, 1500.0], // R
            [25.0, 100.0, 500.0],  // F
            [15.0, 50.0, 300.0],   // B
            [0.0, 0.0, 0.0],       // W
            [0.0, 0.0, 0.0],       // S
        ])
    }

    /// Free game table (every paying entry higher than the base game)
    pub const fn free_game() -> Self {
        Self::new([
            [10.0, 15.0, 100.0],
            [10.0, 25.0, 125.0],
            [15.0, 30.0, 150.0],
            [15.0, 40.0, 175.0],
            [30.0, 45.0, 300.0],
            [100.0, 500.0, 3000.0],
            [50.0, 200.0, 1500.0],
            [30.0, 100.0, 800.0],
            [0.0, 0.0, 0.0],
            [0.0, 0.0, 0.0],
        ])
    }

    /// Replace one symbol's row
    pub fn with_pays(mut self, symbol: Symbol, pays: [f64; 3]) -> Self {
        self.pays[symbol.index()] = pays;
        self
    }

    /// Multiplier for a run; 0 below three of a kind
    #[inline]
    pub fn pay(&self, symbol: Symbol, run_length: u8) -> f64 {
        if run_length < MIN_RUN {
            return 0.0;
        }
        let idx = (run_length.min(REEL_COUNT as u8) - MIN_RUN) as usize;
        self.pays[symbol.index()][idx]
    }

    /// Un-staked pay for one line
    #[inline]
    pub fn line_pay(&self, window: &Window, line: &LinePattern) -> f64 {
        let run = line_run(window, line);
        self.pay(run.symbol, run.length)
    }

    /// Un-staked pay summed over all 25 lines. Callers multiply by the
    /// per-line stake.
    #[inline]
    pub fn evaluate_lines(&self, window: &Window) -> f64 {
        PAYLINES.iter().map(|line| self.line_pay(window, line)).sum()
    }
}

impl Default for Paytable {
    fn default() -> Self {
        Self::base_game()
    }
}
