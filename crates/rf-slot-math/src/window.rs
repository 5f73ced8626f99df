//! The visible 5×3 window

use serde::{Deserialize, Serialize};

use crate::symbols::Symbol;

/// Reels (columns) in the window
pub const REEL_COUNT: usize = 5;
/// Visible rows per reel
pub const ROW_COUNT: usize = 3;

/// One spin's visible symbols, stored column-major (`cells[reel][row]`,
/// row 0 = top)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Window {
    cells: [[Symbol; ROW_COUNT]; REEL_COUNT],
}

impl Window {
    /// Build from columns
    pub fn from_columns(cells: [[Symbol; ROW_COUNT]; REEL_COUNT]) -> Self {
        Self { cells }
    }

    /// Build from rows as drawn on screen (`rows[row][reel]`)
    pub fn from_rows(rows: [[Symbol; REEL_COUNT]; ROW_COUNT]) -> Self {
        let mut cells = [[Symbol::S9; ROW_COUNT]; REEL_COUNT];
        for (row, line) in rows.iter().enumerate() {
            for (reel, &symbol) in line.iter().enumerate() {
                cells[reel][row] = symbol;
            }
        }
        Self { cells }
    }

    #[inline]
    pub fn get(&self, reel: usize, row: usize) -> Symbol {
        self.cells[reel][row]
    }

    #[inline]
    pub fn set(&mut self, reel: usize, row: usize, symbol: Symbol) {
        self.cells[reel][row] = symbol;
    }

    /// Column for one reel, top to bottom
    pub fn column(&self, reel: usize) -> &[Symbol; ROW_COUNT] {
        &self.cells[reel]
    }

    /// Count scatters over all 15 cells, independent of paylines
    #[inline]
    pub fn count_scatters(&self) -> u8 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&s| s == Symbol::Scatter)
            .count() as u8
    }
}

impl Default for Window {
    fn default() -> Self {
        Self {
            cells: [[Symbol::S9; ROW_COUNT]; REEL_COUNT],
        }
    }
}
