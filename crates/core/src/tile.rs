//! Tile module - the state of a single grid cell
//!
//! A cell is either empty (no block) or solid. Solid cells carry the
//! minesweeper sub-state: opened, mine, flag marks, and the `dead` marker for
//! the tile that lost the game.

use serde::{Deserialize, Serialize};

/// One cell of the board grid.
///
/// Invariants: `dead` and a nonzero `flags` are only meaningful on solid
/// tiles, and a tile is never created both opened and carrying a mine (a
/// mine must stay hidden until it is revealed - fatally).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    /// No block occupies this cell.
    pub empty: bool,
    /// The block has been revealed (only meaningful when solid).
    pub opened: bool,
    /// Mines on this tile (0 or 1).
    pub mines: u8,
    /// This tile detonated and ended the game.
    pub dead: bool,
    /// Player-placed flag marks, wrapping past the configured maximum.
    pub flags: u8,
}

impl Tile {
    /// An empty cell.
    pub const fn empty() -> Self {
        Self {
            empty: true,
            opened: false,
            mines: 0,
            dead: false,
            flags: 0,
        }
    }

    /// A solid cell, optionally pre-opened or mined.
    pub const fn solid(opened: bool, mines: u8) -> Self {
        Self {
            empty: false,
            opened,
            mines,
            dead: false,
            flags: 0,
        }
    }

    pub const fn is_mine(&self) -> bool {
        self.mines > 0
    }

    /// A tile counts toward a complete row when it is a mine or already
    /// opened. Empty cells and unopened non-mines block line clearing.
    pub const fn is_resolved(&self) -> bool {
        !self.empty && (self.mines > 0 || self.opened)
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::empty()
    }
}
