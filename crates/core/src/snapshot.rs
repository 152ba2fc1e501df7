//! Render-ready views of game state.
//!
//! Snapshots are plain data: hosts can serialize them, diff them, or feed
//! them to a renderer without touching the live [`Game`](crate::game::Game).
//! [`Game::snapshot_into`](crate::game::Game::snapshot_into) refills an
//! existing snapshot so steady-state rendering allocates nothing.

use serde::{Deserialize, Serialize};

use crate::pieces::Piece;
use crate::tile::Tile;
use tetrisweeper_types::{PieceKind, Rotation};

/// Pose of the active piece at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i32,
    pub y: i32,
}

impl From<&Piece> for PieceSnapshot {
    fn from(piece: &Piece) -> Self {
        Self {
            kind: piece.kind,
            rotation: piece.rotation,
            x: piece.x,
            y: piece.y,
        }
    }
}

impl Default for PieceSnapshot {
    fn default() -> Self {
        Self {
            kind: PieceKind::I,
            rotation: Rotation::North,
            x: 0,
            y: 0,
        }
    }
}

/// Everything a renderer needs for one frame.
///
/// `tiles` and `neighbors` are row-major, `width * height` entries each;
/// `neighbors[i]` is the Moore-neighborhood mine count for `tiles[i]`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<Tile>,
    pub neighbors: Vec<u8>,
    pub piece: PieceSnapshot,
    pub running: bool,
    pub lines_cleared: u32,
    pub mines_cleared: u32,
    pub mine_count: u32,
}

impl GameSnapshot {
    /// The tile at `(col, row)`, if in bounds.
    pub fn tile(&self, col: usize, row: usize) -> Option<Tile> {
        (col < self.width && row < self.height).then(|| self.tiles[row * self.width + col])
    }

    /// The neighbor mine count at `(col, row)`, if in bounds.
    pub fn neighbor_count(&self, col: usize, row: usize) -> Option<u8> {
        (col < self.width && row < self.height).then(|| self.neighbors[row * self.width + col])
    }
}
