//! Shared types module - data structures and tuning constants
//!
//! This module defines the fundamental types used throughout the engine.
//! All types are pure data structures with no dependency on the game logic,
//! making them usable in any context (core logic, rendering, replay tooling).
//!
//! # Board Dimensions
//!
//! Default playfield dimensions (the board size is configurable at runtime,
//! these are only the defaults):
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: `(width / 2 - 1, 0)`
//!
//! # Timing
//!
//! The engine is tick-driven: the host calls `advance()` once per discrete
//! time step. The active piece falls one row every `fall_interval` ticks,
//! and the interval shrinks by one tick for every 10 cleared lines until it
//! reaches [`DEFAULT_FALL_INTERVAL_FLOOR`].
//!
//! # Examples
//!
//! ```
//! use tetrisweeper_types::{GameInput, PieceKind, Rotation};
//!
//! let piece = PieceKind::T;
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(piece, parsed);
//!
//! let rotation = Rotation::North;
//! assert_eq!(rotation.rotate_cw(), Rotation::East);
//!
//! let input = GameInput::from_str("moveLeft").unwrap();
//! assert_eq!(input, GameInput::MoveLeft);
//! ```

use serde::{Deserialize, Serialize};

/// Default board width in cells (10 columns)
pub const DEFAULT_BOARD_WIDTH: usize = 10;

/// Default board height in cells (20 rows)
pub const DEFAULT_BOARD_HEIGHT: usize = 20;

/// Number of bottom rows pre-filled with random tiles at board setup
pub const DEFAULT_SEED_ROWS: usize = 5;

/// Ticks between automatic one-row drops of the active piece
pub const DEFAULT_FALL_INTERVAL: u32 = 30;

/// Lower bound for the fall interval; the difficulty curve never goes below it
pub const DEFAULT_FALL_INTERVAL_FLOOR: u32 = 10;

/// Probability that a seeded tile is left empty
pub const DEFAULT_INITIAL_EMPTY_PROB: f64 = 0.1;

/// Probability that a seeded solid tile starts pre-opened
pub const DEFAULT_INITIAL_OPENED_PROB: f64 = 0.2;

/// Probability that a seeded unopened tile carries a mine
pub const DEFAULT_INITIAL_MINE_PROB: f64 = 0.3;

/// Probability that a locked piece cell starts pre-opened
pub const DEFAULT_OPENED_PROB: f64 = 0.0;

/// Probability that a locked unopened piece cell carries a mine
pub const DEFAULT_MINE_PROB: f64 = 0.2;

/// Flag marks wrap back to zero once they exceed this count
pub const DEFAULT_MAX_FLAGS: u8 = 3;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

/// All seven kinds, in spawn-index order.
pub const PIECE_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::J,
    PieceKind::L,
    PieceKind::O,
    PieceKind::S,
    PieceKind::T,
    PieceKind::Z,
];

impl PieceKind {
    /// Map a uniform draw in `0..7` to a kind.
    pub fn from_index(index: u32) -> Self {
        PIECE_KINDS[index as usize % PIECE_KINDS.len()]
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::T => "t",
            PieceKind::Z => "z",
        }
    }
}

/// Rotation states (North = canonical orientation, quarter turns clockwise)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Map a uniform draw in `0..4` to a rotation state.
    pub fn from_index(index: u32) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Number of clockwise quarter turns from the canonical orientation.
    pub fn quarter_turns(&self) -> u32 {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// Parse from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(Rotation::North),
            "east" | "e" => Some(Rotation::East),
            "south" | "s" => Some(Rotation::South),
            "west" | "w" => Some(Rotation::West),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Decoded input symbols consumed by the engine, one per tick at most.
///
/// Reveal/flag pointer actions are not inputs in this sense: they reach the
/// engine out-of-band through `submit_cell_action` and are not tick-gated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameInput {
    MoveLeft,
    MoveRight,
    Rotate,
    SoftDrop,
}

impl GameInput {
    /// Parse input from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameInput::MoveLeft),
            "moveright" => Some(GameInput::MoveRight),
            "rotate" => Some(GameInput::Rotate),
            "softdrop" => Some(GameInput::SoftDrop),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameInput::MoveLeft => "moveLeft",
            GameInput::MoveRight => "moveRight",
            GameInput::Rotate => "rotate",
            GameInput::SoftDrop => "softDrop",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_kind_roundtrip() {
        for kind in PIECE_KINDS {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(PieceKind::from_str("x"), None);
    }

    #[test]
    fn test_piece_kind_from_index_covers_all() {
        let drawn: Vec<PieceKind> = (0..7).map(PieceKind::from_index).collect();
        for kind in PIECE_KINDS {
            assert!(drawn.contains(&kind));
        }
    }

    #[test]
    fn test_rotation_cw_cycle() {
        let mut rotation = Rotation::North;
        for _ in 0..4 {
            rotation = rotation.rotate_cw();
        }
        assert_eq!(rotation, Rotation::North);
    }

    #[test]
    fn test_rotation_quarter_turns() {
        assert_eq!(Rotation::North.quarter_turns(), 0);
        assert_eq!(Rotation::West.quarter_turns(), 3);
        assert_eq!(Rotation::from_index(5), Rotation::East);
    }

    #[test]
    fn test_game_input_roundtrip() {
        for input in [
            GameInput::MoveLeft,
            GameInput::MoveRight,
            GameInput::Rotate,
            GameInput::SoftDrop,
        ] {
            assert_eq!(GameInput::from_str(input.as_str()), Some(input));
        }
        assert_eq!(GameInput::from_str("hold"), None);
    }
}
