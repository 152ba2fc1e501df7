//! Core game logic - pure, deterministic, and testable
//!
//! All rules of the falling-block minesweeper hybrid live here, with zero
//! dependencies on UI, networking, or I/O:
//!
//! - **Deterministic**: same config and seed produce identical games
//! - **Headless**: the host owns the clock, rendering, and input decoding
//! - **Allocation-aware**: the tick path and snapshot refill do not allocate
//!
//! # Module Structure
//!
//! - [`tile`]: the per-cell state (empty / opened / mines / dead / flags)
//! - [`board`]: tile grid, neighbor mine counts, collision, line clearing
//! - [`pieces`]: tetromino shape matrices and quarter-turn rotation
//! - [`game`]: the per-tick orchestrator and the out-of-band cell actions
//! - [`snapshot`]: render-ready views with buffer reuse
//! - [`config`]: validated tuning parameters
//! - [`rng`]: small deterministic LCG shared by board seeding and spawns
//!
//! # Example
//!
//! ```
//! use tetrisweeper_core::{Game, GameConfig};
//! use tetrisweeper_types::GameInput;
//!
//! let mut game = Game::new(GameConfig::default(), 12345).unwrap();
//!
//! game.submit_input(GameInput::MoveLeft);
//! game.advance();
//!
//! // Reveal the bottom-left cell; flag the one next to it.
//! game.submit_cell_action(0, 19, false);
//! game.submit_cell_action(1, 19, true);
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.tiles.len(), snapshot.width * snapshot.height);
//! ```
//!
//! # Timing
//!
//! The engine has no clock of its own. The host calls
//! [`Game::advance`](game::Game::advance) once per discrete time step; the
//! piece drops one row every `fall_interval` ticks, and the interval shrinks
//! by one for every ten cleared lines down to a configured floor.

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod pieces;
pub mod rng;
pub mod snapshot;
pub mod tile;

pub use tetrisweeper_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::GameConfig;
pub use error::ConfigError;
pub use game::Game;
pub use pieces::{canonical_matrix, shape_matrix, Piece, ShapeMatrix};
pub use rng::SimpleRng;
pub use snapshot::{GameSnapshot, PieceSnapshot};
pub use tile::Tile;
