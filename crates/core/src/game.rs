//! Game module - the per-tick orchestrator
//!
//! Ties board, piece, and RNG together. The host drives the engine with
//! exactly one [`Game::advance`] call per discrete time step and feeds it
//! already-decoded input symbols; the engine buffers at most one symbol and
//! resolves it at the start of the next tick.
//!
//! Tick order is fixed: input resolution, fall check (with lock / clear /
//! respawn on a blocked drop), lazy neighbor recompute, difficulty
//! adjustment, tick increment. The out-of-band reveal/flag path is not
//! tick-gated and can end the game on its own.

use crate::board::Board;
use crate::config::GameConfig;
use crate::error::Result;
use crate::pieces::Piece;
use crate::rng::SimpleRng;
use crate::snapshot::{GameSnapshot, PieceSnapshot};
use tetrisweeper_types::GameInput;

/// Complete game state.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    config: GameConfig,
    board: Board,
    piece: Piece,
    rng: SimpleRng,
    /// Tick counter within the current fall interval.
    tick: u32,
    /// Ticks between automatic drops; shrinks as lines clear.
    fall_interval: u32,
    /// At most one buffered input; a newer symbol overwrites an unconsumed one.
    pending_input: Option<GameInput>,
    /// False once the game is lost (board overflow or detonated mine).
    running: bool,
}

impl Game {
    /// Create a game from a validated config and an RNG seed.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self> {
        config.validate()?;
        let mut rng = SimpleRng::new(seed);
        let mut board = Board::new(&config, &mut rng);
        let piece = Piece::spawn(config.width, &mut rng);
        board.recompute_neighbors();

        Ok(Self {
            config,
            board,
            piece,
            rng,
            tick: 0,
            fall_interval: config.fall_interval,
            pending_input: None,
            running: true,
        })
    }

    /// Re-initialize with the same config, continuing the RNG stream.
    pub fn restart(&mut self) {
        self.board = Board::new(&self.config, &mut self.rng);
        self.piece = Piece::spawn(self.config.width, &mut self.rng);
        self.board.recompute_neighbors();
        self.tick = 0;
        self.fall_interval = self.config.fall_interval;
        self.pending_input = None;
        self.running = true;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn piece(&self) -> &Piece {
        &self.piece
    }

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn fall_interval(&self) -> u32 {
        self.fall_interval
    }

    /// Buffer one input symbol for the next tick, overwriting any
    /// unconsumed one. Ignored once the game is over.
    pub fn submit_input(&mut self, input: GameInput) {
        if !self.running {
            return;
        }
        self.pending_input = Some(input);
    }

    /// Out-of-band reveal/flag pointer action on a board cell.
    ///
    /// Not gated by the tick cadence; a detonated mine ends the game
    /// immediately. Ignored once the game is over.
    pub fn submit_cell_action(&mut self, col: i32, row: i32, flag: bool) {
        if !self.running {
            return;
        }
        if self
            .board
            .reveal_or_flag(col, row, flag, self.config.max_flags)
        {
            self.running = false;
            log::info!("mine detonated at ({}, {}), game over", col, row);
        }
    }

    /// Try to shift and/or rotate the active piece.
    ///
    /// Builds the candidate pose, gates it through the board's collision
    /// test, and commits only on success; on failure the piece is left
    /// untouched. Player moves and gravity both pass through here.
    pub fn try_move(&mut self, dx: i32, dy: i32, quarter_turns: u32) -> bool {
        let mut candidate = self.piece;
        for _ in 0..quarter_turns % 4 {
            candidate = candidate.rotated_cw();
        }
        candidate.x += dx;
        candidate.y += dy;

        if self.board.collides(candidate.x, candidate.y, candidate.matrix()) {
            return false;
        }
        self.piece = candidate;
        true
    }

    /// Run exactly one tick.
    pub fn advance(&mut self) {
        if !self.running {
            return;
        }

        let lines_before = self.board.lines_cleared();

        // 1. Resolve at most one buffered input; discard it either way.
        if let Some(input) = self.pending_input.take() {
            match input {
                GameInput::MoveLeft => self.try_move(-1, 0, 0),
                GameInput::MoveRight => self.try_move(1, 0, 0),
                GameInput::Rotate => self.try_move(0, 0, 1),
                GameInput::SoftDrop => self.try_move(0, 1, 0),
            };
        }

        // 2. Gravity: on fall ticks, drop one row or lock in place.
        if self.tick % self.fall_interval == 0 {
            if !self.try_move(0, 1, 0) {
                self.lock_piece();
            }
            self.tick = 0;
        }

        // 3. Refresh derived state (no-op unless the grid changed).
        self.board.recompute_neighbors();

        // 4. Speed up every 10 cleared lines, bounded by the floor.
        let lines_after = self.board.lines_cleared();
        if lines_before / 10 < lines_after / 10
            && self.fall_interval > self.config.fall_interval_floor
        {
            self.fall_interval -= 1;
        }

        self.tick += 1;
    }

    /// Merge the active piece, clear lines, and spawn the next piece.
    /// A blocked spawn pose means the board is full: game over.
    fn lock_piece(&mut self) {
        self.board.merge_piece(&self.config, &self.piece, &mut self.rng);
        self.board.clear_complete_lines();

        self.piece = Piece::spawn(self.config.width, &mut self.rng);
        if self
            .board
            .collides(self.piece.x, self.piece.y, self.piece.matrix())
        {
            self.running = false;
            log::info!("spawn blocked, board is full, game over");
        }
    }

    /// Write a render-ready view into `out`, reusing its allocations.
    /// Neighbor counts are recomputed first so the view is consistent.
    pub fn snapshot_into(&mut self, out: &mut GameSnapshot) {
        self.board.recompute_neighbors();

        out.width = self.board.width();
        out.height = self.board.height();
        out.tiles.clear();
        out.tiles.extend_from_slice(self.board.tiles());
        out.neighbors.clear();
        out.neighbors.extend_from_slice(self.board.neighbors());
        out.piece = PieceSnapshot::from(&self.piece);
        out.running = self.running;
        out.lines_cleared = self.board.lines_cleared();
        out.mines_cleared = self.board.mines_cleared();
        out.mine_count = self.board.mine_count();
    }

    /// Allocate and return a fresh render-ready view.
    pub fn snapshot(&mut self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}
