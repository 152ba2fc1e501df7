//! Board module - tile grid, neighbor counts, collision, and line clearing
//!
//! The board owns two parallel grids in flat row-major storage: the tiles
//! themselves and the derived per-cell count of mines in the surrounding
//! eight cells. The falling piece is *not* board content - it lives outside
//! the grid and only enters through [`Board::merge_piece`] when it locks.
//!
//! The neighbor grid is cached behind a dirty flag: any grid mutation marks
//! it stale and [`Board::recompute_neighbors`] is an O(1) no-op until then.
//!
//! Coordinates: `(col, row)` with column 0 on the left and row 0 at the top.

use crate::config::GameConfig;
use crate::pieces::{Piece, ShapeMatrix};
use crate::rng::SimpleRng;
use crate::tile::Tile;

/// The game board plus its derived state and score tallies.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of tiles, row-major order (row * width + col).
    tiles: Vec<Tile>,
    /// Flat array of mine-neighbor counts, same layout.
    neighbors: Vec<u8>,
    /// Grid has mutated since the last neighbor recompute.
    changed: bool,
    /// Live mines currently on the board.
    mine_count: u32,
    /// Cumulative cleared-line count.
    lines_cleared: u32,
    /// Cumulative mines removed by line clears (the score).
    mines_cleared: u32,
}

/// Generate one random tile from the injected RNG stream.
///
/// With probability `empty_prob` (only when `allow_empty`) the tile is
/// empty. A solid tile is pre-opened with probability `opened_prob`, and -
/// only when not pre-opened - carries a mine with probability `mine_prob`,
/// so a tile is never both opened and a mine.
pub fn random_tile(
    allow_empty: bool,
    empty_prob: f64,
    opened_prob: f64,
    mine_prob: f64,
    rng: &mut SimpleRng,
) -> Tile {
    if allow_empty && rng.next_prob(empty_prob) {
        return Tile::empty();
    }
    let opened = rng.next_prob(opened_prob);
    let mines = if !opened && rng.next_prob(mine_prob) {
        1
    } else {
        0
    };
    Tile::solid(opened, mines)
}

impl Board {
    /// Create a board: all rows empty, then the bottom `seed_rows` rows
    /// refilled with random tiles using the initial probabilities.
    ///
    /// `seed_rows` is clamped to the board height; `Game::new` validates
    /// the config before it gets here.
    pub fn new(config: &GameConfig, rng: &mut SimpleRng) -> Self {
        let mut board = Self {
            width: config.width,
            height: config.height,
            tiles: vec![Tile::empty(); config.width * config.height],
            neighbors: vec![0; config.width * config.height],
            changed: true,
            mine_count: 0,
            lines_cleared: 0,
            mines_cleared: 0,
        };

        let first_seeded = config.height.saturating_sub(config.seed_rows);
        for row in first_seeded..config.height {
            for col in 0..config.width {
                let tile = random_tile(
                    true,
                    config.initial_empty_prob,
                    config.initial_opened_prob,
                    config.initial_mine_prob,
                    rng,
                );
                board.mine_count += u32::from(tile.mines);
                board.tiles[row * config.width + col] = tile;
            }
        }

        board
    }

    /// Calculate flat index from (col, row) coordinates
    #[inline(always)]
    fn index(&self, col: i32, row: i32) -> Option<usize> {
        if col < 0 || col >= self.width as i32 || row < 0 || row >= self.height as i32 {
            return None;
        }
        Some(row as usize * self.width + col as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get tile at (col, row); `None` if out of bounds.
    pub fn tile(&self, col: i32, row: i32) -> Option<Tile> {
        self.index(col, row).map(|idx| self.tiles[idx])
    }

    /// Replace the tile at (col, row), keeping the mine tally consistent
    /// and invalidating the neighbor cache. Returns false if out of bounds.
    pub fn set_tile(&mut self, col: i32, row: i32, tile: Tile) -> bool {
        match self.index(col, row) {
            Some(idx) => {
                let old = self.tiles[idx];
                self.mine_count = self.mine_count - u32::from(old.mines) + u32::from(tile.mines);
                self.tiles[idx] = tile;
                self.changed = true;
                true
            }
            None => false,
        }
    }

    /// Flat row-major view of the grid.
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Flat row-major view of the neighbor-count grid.
    ///
    /// Only consistent with the grid after [`Board::recompute_neighbors`].
    pub fn neighbors(&self) -> &[u8] {
        &self.neighbors
    }

    /// Neighbor count at (col, row); `None` if out of bounds.
    pub fn neighbor_count(&self, col: i32, row: i32) -> Option<u8> {
        self.index(col, row).map(|idx| self.neighbors[idx])
    }

    pub fn mine_count(&self) -> u32 {
        self.mine_count
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn mines_cleared(&self) -> u32 {
        self.mines_cleared
    }

    /// Whether the neighbor cache is stale.
    pub fn is_dirty(&self) -> bool {
        self.changed
    }

    /// Rebuild the neighbor-count grid if the tile grid changed; no-op
    /// (and O(1)) otherwise.
    ///
    /// Each cell ends up holding the sum of `mines` over its in-bounds
    /// Moore neighborhood - the eight surrounding cells, no wraparound.
    pub fn recompute_neighbors(&mut self) {
        if !self.changed {
            return;
        }

        self.neighbors.fill(0);

        for row in 0..self.height as i32 {
            for col in 0..self.width as i32 {
                let tile = self.tiles[row as usize * self.width + col as usize];
                if tile.empty || tile.mines == 0 {
                    continue;
                }
                for dr in -1..=1 {
                    for dc in -1..=1 {
                        if dr == 0 && dc == 0 {
                            continue;
                        }
                        if let Some(idx) = self.index(col + dc, row + dr) {
                            self.neighbors[idx] += tile.mines;
                        }
                    }
                }
            }
        }

        self.changed = false;
    }

    /// Test a piece placement against the grid.
    ///
    /// Blocked when any set matrix cell falls outside the side or bottom
    /// bounds, or lands on a non-empty tile. Rows above the top (`row < 0`)
    /// are legal while a piece spawns in; only the column bounds apply
    /// there. This is the sole authority for placement legality.
    pub fn collides(&self, x: i32, y: i32, matrix: &ShapeMatrix) -> bool {
        for (r, c) in matrix.iter_set() {
            let col = x + c as i32;
            let row = y + r as i32;
            if col < 0 || col >= self.width as i32 || row >= self.height as i32 {
                return true;
            }
            if row >= 0 && !self.tiles[row as usize * self.width + col as usize].empty {
                return true;
            }
        }
        false
    }

    /// Lock a piece: every set cell becomes a freshly generated tile using
    /// the lock-time probabilities. The pose must be legal (gated by
    /// [`Board::collides`] before any commit), so all cells are in bounds.
    pub fn merge_piece(&mut self, config: &GameConfig, piece: &Piece, rng: &mut SimpleRng) {
        for (col, row) in piece.cells() {
            let tile = random_tile(false, 0.0, config.opened_prob, config.mine_prob, rng);
            if let Some(idx) = self.index(col, row) {
                self.mine_count += u32::from(tile.mines);
                self.tiles[idx] = tile;
            }
        }
        self.changed = true;
        log::debug!(
            "piece locked at ({}, {}), {} live mines",
            piece.x,
            piece.y,
            self.mine_count
        );
    }

    /// Remove every complete row and insert fresh empty rows at the top.
    ///
    /// A row is complete when no tile in it is both a non-mine and
    /// unopened - every cell is a mine (opened or not) or already opened.
    /// Per removed row the mine tallies move from `mine_count` to
    /// `mines_cleared`; total row count and surviving-row order are
    /// preserved. Returns the number of rows removed.
    pub fn clear_complete_lines(&mut self) -> u32 {
        let width = self.width;
        let mut cleared = 0u32;
        let mut write_row = self.height;

        // Scan bottom to top, compacting surviving rows downward.
        for read_row in (0..self.height).rev() {
            let start = read_row * width;
            let row_tiles = &self.tiles[start..start + width];
            if row_tiles.iter().all(Tile::is_resolved) {
                let row_mines: u32 = row_tiles.iter().map(|t| u32::from(t.mines)).sum();
                cleared += 1;
                self.lines_cleared += 1;
                self.mines_cleared += row_mines;
                self.mine_count -= row_mines;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    self.tiles.copy_within(start..start + width, write_row * width);
                }
            }
        }

        // Fresh empty rows fill the vacated space at the top.
        for tile in &mut self.tiles[..write_row * width] {
            *tile = Tile::empty();
        }

        if cleared > 0 {
            self.changed = true;
            log::debug!(
                "cleared {} lines ({} mines swept, {} total)",
                cleared,
                self.mines_cleared,
                self.lines_cleared
            );
        }
        cleared
    }

    /// Apply a reveal or flag action to (col, row).
    ///
    /// No-op when the target is out of bounds, empty, or already opened.
    /// Reveal is additionally a no-op on a flagged tile; revealing a mine
    /// marks it dead and returns true (loss). Flagging increments the mark,
    /// wrapping to zero past `max_flags`. Either effective action can
    /// complete a row, so line clearing runs afterwards.
    pub fn reveal_or_flag(&mut self, col: i32, row: i32, flag_action: bool, max_flags: u8) -> bool {
        let Some(idx) = self.index(col, row) else {
            return false;
        };
        let tile = &mut self.tiles[idx];
        if tile.empty || tile.opened {
            return false;
        }

        let mut detonated = false;
        if flag_action {
            tile.flags = if tile.flags >= max_flags {
                0
            } else {
                tile.flags + 1
            };
        } else {
            if tile.flags > 0 {
                return false;
            }
            if tile.is_mine() {
                tile.dead = true;
                detonated = true;
            } else {
                tile.opened = true;
            }
        }

        self.clear_complete_lines();
        detonated
    }
}
