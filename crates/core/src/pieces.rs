//! Pieces module - tetromino shapes and quarter-turn rotation
//!
//! Shapes follow the standard rotation-system layouts: the I piece lives in
//! a 4x4 bounding square, O in 2x2, and the rest in 3x3. A pose is derived
//! by rotating the canonical layout clockwise `rotation` quarter turns; the
//! transform is exact (cell `(r, c)` maps to `(c, n-1-r)`), so four turns
//! always reproduce the canonical matrix.

use serde::{Deserialize, Serialize};

use crate::rng::SimpleRng;
use tetrisweeper_types::{PieceKind, Rotation};

/// Largest bounding square among the seven kinds (the I piece).
pub const MAX_MATRIX_SIZE: usize = 4;

/// Square occupancy bitmask for one piece pose, indexed `[row][col]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeMatrix {
    size: usize,
    cells: [[bool; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE],
}

impl ShapeMatrix {
    fn from_rows(rows: &[&[u8]]) -> Self {
        let size = rows.len();
        debug_assert!(size >= 2 && size <= MAX_MATRIX_SIZE);
        let mut cells = [[false; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE];
        for (r, row) in rows.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                cells[r][c] = v != 0;
            }
        }
        Self { size, cells }
    }

    /// Side length of the bounding square (2-4).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether the cell at `(row, col)` is part of the piece.
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.cells[row][col]
    }

    /// The matrix rotated one quarter turn clockwise.
    pub fn rotated_cw(&self) -> Self {
        let n = self.size;
        let mut out = Self {
            size: n,
            cells: [[false; MAX_MATRIX_SIZE]; MAX_MATRIX_SIZE],
        };
        for r in 0..n {
            for c in 0..n {
                out.cells[c][n - 1 - r] = self.cells[r][c];
            }
        }
        out
    }

    /// Iterate over the set cells as `(row, col)` offsets.
    pub fn iter_set(self) -> impl Iterator<Item = (usize, usize)> {
        let n = self.size;
        (0..n).flat_map(move |r| (0..n).filter_map(move |c| self.cells[r][c].then_some((r, c))))
    }
}

/// Canonical (unrotated) layout for a piece kind.
pub fn canonical_matrix(kind: PieceKind) -> ShapeMatrix {
    match kind {
        PieceKind::I => ShapeMatrix::from_rows(&[
            &[0, 0, 0, 0],
            &[1, 1, 1, 1],
            &[0, 0, 0, 0],
            &[0, 0, 0, 0],
        ]),
        PieceKind::J => ShapeMatrix::from_rows(&[&[1, 0, 0], &[1, 1, 1], &[0, 0, 0]]),
        PieceKind::L => ShapeMatrix::from_rows(&[&[0, 0, 1], &[1, 1, 1], &[0, 0, 0]]),
        PieceKind::O => ShapeMatrix::from_rows(&[&[1, 1], &[1, 1]]),
        PieceKind::S => ShapeMatrix::from_rows(&[&[0, 1, 1], &[1, 1, 0], &[0, 0, 0]]),
        PieceKind::T => ShapeMatrix::from_rows(&[&[0, 1, 0], &[1, 1, 1], &[0, 0, 0]]),
        PieceKind::Z => ShapeMatrix::from_rows(&[&[1, 1, 0], &[0, 1, 1], &[0, 0, 0]]),
    }
}

/// Layout for a piece kind at a given rotation state.
pub fn shape_matrix(kind: PieceKind, rotation: Rotation) -> ShapeMatrix {
    let mut matrix = canonical_matrix(kind);
    for _ in 0..rotation.quarter_turns() {
        matrix = matrix.rotated_cw();
    }
    matrix
}

/// The active falling tetromino: kind, rotation state, derived shape matrix,
/// and the anchor `(x, y)` of its bounding square in grid coordinates.
///
/// A piece is transient - created at spawn, consumed when it locks into the
/// board. `y` may be negative while the piece is still above the top row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    matrix: ShapeMatrix,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Build a piece at an explicit pose.
    pub fn new(kind: PieceKind, rotation: Rotation, x: i32, y: i32) -> Self {
        Self {
            kind,
            rotation,
            matrix: shape_matrix(kind, rotation),
            x,
            y,
        }
    }

    /// Spawn a random piece at the top-center anchor.
    ///
    /// Does not check collision - the orchestrator must test the spawn pose
    /// to detect a full board.
    pub fn spawn(width: usize, rng: &mut SimpleRng) -> Self {
        let kind = PieceKind::from_index(rng.next_range(7));
        let rotation = Rotation::from_index(rng.next_range(4));
        Self::new(kind, rotation, width as i32 / 2 - 1, 0)
    }

    /// The current shape matrix.
    pub fn matrix(&self) -> &ShapeMatrix {
        &self.matrix
    }

    /// The pose rotated one quarter turn clockwise (candidate, not committed).
    pub fn rotated_cw(&self) -> Self {
        Self {
            kind: self.kind,
            rotation: self.rotation.rotate_cw(),
            matrix: self.matrix.rotated_cw(),
            x: self.x,
            y: self.y,
        }
    }

    /// Absolute `(col, row)` grid coordinates of the occupied cells.
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> {
        let (x, y) = (self.x, self.y);
        self.matrix
            .iter_set()
            .map(move |(r, c)| (x + c as i32, y + r as i32))
    }
}
