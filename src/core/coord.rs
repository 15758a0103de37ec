//! Board coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Offsets of the 8-neighbourhood, centre included.
static NEAR: [(i32, i32); 9] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 0),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A zero-indexed (row, col) position. Signed so neighbours of edge cells can
/// be expressed and then rejected by bounds checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

/// A `usize` extent as an `i32` axis value, clamped to `i32::MAX`.
pub(crate) fn axis(n: usize) -> i32 {
    i32::try_from(n).unwrap_or(i32::MAX)
}

impl Coord {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Convert a 1-indexed (row, col) pair as typed by a user.
    pub fn from_user(row: usize, col: usize) -> Self {
        Self::new(axis(row) - 1, axis(col) - 1)
    }

    /// Shift by `(dr, dc)`.
    pub fn offset(self, dr: i32, dc: i32) -> Self {
        Self::new(self.row + dr, self.col + dc)
    }

    /// True if inside `[0, size) x [0, size)`.
    pub fn in_bounds(self, size: usize) -> bool {
        let size = axis(size);
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }

    /// The cell itself and its 8 neighbours.
    pub fn near(self) -> impl Iterator<Item = Coord> {
        NEAR.iter().map(move |&(dr, dc)| self.offset(dr, dc))
    }

    /// Up, down, left, right.
    pub fn orthogonal(self) -> [Coord; 4] {
        [
            self.offset(-1, 0),
            self.offset(1, 0),
            self.offset(0, -1),
            self.offset(0, 1),
        ]
    }
}

impl From<(i32, i32)> for Coord {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Displays 1-indexed, the way players type coordinates.
impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row + 1, self.col + 1)
    }
}
