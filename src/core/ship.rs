//! Ship definition: a straight line of cells with a hit counter.

use serde::{Deserialize, Serialize};

use crate::core::coord::{axis, Coord};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    /// Advances along the column.
    Horizontal,
    /// Advances along the row.
    Vertical,
}

impl Orientation {
    /// Step between consecutive segments.
    pub fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// A ship of `length` segments starting at `origin`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    origin: Coord,
    length: usize,
    orientation: Orientation,
    remaining: usize,
}

impl Ship {
    /// Create an intact ship. Bounds are checked by the board on placement.
    pub fn new(origin: Coord, length: usize, orientation: Orientation) -> Self {
        Self {
            origin,
            length,
            orientation,
            remaining: length,
        }
    }

    /// Occupied cells, in order from the origin.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let (dr, dc) = self.orientation.step();
        (0..axis(self.length)).map(move |i| self.origin.offset(dr * i, dc * i))
    }

    /// Whether `coord` is one of the ship's cells.
    pub fn contains(&self, coord: Coord) -> bool {
        self.cells().any(|c| c == coord)
    }

    /// Register a hit at `coord`. Returns `true` if it struck this ship.
    /// A sunk ship no longer changes.
    pub fn register_hit(&mut self, coord: Coord) -> bool {
        if self.is_sunk() || !self.contains(coord) {
            return false;
        }
        self.remaining -= 1;
        true
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.remaining == 0
    }

    pub fn remaining_hits(&self) -> usize {
        self.remaining
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn origin(&self) -> Coord {
        self.origin
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }
}
