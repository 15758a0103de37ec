//! Game board state: ship placements, shots and the contours around ships.

use log::{debug, info};
use std::collections::HashSet;
use std::fmt;

use crate::core::common::{BoardError, ShotOutcome};
use crate::core::coord::{axis, Coord};
use crate::core::ship::Ship;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Empty,
    Occupied,
    Miss,
    Hit,
}

/// A square board owning its fleet.
///
/// Two coordinate sets only ever grow:
/// - `reserved`: ship cells and their contours, consulted by [`Board::place_ship`];
/// - `targeted`: cells resolved by shots, plus the contour revealed around every
///   sunk ship, consulted by [`Board::fire`].
#[derive(Clone)]
pub struct Board {
    size: usize,
    cells: Vec<CellState>,
    ships: Vec<Ship>,
    reserved: HashSet<Coord>,
    targeted: HashSet<Coord>,
    live_ships: usize,
    sunk_ships: usize,
    concealed: bool,
}

impl Board {
    /// Create an empty `size` x `size` board.
    pub fn new(size: usize) -> Self {
        Board {
            size,
            cells: vec![CellState::Empty; size * size],
            ships: Vec::new(),
            reserved: HashSet::new(),
            targeted: HashSet::new(),
            live_ships: 0,
            sunk_ships: 0,
            concealed: false,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Whether renderers must hide intact ship cells.
    pub fn is_concealed(&self) -> bool {
        self.concealed
    }

    pub fn set_concealed(&mut self, concealed: bool) {
        self.concealed = concealed;
    }

    pub fn contains(&self, coord: Coord) -> bool {
        coord.in_bounds(self.size)
    }

    /// Cell state, `None` outside the board.
    pub fn cell(&self, coord: Coord) -> Option<CellState> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Placed ships in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    pub fn live_ships(&self) -> usize {
        self.live_ships
    }

    pub fn sunk_ships(&self) -> usize {
        self.sunk_ships
    }

    /// Returns `true` when every placed ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.live_ships == 0
    }

    pub fn is_reserved(&self, coord: Coord) -> bool {
        self.reserved.contains(&coord)
    }

    pub fn is_targeted(&self, coord: Coord) -> bool {
        self.targeted.contains(&coord)
    }

    /// Every cell already resolved by fire.
    pub fn targeted(&self) -> &HashSet<Coord> {
        &self.targeted
    }

    /// All coordinates in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let size = axis(self.size);
        (0..size).flat_map(move |r| (0..size).map(move |c| Coord::new(r, c)))
    }

    /// Cells that may still be fired at, row-major.
    pub fn untargeted(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(move |c| !self.targeted.contains(c))
    }

    /// Hit cells that belong to ships still afloat.
    pub fn wounded(&self) -> Vec<Coord> {
        self.ships
            .iter()
            .filter(|s| !s.is_sunk())
            .flat_map(|s| s.cells())
            .filter(|&c| self.cell(c) == Some(CellState::Hit))
            .collect()
    }

    /// Place a ship. Every cell must be on the board and outside any other
    /// ship's contour.
    pub fn place_ship(&mut self, ship: Ship) -> Result<(), BoardError> {
        if ship.length() == 0 {
            return Err(BoardError::InvalidPlacement);
        }
        for c in ship.cells() {
            if !self.contains(c) || self.reserved.contains(&c) {
                return Err(BoardError::InvalidPlacement);
            }
        }
        for c in ship.cells() {
            if let Some(i) = self.index(c) {
                self.cells[i] = CellState::Occupied;
            }
            self.reserved.insert(c);
        }
        self.live_ships += 1;
        self.reserve_contour(&ship);
        self.ships.push(ship);
        Ok(())
    }

    /// Resolve a shot at `coord`.
    pub fn fire(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        let idx = self.index(coord).ok_or(BoardError::OutOfBounds)?;
        if !self.targeted.insert(coord) {
            return Err(BoardError::AlreadyTargeted);
        }

        let struck = self.ships.iter_mut().position(|s| s.register_hit(coord));
        let Some(i) = struck else {
            self.cells[idx] = CellState::Miss;
            debug!("shot at {} missed", coord);
            return Ok(ShotOutcome::Miss);
        };

        self.cells[idx] = CellState::Hit;
        if !self.ships[i].is_sunk() {
            debug!("shot at {} hit, {} segments left", coord, self.ships[i].remaining_hits());
            return Ok(ShotOutcome::Hit);
        }

        self.sunk_ships += 1;
        self.live_ships -= 1;
        let ship = self.ships[i].clone();
        self.reveal_contour(&ship);
        info!(
            "ship of length {} sunk at {}, {} left afloat",
            ship.length(),
            coord,
            self.live_ships
        );
        Ok(ShotOutcome::Sunk)
    }

    /// Block the ring around a freshly placed ship so no other ship touches it.
    fn reserve_contour(&mut self, ship: &Ship) {
        for c in ship.cells().flat_map(Coord::near) {
            if self.contains(c) {
                self.reserved.insert(c);
            }
        }
    }

    /// Mark the ring around a sunk ship as known water.
    fn reveal_contour(&mut self, ship: &Ship) {
        let ring: Vec<Coord> = ship
            .cells()
            .flat_map(Coord::near)
            .filter(|&c| self.contains(c) && !self.targeted.contains(&c))
            .collect();
        for c in ring {
            if let Some(i) = self.index(c) {
                self.cells[i] = CellState::Miss;
            }
            self.targeted.insert(c);
        }
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row as usize * self.size + coord.col as usize)
        } else {
            None
        }
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Board {{ size: {}, live: {}, sunk: {}, targeted: {}, concealed: {}, ships: {:?} }}",
            self.size,
            self.live_ships,
            self.sunk_ships,
            self.targeted.len(),
            self.concealed,
            self.ships
        )
    }
}
