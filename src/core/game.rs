use log::info;
use serde::{Deserialize, Serialize};

use crate::core::board::Board;
use crate::core::common::{BoardError, ShotOutcome};
use crate::core::coord::Coord;

/// One of the two seats at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
}

/// Current status of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Waiting for a shot from this side.
    Active(Side),
    /// Terminal; no further shots are processed.
    Finished { winner: Side },
}

/// Turn rules over two boards: hits repeat the turn, misses pass it, and the
/// side whose fleet is gone loses.
pub struct GameEngine {
    boards: [Board; 2],
    status: GameStatus,
    shots: [usize; 2],
}

impl GameEngine {
    /// `first` and `second` are each side's own fleet. `First` shoots first.
    pub fn new(first: Board, second: Board) -> Self {
        let mut engine = Self {
            boards: [first, second],
            status: GameStatus::Active(Side::First),
            shots: [0; 2],
        };
        engine.check_victory();
        engine
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished { .. })
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Finished { winner } => Some(winner),
            GameStatus::Active(_) => None,
        }
    }

    /// The side expected to shoot next, `None` once finished.
    pub fn current(&self) -> Option<Side> {
        match self.status {
            GameStatus::Active(side) => Some(side),
            GameStatus::Finished { .. } => None,
        }
    }

    /// A side's own fleet.
    pub fn board(&self, side: Side) -> &Board {
        &self.boards[side.index()]
    }

    pub fn board_mut(&mut self, side: Side) -> &mut Board {
        &mut self.boards[side.index()]
    }

    /// Resolved shots fired by `side`.
    pub fn shots(&self, side: Side) -> usize {
        self.shots[side.index()]
    }

    /// Fire the current side's shot at the opposing board.
    ///
    /// Rejected shots (`OutOfBounds`, `AlreadyTargeted`) leave the turn with
    /// the same side. Errors with `GameOver` once the game is finished.
    pub fn fire(&mut self, coord: Coord) -> Result<ShotOutcome, BoardError> {
        let GameStatus::Active(shooter) = self.status else {
            return Err(BoardError::GameOver);
        };
        let outcome = self.boards[shooter.opponent().index()].fire(coord)?;
        self.shots[shooter.index()] += 1;

        if !outcome.repeats_turn() {
            self.status = GameStatus::Active(shooter.opponent());
        }
        self.check_victory();
        Ok(outcome)
    }

    fn check_victory(&mut self) {
        for side in [Side::First, Side::Second] {
            if self.board(side).all_sunk() {
                let winner = side.opponent();
                info!("{:?} fleet destroyed, {:?} wins", side, winner);
                self.status = GameStatus::Finished { winner };
                return;
            }
        }
    }
}
