//! Random fleet placement with per-ship retries and whole-board restarts.

use log::{debug, warn};
use rand::Rng;

use crate::core::board::Board;
use crate::core::common::{BoardError, ConfigError};
use crate::core::config::{GameConfig, MAX_BOARD_SIZE};
use crate::core::coord::Coord;
use crate::core::ship::{Orientation, Ship};

/// Try once to place the whole fleet on a fresh board.
///
/// Origins are drawn from `0..=size` on both axes, so some candidates fall off
/// the board and are rejected by [`Board::place_ship`] like any other bad spot.
/// Returns `PlacementExhausted` as soon as one ship fails
/// `max_placement_attempts` times; the partial board is dropped.
pub fn place_fleet<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Board, BoardError> {
    let size = i32::try_from(config.board_size).map_err(|_| ConfigError::SizeTooLarge {
        size: config.board_size,
        max: MAX_BOARD_SIZE,
    })?;
    let mut board = Board::new(config.board_size);

    for &length in &config.fleet {
        let mut attempts = 0;
        loop {
            if attempts >= config.max_placement_attempts {
                debug!("gave up on ship of length {} after {} attempts", length, attempts);
                return Err(BoardError::PlacementExhausted);
            }
            let origin = Coord::new(rng.random_range(0..=size), rng.random_range(0..=size));
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            match board.place_ship(Ship::new(origin, length, orientation)) {
                Ok(()) => break,
                Err(BoardError::InvalidPlacement) => attempts += 1,
                Err(e) => return Err(e),
            }
        }
    }
    Ok(board)
}

/// Validate `config`, then build a fully placed board, restarting from an
/// empty board whenever [`place_fleet`] is exhausted.
pub fn random_board<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Board, BoardError> {
    config.validate()?;
    for restart in 0..=config.max_board_restarts {
        match place_fleet(config, rng) {
            Ok(board) => {
                if restart > 0 {
                    debug!("fleet placed after {} restarts", restart);
                }
                return Ok(board);
            }
            Err(BoardError::PlacementExhausted) => continue,
            Err(e) => return Err(e),
        }
    }
    warn!(
        "could not place fleet {:?} on a {}x{} board after {} restarts",
        config.fleet, config.board_size, config.board_size, config.max_board_restarts
    );
    Err(BoardError::PlacementExhausted)
}
