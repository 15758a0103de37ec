//! Common types for the engine: errors and shot outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a resolved shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShotOutcome {
    /// Shot missed all ships.
    Miss,
    /// Shot hit a ship that is still afloat.
    Hit,
    /// Shot hit the last intact segment of a ship.
    Sunk,
}

impl ShotOutcome {
    /// Hits and sinks grant the shooter another turn.
    pub fn repeats_turn(self) -> bool {
        matches!(self, ShotOutcome::Hit | ShotOutcome::Sunk)
    }
}

/// Reasons a [`GameConfig`](crate::core::config::GameConfig) is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Board side of zero.
    ZeroSize,
    /// Board side above the supported maximum.
    SizeTooLarge { size: usize, max: usize },
    /// Fleet manifest has no ships.
    EmptyFleet,
    /// A ship of length zero.
    ZeroLengthShip,
    /// A ship cannot fit along a board side.
    ShipTooLong { length: usize, size: usize },
    /// Fleet demand exceeds board capacity.
    OverCapacity { demand: usize, capacity: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroSize => write!(f, "board size must be positive"),
            ConfigError::SizeTooLarge { size, max } => {
                write!(f, "board size {} exceeds the maximum of {}", size, max)
            }
            ConfigError::EmptyFleet => write!(f, "fleet must contain at least one ship"),
            ConfigError::ZeroLengthShip => write!(f, "ship lengths must be positive"),
            ConfigError::ShipTooLong { length, size } => {
                write!(f, "ship of length {} does not fit a {}x{} board", length, size, size)
            }
            ConfigError::OverCapacity { demand, capacity } => write!(
                f,
                "fleet needs {} cells but the board offers {}",
                demand, capacity
            ),
        }
    }
}

/// Errors returned by engine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Shot lands outside the board.
    OutOfBounds,
    /// Cell was already resolved by an earlier shot.
    AlreadyTargeted,
    /// Ship leaves the board, overlaps or touches another ship.
    InvalidPlacement,
    /// A ship could not be placed within the attempt cap.
    PlacementExhausted,
    /// Fleet cannot be played on the requested board.
    InvalidConfiguration(ConfigError),
    /// The game has finished; no further shots are resolved.
    GameOver,
}

impl From<ConfigError> for BoardError {
    fn from(err: ConfigError) -> Self {
        BoardError::InvalidConfiguration(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds => write!(f, "Shot is outside the board"),
            BoardError::AlreadyTargeted => write!(f, "This cell was already targeted"),
            BoardError::InvalidPlacement => write!(f, "Ship placement is out of bounds or too close to another ship"),
            BoardError::PlacementExhausted => write!(f, "Unable to place ship"),
            BoardError::InvalidConfiguration(e) => write!(f, "Invalid configuration: {}", e),
            BoardError::GameOver => write!(f, "The game is over"),
        }
    }
}

impl std::error::Error for BoardError {}
