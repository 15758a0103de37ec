use crate::core::common::{BoardError, ConfigError};

pub const BOARD_SIZE: usize = 6;
pub const FLEET: [usize; 7] = [3, 2, 2, 1, 1, 1, 1];

/// Largest accepted board side.
pub const MAX_BOARD_SIZE: usize = 100;

/// Failed random placements tolerated for one ship before the board is abandoned.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 2000;

/// Abandoned boards tolerated before placement gives up entirely.
pub const MAX_BOARD_RESTARTS: usize = 1000;

/// Board dimensions and fleet manifest for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub board_size: usize,
    pub fleet: Vec<usize>,
    pub max_placement_attempts: usize,
    pub max_board_restarts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            fleet: FLEET.to_vec(),
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            max_board_restarts: MAX_BOARD_RESTARTS,
        }
    }
}

impl GameConfig {
    pub fn new(board_size: usize, fleet: Vec<usize>) -> Self {
        Self {
            board_size,
            fleet,
            ..Self::default()
        }
    }

    /// Cells one ship claims: its segments plus one separating row of margin.
    pub fn ship_demand(length: usize) -> usize {
        length.saturating_add(1).saturating_mul(2)
    }

    /// Total demand of the fleet manifest.
    pub fn demand(&self) -> usize {
        self.fleet
            .iter()
            .fold(0usize, |acc, &l| acc.saturating_add(Self::ship_demand(l)))
    }

    /// Cells available, counting the margin that may fall off the far edges.
    pub fn capacity(&self) -> usize {
        let side = self.board_size.saturating_add(1);
        side.saturating_mul(side)
    }

    /// Reject boards outside `1..=MAX_BOARD_SIZE` and fleets too large for the
    /// board. Passing does not prove the fleet can be placed: a tight fleet
    /// such as `[1, 1]` on a 2x2 board passes here and later fails in
    /// [`random_board`](crate::core::placement::random_board) with
    /// `PlacementExhausted`.
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.board_size == 0 {
            return Err(ConfigError::ZeroSize.into());
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::SizeTooLarge {
                size: self.board_size,
                max: MAX_BOARD_SIZE,
            }
            .into());
        }
        if self.fleet.is_empty() {
            return Err(ConfigError::EmptyFleet.into());
        }
        for &length in &self.fleet {
            if length == 0 {
                return Err(ConfigError::ZeroLengthShip.into());
            }
            if length > self.board_size {
                return Err(ConfigError::ShipTooLong {
                    length,
                    size: self.board_size,
                }
                .into());
            }
        }
        let (demand, capacity) = (self.demand(), self.capacity());
        if demand > capacity {
            return Err(ConfigError::OverCapacity { demand, capacity }.into());
        }
        Ok(())
    }
}
