//! Core sea battle engine
//!
//! Pure game logic: boards, ship placement, shot resolution, the computer's
//! hunt/target heuristic and the turn rules. No console I/O happens here;
//! randomness is always passed in by the caller.

pub mod ai;
pub mod board;
pub mod common;
pub mod config;
pub mod coord;
pub mod game;
pub mod placement;
pub mod ship;

// Re-export commonly used types
pub use ai::{candidates, choose_target, hunt_candidates, target_candidates, Mode};
pub use board::{Board, CellState};
pub use common::{BoardError, ConfigError, ShotOutcome};
pub use config::*;
pub use coord::Coord;
pub use game::{GameEngine, GameStatus, Side};
pub use placement::{place_fleet, random_board};
pub use ship::{Orientation, Ship};
