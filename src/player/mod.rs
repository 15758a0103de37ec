//! Player trait and implementations
//!
//! This module defines the Player trait and provides concrete implementations:
//! - AiPlayer: hunt/target computer opponent
//! - CliPlayer: interactive command-line player

use rand::rngs::SmallRng;
use std::io;

use crate::core::{Board, BoardError, Coord, ShotOutcome};

/// What a player wants to do on its turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Fire(Coord),
    /// Stop the game without touching any board.
    Quit,
}

/// Interface implemented by different player types.
///
/// A Player is responsible for:
/// - Selecting targets to attack
/// - Handling feedback from shots, its own and the opponent's
pub trait Player {
    /// Choose the next move given the opponent's board. Implementations must
    /// only read what a player could see: resolved cells and sunk ships.
    fn select_target(&mut self, rng: &mut SmallRng, opponent: &Board) -> io::Result<Move>;

    /// Inform the player of the result of its last shot.
    fn handle_shot_result(&mut self, _coord: Coord, _result: &Result<ShotOutcome, BoardError>) {}

    /// Inform the player of an opponent shot against its board.
    fn handle_opponent_shot(&mut self, _coord: Coord, _outcome: ShotOutcome) {}
}

pub mod ai;
pub use ai::AiPlayer;

pub mod cli;
pub use cli::CliPlayer;
