//! Commonly used types and utilities for ease of import.

pub use crate::{
    init_logging, random_board, AiPlayer, Board, CliPlayer, Coord, GameConfig, GameEngine,
    GameStatus, Move, Outcome, Player, Session, ShotOutcome, Side, Turn,
};
