use log::debug;
use rand::rngs::SmallRng;
use std::io;

use crate::core::{ai, Board, BoardError, Coord, ShotOutcome};

use super::{Move, Player};

/// Computer player using the hunt/target heuristic. Keeps no memory between
/// turns: everything it needs is on the opponent board.
#[derive(Debug, Default)]
pub struct AiPlayer;

impl AiPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Player for AiPlayer {
    fn select_target(&mut self, rng: &mut SmallRng, opponent: &Board) -> io::Result<Move> {
        Ok(match ai::choose_target(opponent, rng) {
            Some(coord) => Move::Fire(coord),
            // Nothing left to shoot; only reachable on a board with no ships.
            None => Move::Quit,
        })
    }

    fn handle_shot_result(&mut self, coord: Coord, result: &Result<ShotOutcome, BoardError>) {
        debug!("computer fired at {}: {:?}", coord, result);
    }
}
