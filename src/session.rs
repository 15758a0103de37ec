use log::debug;
use rand::rngs::SmallRng;
use std::io;

use crate::core::{BoardError, Coord, GameEngine, GameStatus, ShotOutcome, Side};
use crate::player::{Move, Player};

/// Report of one prompt/resolve cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// A shot was resolved on the opponent's board.
    Shot { shooter: Side, coord: Coord, outcome: ShotOutcome },
    /// The shot was refused; the same side moves again.
    Rejected { shooter: Side, coord: Coord, error: BoardError },
    /// A player asked to stop. Nothing was changed.
    Quit(Side),
    /// The game had already ended.
    Over { winner: Side },
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Side),
    Quit(Side),
}

/// Drives a [`GameEngine`] by asking the two players for moves.
pub struct Session {
    engine: GameEngine,
    players: [Box<dyn Player>; 2],
}

impl Session {
    /// `first` plays the engine's `Side::First`.
    pub fn new(engine: GameEngine, first: Box<dyn Player>, second: Box<dyn Player>) -> Self {
        Self {
            engine,
            players: [first, second],
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Ask the side to move for a target and resolve it.
    pub fn step(&mut self, rng: &mut SmallRng) -> io::Result<Turn> {
        let shooter = match self.engine.status() {
            GameStatus::Active(side) => side,
            GameStatus::Finished { winner } => return Ok(Turn::Over { winner }),
        };
        let target = shooter.opponent();

        let mv = self.players[shooter.index()].select_target(rng, self.engine.board(target))?;
        let coord = match mv {
            Move::Fire(coord) => coord,
            Move::Quit => {
                debug!("{:?} quit", shooter);
                return Ok(Turn::Quit(shooter));
            }
        };

        let result = self.engine.fire(coord);
        self.players[shooter.index()].handle_shot_result(coord, &result);
        Ok(match result {
            Ok(outcome) => {
                self.players[target.index()].handle_opponent_shot(coord, outcome);
                Turn::Shot { shooter, coord, outcome }
            }
            Err(error) => Turn::Rejected { shooter, coord, error },
        })
    }

    /// Play until someone wins or quits, calling `observer` after every step.
    pub fn run<F>(&mut self, rng: &mut SmallRng, mut observer: F) -> io::Result<Outcome>
    where
        F: FnMut(&GameEngine, &Turn),
    {
        loop {
            let turn = self.step(rng)?;
            observer(&self.engine, &turn);
            match turn {
                Turn::Quit(side) => return Ok(Outcome::Quit(side)),
                Turn::Over { winner } => return Ok(Outcome::Winner(winner)),
                Turn::Shot { .. } | Turn::Rejected { .. } => {
                    if let Some(winner) = self.engine.winner() {
                        return Ok(Outcome::Winner(winner));
                    }
                }
            }
        }
    }
}
