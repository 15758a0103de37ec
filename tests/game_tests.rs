use std::collections::VecDeque;
use std::io;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{
    random_board, AiPlayer, Board, BoardError, Coord, GameConfig, GameEngine, GameStatus, Move,
    Orientation, Outcome, Player, Session, Ship, ShotOutcome, Side, Turn,
};

fn c(row: i32, col: i32) -> Coord {
    Coord::new(row, col)
}

/// First side owns one single-cell ship at (0, 0); second side owns a
/// horizontal two-cell ship at (0, 0).
fn small_engine() -> GameEngine {
    let mut first = Board::new(6);
    first
        .place_ship(Ship::new(c(0, 0), 1, Orientation::Horizontal))
        .unwrap();
    let mut second = Board::new(6);
    second
        .place_ship(Ship::new(c(0, 0), 2, Orientation::Horizontal))
        .unwrap();
    GameEngine::new(first, second)
}

/// Player that replays a fixed list of moves, then quits.
struct Scripted(VecDeque<Move>);

impl Scripted {
    fn boxed(moves: &[Move]) -> Box<dyn Player> {
        Box::new(Scripted(moves.iter().copied().collect()))
    }
}

impl Player for Scripted {
    fn select_target(&mut self, _rng: &mut SmallRng, _opponent: &Board) -> io::Result<Move> {
        Ok(self.0.pop_front().unwrap_or(Move::Quit))
    }
}

#[test]
fn test_miss_passes_turn() {
    let mut engine = small_engine();
    assert_eq!(engine.status(), GameStatus::Active(Side::First));
    assert_eq!(engine.fire(c(5, 5)).unwrap(), ShotOutcome::Miss);
    assert_eq!(engine.status(), GameStatus::Active(Side::Second));
    assert_eq!(engine.fire(c(5, 5)).unwrap(), ShotOutcome::Miss);
    assert_eq!(engine.status(), GameStatus::Active(Side::First));
    assert_eq!(engine.shots(Side::First), 1);
    assert_eq!(engine.shots(Side::Second), 1);
}

#[test]
fn test_hit_repeats_turn_and_sink_wins() {
    let mut engine = small_engine();
    assert_eq!(engine.fire(c(0, 0)).unwrap(), ShotOutcome::Hit);
    assert_eq!(engine.current(), Some(Side::First));

    assert_eq!(engine.fire(c(0, 0)).unwrap_err(), BoardError::AlreadyTargeted);
    assert_eq!(engine.fire(c(6, 0)).unwrap_err(), BoardError::OutOfBounds);
    assert_eq!(engine.current(), Some(Side::First));
    assert_eq!(engine.shots(Side::First), 1);

    assert_eq!(engine.fire(c(0, 1)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(engine.status(), GameStatus::Finished { winner: Side::First });
    assert_eq!(engine.winner(), Some(Side::First));
    assert_eq!(engine.current(), None);
    assert!(engine.board(Side::Second).all_sunk());

    // terminal: nothing else is resolved
    assert_eq!(engine.fire(c(3, 3)).unwrap_err(), BoardError::GameOver);
    assert_eq!(engine.shots(Side::First), 2);
    assert!(!engine.board(Side::Second).is_targeted(c(3, 3)));
    assert!(!engine.board(Side::First).is_targeted(c(3, 3)));
}

#[test]
fn test_second_side_can_win() {
    let mut engine = small_engine();
    engine.fire(c(5, 5)).unwrap();
    assert_eq!(engine.fire(c(0, 0)).unwrap(), ShotOutcome::Sunk);
    assert_eq!(engine.winner(), Some(Side::Second));
}

#[test]
fn test_session_reprompts_after_rejected_shot() {
    let first = Scripted::boxed(&[
        Move::Fire(c(5, 5)),
        Move::Fire(c(0, 0)),
        Move::Fire(c(0, 0)),
        Move::Fire(c(0, 1)),
    ]);
    let second = Scripted::boxed(&[Move::Fire(c(5, 5))]);
    let mut session = Session::new(small_engine(), first, second);
    let mut rng = SmallRng::seed_from_u64(1);

    assert!(matches!(
        session.step(&mut rng).unwrap(),
        Turn::Shot { shooter: Side::First, outcome: ShotOutcome::Miss, .. }
    ));
    assert!(matches!(
        session.step(&mut rng).unwrap(),
        Turn::Shot { shooter: Side::Second, outcome: ShotOutcome::Miss, .. }
    ));
    assert!(matches!(
        session.step(&mut rng).unwrap(),
        Turn::Shot { shooter: Side::First, outcome: ShotOutcome::Hit, .. }
    ));
    assert_eq!(
        session.step(&mut rng).unwrap(),
        Turn::Rejected {
            shooter: Side::First,
            coord: c(0, 0),
            error: BoardError::AlreadyTargeted
        }
    );
    assert!(matches!(
        session.step(&mut rng).unwrap(),
        Turn::Shot { shooter: Side::First, outcome: ShotOutcome::Sunk, .. }
    ));
    assert_eq!(
        session.step(&mut rng).unwrap(),
        Turn::Over { winner: Side::First }
    );
}

#[test]
fn test_session_reports_second_side_win() {
    let first = Scripted::boxed(&[Move::Fire(c(5, 5))]);
    let second = Scripted::boxed(&[Move::Fire(c(0, 0))]);
    let mut session = Session::new(small_engine(), first, second);
    let mut rng = SmallRng::seed_from_u64(1);

    session.step(&mut rng).unwrap();
    assert!(matches!(
        session.step(&mut rng).unwrap(),
        Turn::Shot { shooter: Side::Second, outcome: ShotOutcome::Sunk, .. }
    ));
    assert_eq!(
        session.step(&mut rng).unwrap(),
        Turn::Over { winner: Side::Second }
    );
    assert_eq!(
        session.run(&mut rng, |_, _| {}).unwrap(),
        Outcome::Winner(Side::Second)
    );
}

#[test]
fn test_quit_stops_without_mutation() {
    let first = Scripted::boxed(&[Move::Quit]);
    let second = Scripted::boxed(&[]);
    let mut session = Session::new(small_engine(), first, second);
    let mut rng = SmallRng::seed_from_u64(1);

    let mut steps = 0;
    let outcome = session.run(&mut rng, |_, _| steps += 1).unwrap();
    assert_eq!(outcome, Outcome::Quit(Side::First));
    assert_eq!(steps, 1);
    assert!(session.engine().board(Side::Second).targeted().is_empty());
    assert_eq!(session.engine().status(), GameStatus::Active(Side::First));
}

#[test]
fn test_ai_vs_ai_game() {
    let config = GameConfig::default();
    let mut rng = SmallRng::seed_from_u64(123);
    let b1 = random_board(&config, &mut rng).unwrap();
    let b2 = random_board(&config, &mut rng).unwrap();
    let mut session = Session::new(
        GameEngine::new(b1, b2),
        Box::new(AiPlayer::new()),
        Box::new(AiPlayer::new()),
    );

    let mut rejected = 0;
    let outcome = session
        .run(&mut rng, |_, turn| {
            if let Turn::Rejected { .. } = turn {
                rejected += 1;
            }
        })
        .unwrap();

    let Outcome::Winner(winner) = outcome else {
        panic!("computer players never quit");
    };
    let engine = session.engine();
    assert_eq!(rejected, 0);
    assert!(engine.board(winner.opponent()).all_sunk());
    assert!(!engine.board(winner).all_sunk());
    assert_eq!(engine.board(winner.opponent()).sunk_ships(), config.fleet.len());
    assert!(engine.shots(winner) <= 36);
}

#[test]
fn test_seeded_games_are_reproducible() {
    let play = |seed: u64| {
        let config = GameConfig::default();
        let mut rng = SmallRng::seed_from_u64(seed);
        let b1 = random_board(&config, &mut rng).unwrap();
        let b2 = random_board(&config, &mut rng).unwrap();
        let mut session = Session::new(
            GameEngine::new(b1, b2),
            Box::new(AiPlayer::new()),
            Box::new(AiPlayer::new()),
        );
        let mut log = Vec::new();
        session.run(&mut rng, |_, turn| log.push(turn.clone())).unwrap();
        log
    };
    assert_eq!(play(5), play(5));
}
