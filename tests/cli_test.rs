use std::io::Cursor;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::cli::{render_board, score_line};
use seabattle::player::cli::parse_coord;
use seabattle::{Board, BoardError, CliPlayer, Coord, Move, Orientation, Player, Ship, ShotOutcome};

fn cli(input: &str) -> CliPlayer<Cursor<Vec<u8>>, Vec<u8>> {
    CliPlayer::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn written(player: &CliPlayer<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(player.output().clone()).unwrap()
}

fn one_ship_board() -> Board {
    let mut board = Board::new(6);
    board
        .place_ship(Ship::new(Coord::new(0, 0), 2, Orientation::Horizontal))
        .unwrap();
    board
}

#[test]
fn test_parse_coord() {
    assert_eq!(parse_coord("1 1", 6), Ok(Coord::new(0, 0)));
    assert_eq!(parse_coord("  6   3 ", 6), Ok(Coord::new(5, 2)));
    assert_eq!(parse_coord("2,4", 6), Ok(Coord::new(1, 3)));
    assert!(parse_coord("", 6).is_err());
    assert!(parse_coord("3", 6).is_err());
    assert!(parse_coord("1 2 3", 6).is_err());
    assert!(parse_coord("a 1", 6).is_err());
    assert!(parse_coord("0 1", 6).is_err());
    assert!(parse_coord("1 7", 6).is_err());
    assert!(parse_coord("-1 2", 6).is_err());
}

#[test]
fn test_cli_reprompts_until_valid() {
    let mut player = cli("7 1\nabc\n2 3\n");
    let mut rng = SmallRng::seed_from_u64(1);
    let mv = player.select_target(&mut rng, &one_ship_board()).unwrap();
    assert_eq!(mv, Move::Fire(Coord::new(1, 2)));
    let out = written(&player);
    assert!(out.contains("out of bounds"));
    assert!(out.contains("Enter two numbers"));
}

#[test]
fn test_cli_quit_and_eof() {
    let mut rng = SmallRng::seed_from_u64(1);
    let board = one_ship_board();
    assert_eq!(cli("q\n").select_target(&mut rng, &board).unwrap(), Move::Quit);
    assert_eq!(cli("QUIT\n").select_target(&mut rng, &board).unwrap(), Move::Quit);
    assert_eq!(cli("").select_target(&mut rng, &board).unwrap(), Move::Quit);
}

#[test]
fn test_cli_empty_line_takes_suggestion() {
    let mut board = one_ship_board();
    board.fire(Coord::new(0, 0)).unwrap();
    let mut player = cli("help\n\n");
    let mut rng = SmallRng::seed_from_u64(4);
    let Move::Fire(coord) = player.select_target(&mut rng, &board).unwrap() else {
        panic!("expected a shot");
    };
    // (0, 0) is damaged, so the suggestion finishes the ship
    assert!([Coord::new(1, 0), Coord::new(0, 1)].contains(&coord));
    let out = written(&player);
    assert!(out.contains("Targeting help"));
    assert!(out.contains("Using suggestion"));
}

#[test]
fn test_cli_reports_results() {
    let mut player = cli("");
    player.handle_shot_result(Coord::new(0, 0), &Ok(ShotOutcome::Sunk));
    player.handle_shot_result(Coord::new(0, 0), &Err(BoardError::AlreadyTargeted));
    player.handle_opponent_shot(Coord::new(2, 2), ShotOutcome::Miss);
    let out = written(&player);
    assert!(out.contains("SUNK"));
    assert!(out.contains("already targeted"));
    assert!(out.contains("Enemy missed at (3, 3)"));
}

#[test]
fn test_render_hides_ships_when_concealed() {
    let mut board = one_ship_board();
    let shown = render_board(&board);
    assert_eq!(shown.matches('S').count(), 2);

    board.set_concealed(true);
    assert!(!render_board(&board).contains('S'));

    board.fire(Coord::new(0, 0)).unwrap();
    board.fire(Coord::new(5, 5)).unwrap();
    let concealed = render_board(&board);
    assert_eq!(concealed.matches('X').count(), 1);
    assert_eq!(concealed.matches('o').count(), 1);
    assert!(!concealed.contains('S'));
    assert_eq!(concealed.lines().count(), 7);
}

#[test]
fn test_score_line() {
    let mut board = one_ship_board();
    assert_eq!(score_line("You", &board), "You: 1 afloat, 0 sunk");
    board.fire(Coord::new(0, 0)).unwrap();
    board.fire(Coord::new(0, 1)).unwrap();
    assert_eq!(score_line("You", &board), "You: 0 afloat, 1 sunk");
}
