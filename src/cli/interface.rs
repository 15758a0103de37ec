use std::fmt::Write;

use crate::core::{Board, CellState, GameEngine, Side};

fn symbol(cell: CellState, concealed: bool) -> char {
    match cell {
        CellState::Hit => 'X',
        CellState::Miss => 'o',
        CellState::Occupied if !concealed => 'S',
        CellState::Occupied | CellState::Empty => '.',
    }
}

/// Render one board. Intact ship cells are blank when the board is concealed.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::new();
    let _ = write!(out, "   ");
    for c in 1..=size {
        let _ = write!(out, " {:>2}", c);
    }
    out.push('\n');
    for (i, coord) in board.coords().enumerate() {
        if i % size == 0 {
            let _ = write!(out, "{:>2} ", coord.row + 1);
        }
        let cell = board.cell(coord).unwrap_or(CellState::Empty);
        let _ = write!(out, "  {}", symbol(cell, board.is_concealed()));
        if i % size == size - 1 {
            out.push('\n');
        }
    }
    out
}

/// Ships left and sunk on one board.
pub fn score_line(label: &str, board: &Board) -> String {
    format!("{}: {} afloat, {} sunk", label, board.live_ships(), board.sunk_ships())
}

/// Print both boards with their labels, `mine` first.
pub fn print_player_view(engine: &GameEngine, mine: Side, labels: [&str; 2]) {
    let theirs = mine.opponent();
    std::println!("{}", "-".repeat(24));
    std::println!("{}:", labels[mine.index()]);
    std::print!("{}", render_board(engine.board(mine)));
    std::println!("{}", "-".repeat(24));
    std::println!("{}:", labels[theirs.index()]);
    std::print!("{}", render_board(engine.board(theirs)));
}

/// Print the score line for both sides.
pub fn print_scores(engine: &GameEngine, labels: [&str; 2]) {
    std::println!(
        "{} | {}",
        score_line(labels[0], engine.board(Side::First)),
        score_line(labels[1], engine.board(Side::Second))
    );
}
