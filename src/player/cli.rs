use std::io::{self, BufRead, Stdout, StdinLock, Write};

use rand::rngs::SmallRng;

use crate::core::{ai, Board, BoardError, Coord, ShotOutcome};

use super::{Move, Player};

/// Interactive player reading `row col` pairs from `input`.
pub struct CliPlayer<R, W> {
    input: R,
    output: W,
}

impl CliPlayer<StdinLock<'static>, Stdout> {
    /// Player bound to the process console.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> CliPlayer<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far; handy when `W` is a buffer.
    pub fn output(&self) -> &W {
        &self.output
    }
}

/// Parse a 1-indexed `row col` pair (space or comma separated) into a
/// zero-indexed coordinate on a `size` x `size` board.
pub fn parse_coord(input: &str, size: usize) -> Result<Coord, String> {
    let parts: Vec<&str> = input
        .split(|ch: char| ch.is_whitespace() || ch == ',')
        .filter(|p| !p.is_empty())
        .collect();
    let [row, col] = parts.as_slice() else {
        return Err("Enter two numbers: row and column (e.g. 3 4)".to_string());
    };
    let row = parse_axis(row, "row", size)?;
    let col = parse_axis(col, "column", size)?;
    Ok(Coord::from_user(row, col))
}

fn parse_axis(text: &str, axis: &str, size: usize) -> Result<usize, String> {
    let value: usize = text
        .parse()
        .map_err(|_| format!("Invalid {} '{}' - must be a number 1-{}", axis, text, size))?;
    if value == 0 || value > size {
        return Err(format!("{} {} out of bounds - must be 1-{}", capitalize(axis), value, size));
    }
    Ok(value)
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn is_quit(line: &str) -> bool {
    ["q", "quit", "exit"]
        .iter()
        .any(|cmd| line.eq_ignore_ascii_case(cmd))
}

impl<R: BufRead, W: Write> Player for CliPlayer<R, W> {
    fn select_target(&mut self, rng: &mut SmallRng, opponent: &Board) -> io::Result<Move> {
        let suggestion = ai::choose_target(opponent, rng);
        loop {
            match suggestion {
                Some(s) => write!(self.output, "\nYour move [suggested: {} {}] (or 'help'): ", s.row + 1, s.col + 1)?,
                None => write!(self.output, "\nYour move (or 'help'): ")?,
            }
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(Move::Quit);
            }
            let line = line.trim();

            if is_quit(line) {
                return Ok(Move::Quit);
            }
            if line.is_empty() {
                if let Some(s) = suggestion {
                    writeln!(self.output, "Using suggestion {}", s)?;
                    return Ok(Move::Fire(s));
                }
                continue;
            }
            if line.eq_ignore_ascii_case("help") {
                print_targeting_help(&mut self.output, opponent.size())?;
                continue;
            }

            match parse_coord(line, opponent.size()) {
                Ok(coord) => return Ok(Move::Fire(coord)),
                Err(e) => writeln!(self.output, "✗ {}", e)?,
            }
        }
    }

    fn handle_shot_result(&mut self, coord: Coord, result: &Result<ShotOutcome, BoardError>) {
        let _ = match result {
            Ok(ShotOutcome::Hit) => writeln!(self.output, "🎯 HIT at {}! Shoot again.", coord),
            Ok(ShotOutcome::Sunk) => writeln!(self.output, "💥 SUNK! Ship destroyed at {}. Shoot again.", coord),
            Ok(ShotOutcome::Miss) => writeln!(self.output, "💧 Miss at {}.", coord),
            Err(e) => writeln!(self.output, "✗ {}. Choose another target.", e),
        };
    }

    fn handle_opponent_shot(&mut self, coord: Coord, outcome: ShotOutcome) {
        let _ = match outcome {
            ShotOutcome::Hit => writeln!(self.output, "⚠️  Enemy hit your ship at {}", coord),
            ShotOutcome::Sunk => writeln!(self.output, "💀 Enemy sank your ship at {}", coord),
            ShotOutcome::Miss => writeln!(self.output, "✓ Enemy missed at {}", coord),
        };
    }
}

fn print_targeting_help<W: Write>(out: &mut W, size: usize) -> io::Result<()> {
    writeln!(out, "\nTargeting help")?;
    writeln!(out, "  <row> <col>  fire at that cell, both 1-{} (e.g. 2 5)", size)?;
    writeln!(out, "  ENTER        fire at the suggested cell")?;
    writeln!(out, "  q            quit the game")?;
    writeln!(out, "Board symbols: S=ship X=hit o=miss .=unknown")
}
