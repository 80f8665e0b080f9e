#![cfg(feature = "std")]

use std::io::{self, BufRead, Write};

use crate::core::{Board, Cell, Coord, Orientation, ShipType, BOARD_SIZE};
use crate::game::Side;

use super::{Notice, Presenter, Prompt, SoundCue};

fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    format!("{}{}", col, r + 1)
}

/// Parse a target typed as `A5` (column letter, 1-based row) or as two
/// 0-based numbers `4 0` (row then column).
///
/// Only the syntax is checked here: `K5` parses to `(4, 10)` and is left to
/// the board to reject as out of bounds.
pub fn parse_coord(input: &str) -> Result<Coord, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    let mut parts = input.split_whitespace();
    if let (Some(a), Some(b), None) = (parts.next(), parts.next(), parts.next()) {
        let row = a
            .parse::<usize>()
            .map_err(|_| format!("Invalid row '{}' - must be a number", a))?;
        let col = b
            .parse::<usize>()
            .map_err(|_| format!("Invalid column '{}' - must be a number", b))?;
        return Ok((row, col));
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8 - b'A') as usize;
    let row_str: String = chars.collect();
    let row: usize = row_str
        .trim()
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 {
        return Err("Row cannot be 0 - must be 1-10".to_string());
    }
    Ok((row - 1, col))
}

/// Parse `H`/`V` (or the full words) into an orientation.
pub fn parse_orientation(input: &str) -> Result<Orientation, String> {
    match input.trim().to_ascii_lowercase().as_str() {
        "h" | "horizontal" => Ok(Orientation::Horizontal),
        "v" | "vertical" => Ok(Orientation::Vertical),
        other => Err(format!("Invalid orientation '{}' - use H or V", other)),
    }
}

/// Reads coordinates and orientations line by line, re-asking on anything
/// that does not parse.
pub struct TerminalPrompt<R, W> {
    input: R,
    output: W,
}

impl TerminalPrompt<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn read_line(&mut self, question: &str) -> Option<String> {
        let _ = write!(self.output, "{}", question);
        let _ = self.output.flush();
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }

    /// Ask a yes/no question; end of input counts as no.
    pub fn confirm(&mut self, question: &str) -> bool {
        self.read_line(question)
            .map(|answer| matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
            .unwrap_or(false)
    }

    fn ask<T>(&mut self, question: &str, parse: fn(&str) -> Result<T, String>) -> Option<T> {
        loop {
            let line = self.read_line(question)?;
            if line.eq_ignore_ascii_case("help") {
                print_help(&mut self.output);
                continue;
            }
            match parse(&line) {
                Ok(value) => return Some(value),
                Err(e) => {
                    let _ = writeln!(self.output, "✗ {}", e);
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> Prompt for TerminalPrompt<R, W> {
    fn request_coordinate(&mut self) -> Option<Coord> {
        self.ask("Enter coordinates (e.g. A5, or 'help'): ", parse_coord)
    }

    fn request_orientation(&mut self) -> Option<Orientation> {
        self.ask("Orientation (H/V): ", parse_orientation)
    }
}

fn print_help<W: Write>(out: &mut W) {
    let _ = writeln!(out, "\n  Coordinates: <COLUMN><ROW>, e.g. A5, B10, J1");
    let _ = writeln!(out, "    or two numbers, row then column, 0-9: 4 0");
    let _ = writeln!(out, "  Orientation: H = horizontal (extends right)");
    let _ = writeln!(out, "               V = vertical (extends down)");
    let _ = writeln!(out, "  Board symbols: X = hit, O = miss, ~ = water\n");
}

/// Prints boards and events as plain text.
pub struct TerminalPresenter<W> {
    out: W,
    bell: bool,
}

impl TerminalPresenter<io::Stdout> {
    pub fn stdout(bell: bool) -> Self {
        Self::new(io::stdout(), bell)
    }
}

impl<W: Write> TerminalPresenter<W> {
    /// `bell` rings the terminal bell on sound cues.
    pub fn new(out: W, bell: bool) -> Self {
        Self { out, bell }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn header(&mut self) -> io::Result<()> {
        write!(self.out, "    ")?;
        for c in 0..BOARD_SIZE {
            write!(self.out, " {}", (b'A' + c as u8) as char)?;
        }
        Ok(())
    }

    fn draw_boards(&mut self, own: &Board, opponent: &Board) -> io::Result<()> {
        let enemy = opponent.opponent_view();
        writeln!(self.out, "\n     YOUR FLEET                 ENEMY WATERS")?;
        self.header()?;
        write!(self.out, "    ")?;
        self.header()?;
        writeln!(self.out)?;
        for r in 0..BOARD_SIZE {
            write!(self.out, "  {:2}", r + 1)?;
            for cell in own.visible()[r] {
                write!(self.out, " {}", cell.symbol())?;
            }
            write!(self.out, "      {:2}", r + 1)?;
            for cell in enemy[r] {
                write!(self.out, " {}", cell.symbol())?;
            }
            writeln!(self.out)?;
        }
        writeln!(self.out, "\n    Enemy fleet:")?;
        for status in opponent.fleet_status() {
            let state = if status.sunk {
                "SUNK".to_string()
            } else {
                format!("{}/{} afloat", status.remaining, status.size)
            };
            writeln!(self.out, "      {:<10} {}", status.name, state)?;
        }
        Ok(())
    }

    fn draw_placement(&mut self, board: &Board, next: ShipType) -> io::Result<()> {
        writeln!(self.out)?;
        self.header()?;
        writeln!(self.out)?;
        for (r, row) in board.truth().iter().enumerate() {
            write!(self.out, "  {:2}", r + 1)?;
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    other => other.symbol(),
                };
                write!(self.out, " {}", ch)?;
            }
            writeln!(self.out)?;
        }
        writeln!(
            self.out,
            "\nPlace your {} (length {}).",
            next.name(),
            next.length()
        )
    }

    fn describe(&mut self, notice: Notice) -> io::Result<()> {
        match notice {
            Notice::Outcome {
                side,
                coord,
                outcome,
            } => {
                let at = coord_to_string(coord.0, coord.1);
                let line = match (side, outcome.ship(), outcome.is_sunk()) {
                    (Side::Player, None, _) => format!("💧 Miss at {}.", at),
                    (Side::Player, Some(name), false) => format!("🎯 HIT on {} at {}!", name, at),
                    (Side::Player, Some(name), true) => {
                        format!("💥 SUNK! You destroyed the enemy's {}!", name)
                    }
                    (Side::Opponent, None, _) => format!("Enemy missed at {}.", at),
                    (Side::Opponent, Some(name), false) => {
                        format!("⚠️  Enemy hit your {} at {}!", name, at)
                    }
                    (Side::Opponent, Some(name), true) => {
                        format!("💀 Enemy destroyed your {} at {}!", name, at)
                    }
                };
                writeln!(self.out, "{}", line)
            }
            Notice::Rejected { coord, error, .. } => {
                writeln!(self.out, "✗ {} ({}, {}) - choose another target.", error, coord.0, coord.1)
            }
            Notice::PlacementRejected { ship, error } => {
                writeln!(self.out, "✗ Cannot place {}: {}", ship, error)
            }
            Notice::Placed { ship } => writeln!(self.out, "✓ {} placed.", ship),
            Notice::GameOver { winner } => match winner {
                Side::Player => writeln!(self.out, "\n🎉 VICTORY! You have sunk all enemy ships!"),
                Side::Opponent => writeln!(self.out, "\n☠  DEFEAT. Your fleet has been destroyed."),
            },
            Notice::Sound(cue) => {
                if self.bell && matches!(cue, SoundCue::Hit | SoundCue::Win | SoundCue::GameOver) {
                    write!(self.out, "\x07")?;
                }
                Ok(())
            }
        }
    }
}

impl<W: Write> Presenter for TerminalPresenter<W> {
    fn notify(&mut self, notice: Notice) {
        let _ = self.describe(notice).and_then(|_| self.out.flush());
    }

    fn render(&mut self, own: &Board, opponent: &Board) {
        let _ = self.draw_boards(own, opponent);
    }

    fn render_placement(&mut self, board: &Board, next: ShipType) {
        let _ = self.draw_placement(board, next);
    }
}
