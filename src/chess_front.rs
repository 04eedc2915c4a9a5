//! Interactive loop for the chess mini-game.
//!
//! Clicks become typed squares: with nothing selected the entered square
//! selects a piece, with a selection pending it is the move target.
//! White renders red and Black renders blue.

use colored::Colorize;
use roman_chess::{ClickOutcome, Coord, Match, Side};
use std::io::{self, BufRead, Write};

pub fn run() -> io::Result<()> {
    let mut game = Match::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Roman chess. Enter a square like e2, or: new, dump, quit.");
    loop {
        render(&game);
        print!("{} to move (move {}) > ", game.turn(), game.move_counter());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let input = line?.trim().to_lowercase();
        match input.as_str() {
            "" => continue,
            "quit" | "q" => return Ok(()),
            "new" => {
                game.reset();
                println!("New game.");
            }
            "dump" => {
                let json = serde_json::to_string_pretty(&game).expect("state serializes");
                println!("{json}");
            }
            square => match parse_square(square) {
                Some(at) => narrate(game.click(at)),
                None => println!("Unrecognized input: {square}"),
            },
        }
    }
}

fn narrate(outcome: ClickOutcome) {
    match outcome {
        ClickOutcome::Ignored => println!("Nothing to select there."),
        ClickOutcome::Selected(at) => println!("Selected {at}."),
        ClickOutcome::Rejected => println!("Illegal move; selection cleared."),
        ClickOutcome::Moved(record) => {
            match record.captured {
                Some(piece) => println!(
                    "{} {} -> {}, taking the {}.",
                    record.piece.kind, record.from, record.to, piece.kind
                ),
                None => println!("{} {} -> {}.", record.piece.kind, record.from, record.to),
            };
        }
    }
}

/// Parse algebraic input (`e2`) into a board coordinate; rank 8 is row 0.
fn parse_square(input: &str) -> Option<Coord> {
    let bytes = input.as_bytes();
    if bytes.len() != 2 {
        return None;
    }
    let col = bytes[0].checked_sub(b'a')?;
    let rank = (bytes[1] as char).to_digit(10)?;
    if !(1..=8).contains(&rank) {
        return None;
    }
    Coord::new(8 - rank as u8, col).ok()
}

fn render(game: &Match) {
    for row in 0..8u8 {
        print!("{} ", 8 - row);
        for col in 0..8u8 {
            let at = Coord::new(row, col).expect("render coordinate in range");
            let glyph = match game.board().piece_at(at) {
                Some(piece) => {
                    let symbol = piece.kind.symbol().to_string();
                    match piece.side {
                        Side::White => symbol.red(),
                        Side::Black => symbol.blue(),
                    }
                }
                None => "·".dimmed(),
            };
            if game.selection() == Some(at) {
                print!("[{glyph}]");
            } else {
                print!(" {glyph} ");
            }
        }
        println!();
    }
    println!("   a  b  c  d  e  f  g  h");
}
