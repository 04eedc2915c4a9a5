//! Interactive loop for the empire race.
//!
//! The engine runs on virtual time; this driver replays it against the wall
//! clock by sleeping until each timeline deadline, so the dice animation and
//! step-by-step movement keep their real pacing. `--fast` fast-forwards
//! instead.

use colored::Colorize;
use empire_race::{
    BuyOutcome, CellKind, PendingChoice, RaceEngine, RaceEvent, RaceState, TurnPhase,
};
use ludus_core::{DiceSource, RngDice};
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

pub fn run(seed: Option<u64>, fast: bool) -> io::Result<()> {
    let dice = match seed {
        Some(seed) => RngDice::seeded(seed),
        None => RngDice::from_entropy(),
    };
    let mut engine = RaceEngine::new(dice);
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Empire race. Commands: roll, buy, pass, pay, draw, end, board, log, dump, quit.");
    loop {
        render_status(engine.state());
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            return Ok(());
        };
        let input = line?.trim().to_lowercase();
        let result = match input.as_str() {
            "" => continue,
            "quit" | "q" => return Ok(()),
            "board" => {
                render_board(engine.state());
                continue;
            }
            "log" => {
                for entry in &engine.state().log {
                    println!("  {entry}");
                }
                continue;
            }
            "dump" => {
                let json =
                    serde_json::to_string_pretty(engine.state()).expect("state serializes");
                println!("{json}");
                continue;
            }
            "roll" => engine.roll_dice().map(|()| true),
            "buy" => engine.buy().map(|outcome| {
                if outcome == BuyOutcome::Blocked {
                    println!("Not enough denarii.");
                }
                false
            }),
            "pass" => engine.decline().map(|()| false),
            "pay" => engine.pay_rent().map(|()| false),
            "draw" => engine.draw_card().map(|_| true),
            "end" => engine.end_turn().map(|()| false),
            other => {
                println!("Unrecognized command: {other}");
                continue;
            }
        };

        match result {
            Ok(started_sequence) => {
                if started_sequence {
                    drive(&mut engine, fast);
                }
            }
            Err(err) => println!("{err}."),
        }
    }
}

/// Play out every pending timer, narrating events as they fire.
fn drive<D: DiceSource>(engine: &mut RaceEngine<D>, fast: bool) {
    while let Some(due) = engine.next_due() {
        let dt = due - engine.now_ms();
        if !fast {
            thread::sleep(Duration::from_millis(dt));
        }
        let events = engine.tick(dt);
        for event in &events {
            narrate(engine.state(), event);
        }
    }
}

fn narrate(state: &RaceState, event: &RaceEvent) {
    match event {
        RaceEvent::DiceFace(face) => {
            print!("\r  dice: {face} ");
            let _ = io::stdout().flush();
        }
        RaceEvent::DiceCommitted(roll) => println!("\r  dice: {roll}!"),
        RaceEvent::SteppedTo(position) => {
            println!("  {} steps onto {}.", current_name(state), state.cells[*position].name);
        }
        RaceEvent::LandedOn(_) => {}
        RaceEvent::ChoiceRequired(choice) => match choice {
            PendingChoice::BuyOrDecline => {
                let cell = state.current_cell();
                println!(
                    "  {} is unowned: {} denarii, rent {}. buy or pass?",
                    cell.name,
                    cell.price().unwrap_or(0),
                    cell.rent().unwrap_or(0),
                );
            }
            PendingChoice::PayRent => {
                let cell = state.current_cell();
                let owner = cell.owner.map(|o| state.participants[o].name.as_str());
                println!(
                    "  {} belongs to {}: pay {} denarii rent (pay).",
                    cell.name,
                    owner.unwrap_or("?"),
                    cell.rent().unwrap_or(0),
                );
            }
            PendingChoice::DrawCard => {
                println!("  Draw a {} card (draw).", state.current_cell().kind);
            }
        },
        RaceEvent::CardRevealed(card) => {
            let amount = format!("{} denarii", card.amount);
            let amount = if card.amount < 0 { amount.red() } else { amount.green() };
            println!("  {} ({amount})", card.description);
        }
        RaceEvent::CashApplied { participant, amount } => {
            println!(
                "  {} now holds {} denarii ({amount:+}).",
                state.participants[*participant].name, state.participants[*participant].cash
            );
        }
        RaceEvent::CardClosed => println!("  The card is shuffled back."),
    }
}

fn current_name(state: &RaceState) -> &str {
    &state.participants[state.current].name
}

fn render_status(state: &RaceState) {
    for (index, participant) in state.participants.iter().enumerate() {
        let marker = if index == state.current { "▶" } else { " " };
        println!(
            "{marker} {} - {} denarii, on {}, holds {} properties",
            participant.name,
            participant.cash,
            state.cells[participant.position].name,
            participant.properties.len(),
        );
    }
    match state.phase {
        TurnPhase::AwaitRoll => println!("  ({} may roll)", current_name(state)),
        TurnPhase::RollSpent => println!("  (end the turn with: end)"),
        _ => {}
    }
}

fn render_board(state: &RaceState) {
    for (index, cell) in state.cells.iter().enumerate() {
        let tenants: Vec<&str> = state
            .participants
            .iter()
            .filter(|p| p.position == index)
            .map(|p| p.name.as_str())
            .collect();
        let owner = cell
            .owner
            .map(|o| format!(" [{}]", state.participants[o].name))
            .unwrap_or_default();
        let detail = match cell.kind {
            CellKind::Property { price, rent } => format!(" {price}/{rent}"),
            _ => String::new(),
        };
        let here = if tenants.is_empty() {
            String::new()
        } else {
            format!("  <- {}", tenants.join(", "))
        };
        println!("{index:>2} {}{detail}{owner}{here}", cell.name);
    }
}
