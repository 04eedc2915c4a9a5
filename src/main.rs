//! Terminal front-end for the ludus mini-games.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod chess_front;
mod race_front;

#[derive(Parser)]
#[command(name = "ludus", version, about = "Roman mini-games in the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play the simplified Roman chess mini-game
    Chess,
    /// Play the empire race board game
    Race {
        /// Seed the dice for a reproducible session
        #[arg(long)]
        seed: Option<u64>,
        /// Skip animation and movement delays
        #[arg(long)]
        fast: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Chess => chess_front::run(),
        Command::Race { seed, fast } => race_front::run(seed, fast),
    };
    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
