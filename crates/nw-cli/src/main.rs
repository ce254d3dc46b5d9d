//! CLI frontend for the Nebelwald branching-story player.

mod commands;

use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "nw",
    about = "Nebelwald — a branching-story player",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the built-in story interactively
    Play {
        /// RNG seed for reproducible random endings
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Validate the story graph and report its shape
    Check,

    /// Print the story graph structure
    Graph,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { seed } => commands::play::run(seed),
        Commands::Check => commands::check::run(),
        Commands::Graph => commands::graph::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
