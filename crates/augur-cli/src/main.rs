//! CLI frontend for the Augur tarot reader.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "augur",
    about = "Augur: swipe through tarot cards and receive a prophecy",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log swipes and requests to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive reading
    Read {
        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,

        /// Number of cards laid out (at most 255)
        #[arg(short, long, default_value = "3", value_parser = clap::value_parser!(u8))]
        draw: u8,

        /// Write the reading journal as markdown when the reading ends
        #[arg(short, long)]
        transcript: Option<PathBuf>,
    },

    /// List the 22 cards of the major arcana
    Catalog {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Draw random cards without starting a reading
    Draw {
        /// Number of cards to draw (at most 255)
        #[arg(short = 'n', long, default_value = "3", value_parser = clap::value_parser!(u8))]
        count: u8,

        /// RNG seed for a reproducible draw
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Print the prompt that would be sent for the given cards
    Prompt {
        /// Card names, in selection order
        #[arg(required = true)]
        cards: Vec<String>,
    },

    /// Ask for a prophecy for the given cards and print it
    Ask {
        /// Card names, in selection order
        #[arg(required = true)]
        cards: Vec<String>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Read {
            seed,
            draw,
            transcript,
        } => commands::read::run(seed, usize::from(draw), transcript.as_deref()).await,
        Commands::Catalog { json } => commands::catalog::run(json),
        Commands::Draw { count, seed } => commands::draw::run(usize::from(count), seed),
        Commands::Prompt { cards } => commands::prompt::run(&cards),
        Commands::Ask { cards } => commands::ask::run(&cards).await,
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
