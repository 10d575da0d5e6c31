use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;
use tokio::io::{AsyncBufReadExt, BufReader};

use augur_oracle::{HttpCompletionClient, OracleConfig};
use augur_session::{Command, ProphecySession, SessionConfig};

pub async fn run(
    seed: Option<u64>,
    draw: usize,
    transcript: Option<&Path>,
) -> Result<(), String> {
    let oracle = OracleConfig::from_env();
    let client = HttpCompletionClient::new(&oracle);
    let mut config = SessionConfig::default().with_initial_draw(draw);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    let mut session = ProphecySession::new(config, client, oracle);

    println!("  {} No more Obscurantists!", "Augur".bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    // The table is shown empty first; the cards are laid out afterwards.
    println!("  {}", "The table is empty.".dimmed());
    let deck = session.draw_initial().map_err(|e| e.to_string())?;
    println!("  Swipe your cards, my child. {} cards lie before you.", deck.len());
    if let Some(card) = deck.front() {
        println!("  Next card: {}\n", card.to_string().bold());
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next_line().await.map_err(|e| e.to_string())? else {
            break; // EOF
        };

        let command = match Command::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
                continue;
            }
        };

        if command == Command::Send && !session.chosen().is_empty() {
            println!("{}", "Please wait, I'm thinking".dimmed());
        }

        match session.execute(command).await {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if command == Command::Quit {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    if let Some(path) = transcript {
        std::fs::write(path, session.journal().export_markdown())
            .map_err(|e| format!("failed to write {}: {e}", path.display()))?;
        println!("  Transcript written to {}", path.display());
    }

    Ok(())
}
