//! One-shot prophecy for cards named on the command line.

use augur_core::{build_prompt, render_lines};
use augur_oracle::{HttpCompletionClient, OracleConfig, ProphecyRequester};
use colored::Colorize;

pub async fn run(names: &[String]) -> Result<(), String> {
    let cards = super::find_cards(names)?;
    let prompt = build_prompt(&cards).map_err(|e| e.to_string())?;

    let config = OracleConfig::from_env();
    let client = HttpCompletionClient::new(&config);
    let mut requester = ProphecyRequester::new(client, config);

    eprintln!("  {}", "Please wait, I'm thinking".dimmed());
    let text = requester
        .request(&prompt)
        .await
        .map_err(|e| format!("prophecy failed: {e}"))?;

    super::print_paragraphs(&render_lines(&text));
    Ok(())
}
