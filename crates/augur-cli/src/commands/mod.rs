pub mod ask;
pub mod catalog;
pub mod draw;
pub mod prompt;
pub mod read;

use augur_core::Card;

/// Resolve card names given on the command line.
fn find_cards(names: &[String]) -> Result<Vec<Card>, String> {
    names
        .iter()
        .map(|name| Card::find(name).map_err(|e| e.to_string()))
        .collect()
}

/// Print prophecy paragraphs, one bullet each.
fn print_paragraphs(paragraphs: &[String]) {
    for p in paragraphs {
        println!("  * {p}\n");
    }
}
