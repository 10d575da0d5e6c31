use augur_core::Deck;
use comfy_table::{ContentArrangement, Table};
use rand::SeedableRng;
use rand::rngs::StdRng;

pub fn run(count: usize, seed: Option<u64>) -> Result<(), String> {
    let mut rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
    let deck = Deck::draw(count, &mut rng);

    if deck.is_empty() {
        println!("  No cards drawn.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Position", "Card"]);

    for (i, card) in deck.iter().enumerate() {
        table.add_row(vec![(i + 1).to_string(), card.name.to_string()]);
    }

    println!("{table}");

    Ok(())
}
