use augur_core::CATALOG;
use comfy_table::{ContentArrangement, Table};

pub fn run(json: bool) -> Result<(), String> {
    if json {
        let out = serde_json::to_string_pretty(&CATALOG).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "Card", "Image"]);

    for (i, card) in CATALOG.iter().enumerate() {
        table.add_row(vec![i.to_string(), card.name.to_string(), card.image_url.to_string()]);
    }

    println!("{table}");
    println!();
    println!("  {} cards", CATALOG.len());

    Ok(())
}
