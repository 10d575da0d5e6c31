use augur_core::build_prompt;

pub fn run(names: &[String]) -> Result<(), String> {
    let cards = super::find_cards(names)?;
    let prompt = build_prompt(&cards).map_err(|e| e.to_string())?;
    println!("{prompt}");
    Ok(())
}
