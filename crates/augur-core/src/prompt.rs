//! Prompt text sent to the completion service.

use crate::card::Card;
use crate::error::{CoreError, CoreResult};

/// Build the tarot-reader prompt for the chosen cards, in selection order.
pub fn build_prompt(chosen: &[Card]) -> CoreResult<String> {
    if chosen.is_empty() {
        return Err(CoreError::NoCardsChosen);
    }

    let names = chosen.iter().map(|c| c.name).collect::<Vec<_>>().join(", ");

    Ok(format!(
        "You're old Tarot Obcurantist. Please read the Tarot cards for me. \
         Send the answer without any formatting but breaked by new lines. \
         Here are the cards I've been dealt: {names}. What do they mean?"
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_names_in_order() {
        let chosen = [Card::find("The Fool").unwrap(), Card::find("Death").unwrap()];
        let prompt = build_prompt(&chosen).unwrap();
        assert!(prompt.contains("The Fool, Death"));
        assert!(prompt.ends_with("The Fool, Death. What do they mean?"));
    }

    #[test]
    fn single_card_has_no_separator() {
        let prompt = build_prompt(&[Card::find("The Star").unwrap()]).unwrap();
        assert!(prompt.contains("dealt: The Star. What"));
    }

    #[test]
    fn keeps_duplicates() {
        let sun = Card::find("The Sun").unwrap();
        let prompt = build_prompt(&[sun, sun]).unwrap();
        assert!(prompt.contains("The Sun, The Sun"));
    }

    #[test]
    fn asks_for_unformatted_text() {
        let prompt = build_prompt(&[Card::find("Justice").unwrap()]).unwrap();
        assert!(prompt.starts_with("You're old Tarot Obcurantist."));
        assert!(prompt.contains("without any formatting"));
    }

    #[test]
    fn empty_selection_fails() {
        assert_eq!(build_prompt(&[]), Err(CoreError::NoCardsChosen));
    }
}
