//! The undrawn card queue and the chosen-card history.

use std::collections::VecDeque;

use rand::rngs::StdRng;

use crate::card::Card;

/// Cards waiting to be swiped. The front is the card currently offered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Deck {
    cards: VecDeque<Card>,
}

impl Deck {
    /// Create an empty deck.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a deck of `n` independent uniform picks from the catalog.
    /// Duplicates are allowed.
    pub fn draw(n: usize, rng: &mut StdRng) -> Self {
        (0..n).map(|_| Card::random(rng)).collect()
    }

    /// The card currently offered, if any.
    pub fn front(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Remove and return the front card. `None` once the deck is exhausted;
    /// there is no refill.
    pub fn pop_front(&mut self) -> Option<Card> {
        self.cards.pop_front()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Number of cards left.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether no cards are left.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

/// Cards the user swiped right on, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChosenHistory {
    cards: Vec<Card>,
}

impl ChosenHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chosen card.
    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// All chosen cards, oldest first.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Chosen card names, oldest first.
    pub fn names(&self) -> Vec<&'static str> {
        self.cards.iter().map(|c| c.name).collect()
    }

    /// Number of chosen cards.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether nothing has been chosen yet.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CATALOG;
    use rand::SeedableRng;

    #[test]
    fn draw_three_from_catalog() {
        let mut rng = StdRng::seed_from_u64(7);
        let deck = Deck::draw(3, &mut rng);
        assert_eq!(deck.len(), 3);
        assert!(deck.iter().all(|c| CATALOG.contains(c)));
    }

    #[test]
    fn draw_is_deterministic_for_seed() {
        let a = Deck::draw(3, &mut StdRng::seed_from_u64(99));
        let b = Deck::draw(3, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn pop_front_in_order_then_empty() {
        let mut deck: Deck = [CATALOG[0], CATALOG[13]].into_iter().collect();
        assert_eq!(deck.front(), Some(&CATALOG[0]));
        assert_eq!(deck.pop_front(), Some(CATALOG[0]));
        assert_eq!(deck.pop_front(), Some(CATALOG[13]));
        assert_eq!(deck.pop_front(), None);
        assert!(deck.is_empty());
    }

    #[test]
    fn empty_deck_pops_none() {
        let mut deck = Deck::new();
        assert_eq!(deck.pop_front(), None);
        assert_eq!(deck.len(), 0);
    }

    #[test]
    fn history_keeps_selection_order() {
        let mut history = ChosenHistory::new();
        history.push(CATALOG[19]);
        history.push(CATALOG[0]);
        history.push(CATALOG[19]);
        assert_eq!(history.names(), vec!["The Sun", "The Fool", "The Sun"]);
        assert_eq!(history.len(), 3);
    }
}
