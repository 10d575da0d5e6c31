//! The major-arcana catalog.
//!
//! Cards are static data: every card handed out by the deck is a copy of
//! one of the 22 catalog entries.

use rand::Rng;
use rand::rngs::StdRng;
use serde::Serialize;

use crate::error::{CoreError, CoreResult};

/// A tarot card from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Display name, e.g. "The Fool".
    pub name: &'static str,
    /// Artwork location.
    pub image_url: &'static str,
}

impl Card {
    const fn new(name: &'static str, image_url: &'static str) -> Self {
        Self { name, image_url }
    }

    /// Look up a catalog card by name (case-insensitive, surrounding
    /// whitespace ignored).
    pub fn find(name: &str) -> CoreResult<Self> {
        let wanted = name.trim();
        CATALOG
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(wanted))
            .copied()
            .ok_or_else(|| CoreError::UnknownCard(wanted.to_string()))
    }

    /// Pick a uniformly random card from the catalog.
    pub fn random(rng: &mut StdRng) -> Self {
        CATALOG[rng.random_range(0..CATALOG.len())]
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The 22 major arcana in traditional order.
pub const CATALOG: [Card; 22] = [
    Card::new("The Fool", "https://randomtarotcard.com/TheFool.jpg"),
    Card::new("The Magician", "https://randomtarotcard.com/TheMagician.jpg"),
    Card::new(
        "The High Priestess",
        "https://randomtarotcard.com/TheHighPriestess.jpg",
    ),
    Card::new("The Empress", "https://randomtarotcard.com/TheEmpress.jpg"),
    Card::new("The Emperor", "https://randomtarotcard.com/TheEmperor.jpg"),
    Card::new(
        "The Hierophant",
        "https://randomtarotcard.com/TheHierophant.jpg",
    ),
    Card::new("The Lovers", "https://randomtarotcard.com/TheLovers.jpg"),
    Card::new("The Chariot", "https://randomtarotcard.com/TheChariot.jpg"),
    Card::new("Strength", "https://randomtarotcard.com/Strength.jpg"),
    Card::new("The Hermit", "https://randomtarotcard.com/TheHermit.jpg"),
    Card::new(
        "Wheel of Fortune",
        "https://randomtarotcard.com/WheelofFortune.jpg",
    ),
    Card::new("Justice", "https://randomtarotcard.com/Justice.jpg"),
    Card::new(
        "The Hanged Man",
        "https://randomtarotcard.com/TheHangedMan.jpg",
    ),
    Card::new("Death", "https://randomtarotcard.com/Death.jpg"),
    Card::new("Temperance", "https://randomtarotcard.com/Temperance.jpg"),
    Card::new("The Devil", "https://randomtarotcard.com/TheDevil.jpg"),
    Card::new("The Tower", "https://randomtarotcard.com/TheTower.jpg"),
    Card::new("The Star", "https://randomtarotcard.com/TheStar.jpg"),
    Card::new("The Moon", "https://randomtarotcard.com/TheMoon.jpg"),
    Card::new("The Sun", "https://randomtarotcard.com/TheSun.jpg"),
    Card::new("Judgement", "https://randomtarotcard.com/Judgement.jpg"),
    Card::new("The World", "https://randomtarotcard.com/TheWorld.jpg"),
];
