use serde::{Deserialize, Serialize};

/// Deck document as served to the page (`content/cards.json`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeckManifest {
    /// Cards in display order.
    pub cards: Vec<Card>,
}

/// A single card. Identity is `name`; the slug is derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Roman numeral shown above the name (e.g., "XIV").
    pub numeral: String,
    pub name: String,
    pub theme: String,
    pub summary: String,
    pub interpretation: String,
    /// Symbolic elements, in display order.
    #[serde(default)]
    pub elements: Vec<CardElement>,
}

/// A named symbol on a card and what it means.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardElement {
    pub name: String,
    pub meaning: String,
}

impl DeckManifest {
    /// Parse a deck document from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

impl Card {
    /// Minimal card with only a name, for tests and fixtures.
    pub fn named(numeral: &str, name: &str) -> Self {
        Self {
            numeral: numeral.to_string(),
            name: name.to_string(),
            theme: String::new(),
            summary: String::new(),
            interpretation: String::new(),
            elements: Vec::new(),
        }
    }
}
