use log::{info, warn};
use thiserror::Error;

use super::manifest::{Card, DeckManifest};
use super::slug::slugify;

/// Failure to obtain a usable deck. Never fatal: callers degrade to
/// [`DeckStore::empty`].
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("deck source unreachable: {0}")]
    Unreachable(String),
    #[error("deck document is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("deck document contains no cards")]
    NoCards,
}

/// Failed lookup into a loaded deck.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no card with slug `{slug}`")]
    NotFound { slug: String },
    #[error("index {index} out of range for deck of {len}")]
    OutOfRange { index: usize, len: usize },
}

/// Read-only, ordered card storage with slug lookup.
/// Built once at startup and never mutated.
#[derive(Debug, Clone, Default)]
pub struct DeckStore {
    cards: Vec<Card>,
    slugs: Vec<String>,
}

impl DeckStore {
    /// An empty deck. Every navigation against it is a no-op.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse and validate a deck document.
    pub fn load(json: &str) -> Result<Self, LoadError> {
        let manifest = DeckManifest::from_json(json)?;
        Self::from_cards(manifest.cards)
    }

    /// Build a store from already-parsed cards.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, LoadError> {
        if cards.is_empty() {
            return Err(LoadError::NoCards);
        }
        let slugs: Vec<String> = cards.iter().map(|c| slugify(&c.name)).collect();
        for (i, slug) in slugs.iter().enumerate() {
            if slugs[..i].contains(slug) {
                warn!("deck: duplicate slug `{}` at index {}; first match wins", slug, i);
            }
        }
        info!("deck: loaded {} cards", cards.len());
        Ok(Self { cards, slugs })
    }

    /// Collapse a load result into a store, logging and degrading on failure.
    pub fn or_empty(result: Result<Self, LoadError>) -> Self {
        result.unwrap_or_else(|err| {
            warn!("deck: {}; continuing with an empty deck", err);
            Self::empty()
        })
    }

    /// Parse `json`, degrading to an empty deck on any failure.
    pub fn load_or_empty(json: &str) -> Self {
        Self::or_empty(Self::load(json))
    }

    /// Index of the first card whose slug equals `slug`.
    pub fn by_slug(&self, slug: &str) -> Result<usize, LookupError> {
        self.slugs
            .iter()
            .position(|s| s == slug)
            .ok_or_else(|| LookupError::NotFound { slug: slug.to_string() })
    }

    /// Card at `index`.
    pub fn by_index(&self, index: usize) -> Result<&Card, LookupError> {
        self.cards.get(index).ok_or(LookupError::OutOfRange {
            index,
            len: self.cards.len(),
        })
    }

    /// Slug of the card at `index`.
    pub fn slug(&self, index: usize) -> Option<&str> {
        self.slugs.get(index).map(String::as_str)
    }

    /// Image resource path for the card at `index`: `<dir>/<slug>.<ext>`.
    pub fn image_path(&self, index: usize, dir: &str, ext: &str) -> Option<String> {
        self.slug(index).map(|slug| format!("{dir}/{slug}.{ext}"))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
