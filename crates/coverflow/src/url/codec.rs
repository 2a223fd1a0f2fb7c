use crate::deck::{DeckStore, LookupError};

/// Bidirectional mapping between card indices and location fragments.
#[derive(Debug, Clone, Copy)]
pub struct FragmentCodec<'a> {
    deck: &'a DeckStore,
}

impl<'a> FragmentCodec<'a> {
    pub fn new(deck: &'a DeckStore) -> Self {
        Self { deck }
    }

    /// Fragment for the card at `index`, without the leading `#`.
    pub fn encode(&self, index: usize) -> Option<&'a str> {
        self.deck.slug(index)
    }

    /// Index named by `fragment`. Accepts an optional leading `#`.
    pub fn decode(&self, fragment: &str) -> Option<usize> {
        self.resolve(fragment).ok()
    }

    /// Like [`decode`](Self::decode), but reports why resolution failed.
    pub fn resolve(&self, fragment: &str) -> Result<usize, LookupError> {
        let slug = fragment.strip_prefix('#').unwrap_or(fragment);
        self.deck.by_slug(slug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::{slugify, Card};

    fn deck() -> DeckStore {
        DeckStore::from_cards(vec![
            Card::named("0", "The Fool"),
            Card::named("I", "The Magician"),
            Card::named("II", "The High Priestess"),
        ])
        .unwrap()
    }

    #[test]
    fn every_card_round_trips() {
        let deck = deck();
        let codec = FragmentCodec::new(&deck);
        for (i, card) in deck.iter().enumerate() {
            assert_eq!(codec.decode(&slugify(&card.name)), Some(i));
            assert_eq!(codec.encode(i).and_then(|f| codec.decode(f)), Some(i));
        }
    }

    #[test]
    fn leading_hash_is_optional() {
        let deck = deck();
        let codec = FragmentCodec::new(&deck);
        assert_eq!(codec.decode("#the-magician"), Some(1));
        assert_eq!(codec.decode("the-magician"), Some(1));
    }

    #[test]
    fn unknown_and_empty_fragments_do_not_resolve() {
        let deck = deck();
        let codec = FragmentCodec::new(&deck);
        assert_eq!(codec.decode("#the-tower"), None);
        assert_eq!(codec.decode(""), None);
        assert_eq!(codec.decode("#"), None);
        assert_eq!(codec.encode(3), None);
    }
}
