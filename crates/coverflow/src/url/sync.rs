use log::debug;

use crate::deck::DeckStore;
use crate::view::ViewSink;
use super::codec::FragmentCodec;

/// Keeps the location fragment and the current index in agreement.
///
/// Tracks the fragment the location is known to hold, so an outbound write
/// only happens when the value would actually change. Inbound changes update
/// that record without writing back.
#[derive(Debug, Default)]
pub struct UrlSync {
    known: Option<String>,
}

impl UrlSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve the fragment present at startup.
    pub fn initial_index(&mut self, deck: &DeckStore, fragment: Option<&str>) -> Option<usize> {
        let fragment = fragment?;
        self.known = Some(strip_hash(fragment).to_string());
        let resolved = FragmentCodec::new(deck).decode(fragment);
        if resolved.is_none() && !strip_hash(fragment).is_empty() {
            debug!("url: initial fragment `{}` matches no card", fragment);
        }
        resolved
    }

    /// Reflect `index` into the location fragment (replace, not push).
    /// Returns whether a write happened.
    pub fn publish(&mut self, deck: &DeckStore, index: usize, sink: &mut impl ViewSink) -> bool {
        let Some(slug) = FragmentCodec::new(deck).encode(index) else {
            return false;
        };
        if self.known.as_deref() == Some(slug) {
            return false;
        }
        sink.replace_fragment(slug);
        self.known = Some(slug.to_string());
        true
    }

    /// An external fragment change. Returns the index it names, if any.
    pub fn inbound(&mut self, deck: &DeckStore, fragment: &str) -> Option<usize> {
        self.known = Some(strip_hash(fragment).to_string());
        match FragmentCodec::new(deck).resolve(fragment) {
            Ok(index) => Some(index),
            Err(err) => {
                debug!("url: ignoring fragment change: {}", err);
                None
            }
        }
    }

    /// The fragment the location is believed to hold.
    pub fn known(&self) -> Option<&str> {
        self.known.as_deref()
    }
}

fn strip_hash(fragment: &str) -> &str {
    fragment.strip_prefix('#').unwrap_or(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{NavState, Position};
    use crate::deck::Card;
    use crate::layout::CardPose;

    #[derive(Default)]
    struct Fragments(Vec<String>);

    impl ViewSink for Fragments {
        fn apply_layout(&mut self, _poses: &[CardPose]) {}
        fn commit_detail(&mut self, _index: usize, _card: &Card) {}
        fn set_position(&mut self, _position: Position) {}
        fn set_nav_state(&mut self, _nav: NavState) {}
        fn replace_fragment(&mut self, fragment: &str) {
            self.0.push(fragment.to_string());
        }
    }

    fn deck() -> DeckStore {
        DeckStore::from_cards(vec![Card::named("0", "The Fool"), Card::named("I", "The Magician")]).unwrap()
    }

    #[test]
    fn publish_writes_once_per_value() {
        let deck = deck();
        let mut url = UrlSync::new();
        let mut sink = Fragments::default();
        assert!(url.publish(&deck, 1, &mut sink));
        assert!(!url.publish(&deck, 1, &mut sink));
        assert_eq!(sink.0, vec!["the-magician"]);
    }

    #[test]
    fn inbound_records_without_writing() {
        let deck = deck();
        let mut url = UrlSync::new();
        let mut sink = Fragments::default();
        assert_eq!(url.inbound(&deck, "#the-magician"), Some(1));
        assert_eq!(url.known(), Some("the-magician"));
        assert!(!url.publish(&deck, 1, &mut sink));
        assert!(sink.0.is_empty());
    }

    #[test]
    fn unknown_inbound_is_ignored() {
        let deck = deck();
        let mut url = UrlSync::new();
        assert_eq!(url.inbound(&deck, "#nope"), None);
    }

    #[test]
    fn initial_fragment() {
        let deck = deck();
        let mut url = UrlSync::new();
        assert_eq!(url.initial_index(&deck, Some("#the-magician")), Some(1));
        assert_eq!(url.initial_index(&deck, Some("")), None);
        assert_eq!(url.initial_index(&deck, None), None);
    }
}
