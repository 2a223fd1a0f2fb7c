pub mod manifest;
pub mod slug;
pub mod store;

pub use manifest::{Card, CardElement, DeckManifest};
pub use slug::slugify;
pub use store::{DeckStore, LoadError, LookupError};
