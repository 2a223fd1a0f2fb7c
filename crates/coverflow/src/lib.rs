pub mod api;
pub mod core;
pub mod deck;
pub mod layout;
pub mod input;
pub mod view;
pub mod url;
pub mod bridge;

// Re-export key types at crate root for convenience
pub use api::carousel::Carousel;
pub use api::config::CarouselConfig;
pub use api::types::{Direction, MoveOutcome, NavOrigin, NavState, Position};
pub use core::index::IndexModel;
pub use core::time::Deferred;
pub use deck::{slugify, Card, CardElement, DeckManifest, DeckStore, LoadError, LookupError};
pub use layout::{layout, layout_with, CardPose, LayoutBuffer, LayoutParams, PoseInstance};
pub use input::{DragSource, DragTracker, GestureNormalizer, InputEvent, InputQueue, Key, Navigation};
pub use view::{placeholder_data_url, placeholder_svg, ViewSink, ViewSynchronizer};
pub use url::{FragmentCodec, UrlSync};
pub use bridge::{Snapshot, SnapshotHeader};
