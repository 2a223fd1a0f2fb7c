//! Output seam between the engine and whatever draws the carousel.
//!
//! The browser bridge implements this against the DOM; tests implement it
//! with a recorder. The engine never renders anything itself.

use crate::api::types::{NavState, Position};
use crate::deck::Card;
use crate::layout::CardPose;

/// Everything the engine pushes out to the views.
pub trait ViewSink {
    /// Apply a full relayout. `poses[i]` belongs to card `i`.
    fn apply_layout(&mut self, poses: &[CardPose]);

    /// The detail panel starts fading out ahead of a text swap.
    fn begin_detail_fade(&mut self) {}

    /// Replace the detail panel text with `card` and end any fade.
    fn commit_detail(&mut self, index: usize, card: &Card);

    /// Update the `current/total` indicator.
    fn set_position(&mut self, position: Position);

    /// Enable or disable the previous/next buttons.
    fn set_nav_state(&mut self, nav: NavState);

    /// Replace the location fragment (no new history entry). `fragment`
    /// excludes the leading `#`.
    fn replace_fragment(&mut self, fragment: &str);

    /// Hint that the image at `path` will be needed soon.
    fn preload_image(&mut self, _path: &str) {}

    /// A drag session started or ended on the track.
    fn set_dragging(&mut self, _active: bool) {}

    /// The first frame has settled; enable entrance transitions. Followed
    /// by a repeat of the current layout.
    fn reveal(&mut self) {}
}
