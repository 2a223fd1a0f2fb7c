use log::debug;

use crate::api::types::{NavState, Position};
use crate::core::time::Deferred;
use crate::deck::DeckStore;
use crate::layout::{LayoutBuffer, LayoutParams};
use super::sink::ViewSink;

/// Projects the current index onto every view.
///
/// Layout, indicator and buttons update in the same call as the index change.
/// The detail text swaps only after the fade delay, and a newer change
/// supersedes a pending swap so stale text is never committed.
#[derive(Debug)]
pub struct ViewSynchronizer {
    params: LayoutParams,
    layout: LayoutBuffer,
    fade: Deferred<usize>,
}

impl ViewSynchronizer {
    pub fn new(params: LayoutParams, fade_delay_ms: f32) -> Self {
        Self {
            params,
            layout: LayoutBuffer::new(),
            fade: Deferred::new(fade_delay_ms),
        }
    }

    /// First paint: everything applied at once, detail text without a fade.
    pub fn render_initial(&mut self, index: usize, deck: &DeckStore, sink: &mut impl ViewSink) {
        self.fade.cancel();
        self.relayout(index, deck.len(), sink);
        if let Ok(card) = deck.by_index(index) {
            sink.commit_detail(index, card);
        }
        self.update_chrome(index, deck.len(), sink);
    }

    /// React to an applied index change.
    pub fn index_changed(&mut self, index: usize, deck: &DeckStore, sink: &mut impl ViewSink) {
        self.relayout(index, deck.len(), sink);
        sink.begin_detail_fade();
        let generation = self.fade.schedule(index);
        debug!("view: detail swap to {} scheduled (gen {})", index, generation);
        self.update_chrome(index, deck.len(), sink);
    }

    /// Advance the fade timer. Returns `true` if detail text was committed.
    pub fn tick(&mut self, dt_ms: f32, deck: &DeckStore, sink: &mut impl ViewSink) -> bool {
        let Some(index) = self.fade.advance(dt_ms) else {
            return false;
        };
        match deck.by_index(index) {
            Ok(card) => {
                sink.commit_detail(index, card);
                true
            }
            Err(err) => {
                debug!("view: dropped detail swap: {}", err);
                false
            }
        }
    }

    /// Entrance reveal: let the sink enable transitions, then repaint the
    /// current poses so they animate in.
    pub fn reveal(&self, sink: &mut impl ViewSink) {
        sink.reveal();
        sink.apply_layout(self.layout.poses());
    }

    pub fn layout(&self) -> &LayoutBuffer {
        &self.layout
    }

    pub fn fade_pending(&self) -> bool {
        self.fade.is_pending()
    }

    fn relayout(&mut self, index: usize, total: usize, sink: &mut impl ViewSink) {
        self.layout.relayout(index, total, &self.params);
        sink.apply_layout(self.layout.poses());
    }

    fn update_chrome(&self, index: usize, total: usize, sink: &mut impl ViewSink) {
        sink.set_position(Position::at(index, total));
        sink.set_nav_state(NavState::at(index, total));
    }
}
