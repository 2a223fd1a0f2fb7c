use log::{debug, info};

use crate::api::config::CarouselConfig;
use crate::api::types::{Direction, MoveOutcome, NavOrigin, NavState, Position};
use crate::bridge::SnapshotHeader;
use crate::core::index::IndexModel;
use crate::deck::{Card, DeckStore};
use crate::input::{GestureNormalizer, InputEvent, InputQueue, Navigation};
use crate::layout::LayoutBuffer;
use crate::url::UrlSync;
use crate::view::{placeholder_data_url, ViewSink, ViewSynchronizer};

/// Frames between the first paint and the entrance reveal, so the page has
/// laid out the initial poses before transitions are enabled.
const ENTRANCE_FRAMES: u8 = 2;

/// The carousel engine: one deck, one current index, and every projection
/// of that index.
///
/// Every move goes through the [`IndexModel`]; `apply` then projects an
/// applied move, in order: relayout, detail fade, indicator and buttons,
/// location fragment, adjacent-image preload.
pub struct Carousel {
    config: CarouselConfig,
    deck: DeckStore,
    index: IndexModel,
    gestures: GestureNormalizer,
    view: ViewSynchronizer,
    url: UrlSync,
    /// Ticks left before the entrance reveal; `None` once revealed.
    entrance: Option<u8>,
}

impl Carousel {
    pub fn new(config: CarouselConfig, deck: DeckStore) -> Self {
        let index = IndexModel::new(deck.len());
        let gestures = GestureNormalizer::new(config.drag_threshold);
        let view = ViewSynchronizer::new(config.layout, config.fade_delay_ms);
        Self {
            config,
            deck,
            index,
            gestures,
            view,
            url: UrlSync::new(),
            entrance: None,
        }
    }

    /// Resolve the startup fragment and paint the first frame.
    /// The fragment is read, never written, at startup.
    pub fn start(&mut self, fragment: Option<&str>, sink: &mut impl ViewSink) {
        if let Some(initial) = self.url.initial_index(&self.deck, fragment) {
            self.index = IndexModel::with_initial(self.deck.len(), initial);
        }
        self.view.render_initial(self.index.current(), &self.deck, sink);
        self.preload_adjacent(sink);
        self.entrance = Some(ENTRANCE_FRAMES);
        info!(
            "carousel: started at {} of {}",
            self.index.current(),
            self.deck.len()
        );
    }

    /// Feed one raw input event. Returns the move it caused, if any.
    pub fn handle_input(&mut self, event: &InputEvent, sink: &mut impl ViewSink) -> Option<MoveOutcome> {
        let was_dragging = self.gestures.is_dragging();
        let navigation = self.gestures.handle(event);
        let dragging = self.gestures.is_dragging();
        if was_dragging != dragging {
            sink.set_dragging(dragging);
        }

        let origin = match event {
            InputEvent::KeyDown { .. } => NavOrigin::Keyboard,
            InputEvent::CardClick { .. } => NavOrigin::Click,
            InputEvent::Button { .. } => NavOrigin::Button,
            _ => NavOrigin::Drag,
        };
        navigation.map(|nav| self.apply_navigation(nav, origin, sink))
    }

    /// Drain `queue` in arrival order.
    pub fn process_input(&mut self, queue: &mut InputQueue, sink: &mut impl ViewSink) {
        for event in queue.drain() {
            self.handle_input(&event, sink);
        }
    }

    /// Select `target`. Out-of-range targets are no-ops.
    pub fn move_to(&mut self, target: i64, sink: &mut impl ViewSink) -> MoveOutcome {
        let outcome = self.index.move_to(target);
        self.apply(outcome, NavOrigin::Api, sink)
    }

    /// Step one card in `direction`.
    pub fn navigate(&mut self, direction: Direction, sink: &mut impl ViewSink) -> MoveOutcome {
        self.apply_navigation(Navigation::Step(direction), NavOrigin::Api, sink)
    }

    /// The location fragment changed outside the engine (e.g., user edit,
    /// back/forward to a shared link). Never writes the fragment back.
    pub fn fragment_changed(&mut self, fragment: &str, sink: &mut impl ViewSink) -> MoveOutcome {
        match self.url.inbound(&self.deck, fragment) {
            Some(index) => {
                let outcome = self.index.move_to(index as i64);
                self.apply(outcome, NavOrigin::Fragment, sink)
            }
            None => MoveOutcome::Rejected,
        }
    }

    /// Advance deferred view work by one frame of `dt_ms`.
    /// Returns `true` if the detail panel committed new text.
    pub fn tick(&mut self, dt_ms: f32, sink: &mut impl ViewSink) -> bool {
        if let Some(frames) = self.entrance {
            if frames <= 1 {
                self.entrance = None;
                self.view.reveal(sink);
            } else {
                self.entrance = Some(frames - 1);
            }
        }
        self.view.tick(dt_ms, &self.deck, sink)
    }

    // ---- Read-only projections ----

    pub fn current_index(&self) -> usize {
        self.index.current()
    }

    /// Number of applied index changes since construction.
    pub fn generation(&self) -> u64 {
        self.index.generation()
    }

    pub fn current_card(&self) -> Option<&Card> {
        self.deck.by_index(self.index.current()).ok()
    }

    pub fn deck(&self) -> &DeckStore {
        &self.deck
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn layout(&self) -> &LayoutBuffer {
        self.view.layout()
    }

    pub fn position(&self) -> Position {
        Position::at(self.index.current(), self.deck.len())
    }

    pub fn nav_state(&self) -> NavState {
        NavState::at(self.index.current(), self.deck.len())
    }

    /// Fragment the location is believed to hold.
    pub fn fragment(&self) -> Option<&str> {
        self.url.known()
    }

    pub fn is_dragging(&self) -> bool {
        self.gestures.is_dragging()
    }

    pub fn detail_pending(&self) -> bool {
        self.view.fade_pending()
    }

    /// Header values for a host-readable snapshot.
    pub fn snapshot_header(&self) -> SnapshotHeader {
        let nav = self.nav_state();
        SnapshotHeader {
            generation: self.index.generation(),
            current_index: self.index.current(),
            prev_enabled: nav.prev_enabled,
            next_enabled: nav.next_enabled,
            detail_pending: self.view.fade_pending(),
            dragging: self.gestures.is_dragging(),
        }
    }

    /// Image resource path for the card at `index`.
    pub fn image_path(&self, index: usize) -> Option<String> {
        self.deck
            .image_path(index, &self.config.image_dir, &self.config.image_ext)
    }

    /// Whether the image for `index` should load eagerly.
    pub fn image_is_eager(&self, index: usize) -> bool {
        index < self.config.eager_images
    }

    /// Replacement artwork for a card whose image failed to load.
    pub fn placeholder_for(&self, index: usize) -> Option<String> {
        self.deck.by_index(index).ok().map(placeholder_data_url)
    }

    fn apply_navigation(&mut self, nav: Navigation, origin: NavOrigin, sink: &mut impl ViewSink) -> MoveOutcome {
        let outcome = match nav {
            Navigation::Step(direction) => self.index.navigate(direction),
            Navigation::Jump(index) => self.index.move_to(index as i64),
        };
        self.apply(outcome, origin, sink)
    }

    /// Project a move the index model already made.
    fn apply(&mut self, outcome: MoveOutcome, origin: NavOrigin, sink: &mut impl ViewSink) -> MoveOutcome {
        if let MoveOutcome::Moved { from, to } = outcome {
            debug!("carousel: {} -> {} ({:?})", from, to, origin);
            self.view.index_changed(to, &self.deck, sink);
            if origin != NavOrigin::Fragment {
                self.url.publish(&self.deck, to, sink);
            }
            self.preload_adjacent(sink);
        }
        outcome
    }

    fn preload_adjacent(&self, sink: &mut impl ViewSink) {
        for neighbor in self.index.neighbors(self.config.preload_radius) {
            if let Some(path) = self.image_path(neighbor) {
                sink.preload_image(&path);
            }
        }
    }
}
