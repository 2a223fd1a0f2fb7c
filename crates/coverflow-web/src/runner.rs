use coverflow::{Carousel, CarouselConfig, DeckStore, InputEvent, InputQueue, Snapshot};
use wasm_bindgen::JsValue;

use crate::dom::DomView;

/// Owns the engine and its DOM sink for the lifetime of the page.
///
/// The page creates one `CarouselRunner` in a `thread_local!` and forwards
/// DOM events to it through `#[wasm_bindgen]` free functions. Every event is
/// processed to completion before the call returns.
pub struct CarouselRunner {
    carousel: Carousel,
    view: DomView,
    input: InputQueue,
    /// Flat state buffer for hosts that read poses directly.
    snapshot: Snapshot,
}

impl CarouselRunner {
    pub fn new(config: CarouselConfig, deck: DeckStore) -> Result<Self, JsValue> {
        let carousel = Carousel::new(config, deck);
        let view = DomView::mount(&carousel)?;
        Ok(Self {
            carousel,
            view,
            input: InputQueue::new(),
            snapshot: Snapshot::new(),
        })
    }

    /// Paint the first frame, selecting the card named by `fragment` if any.
    /// The entrance reveal follows on a later [`tick`](Self::tick).
    pub fn start(&mut self, fragment: Option<&str>) {
        self.carousel.start(fragment, &mut self.view);
        self.refresh_snapshot();
    }

    /// Queue an input event and process everything pending.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
        self.carousel.process_input(&mut self.input, &mut self.view);
        self.refresh_snapshot();
    }

    /// The location fragment changed outside the engine.
    pub fn hash_changed(&mut self, fragment: &str) {
        self.carousel.fragment_changed(fragment, &mut self.view);
        self.refresh_snapshot();
    }

    /// Advance deferred work (entrance reveal, detail fade) by `dt_ms`.
    pub fn tick(&mut self, dt_ms: f32) {
        if self.carousel.tick(dt_ms, &mut self.view) {
            self.refresh_snapshot();
        }
    }

    /// An image failed to load; show generated artwork instead.
    pub fn image_failed(&mut self, index: usize) {
        if let Some(url) = self.carousel.placeholder_for(index) {
            self.view.show_placeholder(index, &url);
        }
    }

    pub fn switch_tab(&self, name: &str) {
        self.view.switch_tab(name);
    }

    fn refresh_snapshot(&mut self) {
        let header = self.carousel.snapshot_header();
        self.snapshot.write(&header, self.carousel.layout().instances());
    }

    // ---- Accessors ----

    pub fn current_index(&self) -> u32 {
        self.carousel.current_index() as u32
    }

    pub fn card_count(&self) -> u32 {
        self.carousel.deck().len() as u32
    }

    pub fn snapshot_ptr(&self) -> *const f32 {
        self.snapshot.as_ptr()
    }

    pub fn snapshot_len(&self) -> u32 {
        self.snapshot.len() as u32
    }
}
