//! WASM bridge for the coverflow carousel.
//!
//! The host page fetches the deck document, calls [`carousel_start`] (or
//! [`carousel_start_degraded`] if the fetch failed), then forwards DOM events
//! to the `carousel_*` exports and drives [`carousel_tick`] from
//! `requestAnimationFrame`. Calls made before a successful start are ignored.

pub mod dom;
pub mod runner;

pub use runner::CarouselRunner;

use std::cell::RefCell;

use coverflow::{CarouselConfig, DeckStore, Direction, DragSource, InputEvent, Key, LoadError};
use log::{info, warn};
use wasm_bindgen::prelude::*;

thread_local! {
    static RUNNER: RefCell<Option<CarouselRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut CarouselRunner) -> R) -> Option<R> {
    RUNNER.with(|cell| cell.borrow_mut().as_mut().map(f))
}

fn parse_config(config_json: Option<String>) -> CarouselConfig {
    let Some(json) = config_json else {
        return CarouselConfig::default();
    };
    CarouselConfig::from_json(&json).unwrap_or_else(|err| {
        warn!("carousel: bad config ({}); using defaults", err);
        CarouselConfig::default()
    })
}

/// Current location fragment, percent-decoded, without the `#`.
fn location_fragment() -> Option<String> {
    let hash = web_sys::window()?.location().hash().ok()?;
    let raw = hash.trim_start_matches('#');
    if raw.is_empty() {
        return None;
    }
    let decoded = js_sys::decode_uri_component(raw)
        .ok()
        .and_then(|d| d.as_string())
        .unwrap_or_else(|| raw.to_string());
    Some(decoded)
}

fn boot(deck: DeckStore, config: CarouselConfig) -> Result<(), JsValue> {
    let mut runner = CarouselRunner::new(config, deck)?;
    runner.start(location_fragment().as_deref());
    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });
    info!("coverflow: initialized");
    Ok(())
}

/// Install logging and the panic hook. Safe to call more than once.
#[wasm_bindgen]
pub fn carousel_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
}

/// Where the host should fetch the deck document from.
#[wasm_bindgen]
pub fn carousel_deck_url(config_json: Option<String>) -> String {
    parse_config(config_json).deck_url
}

/// Start with a fetched deck document. A malformed document degrades to an
/// empty carousel rather than failing.
#[wasm_bindgen]
pub fn carousel_start(deck_json: &str, config_json: Option<String>) -> Result<(), JsValue> {
    boot(DeckStore::load_or_empty(deck_json), parse_config(config_json))
}

/// Start without a deck because the fetch failed.
#[wasm_bindgen]
pub fn carousel_start_degraded(reason: &str, config_json: Option<String>) -> Result<(), JsValue> {
    let deck = DeckStore::or_empty(Err(LoadError::Unreachable(reason.to_string())));
    boot(deck, parse_config(config_json))
}

#[wasm_bindgen]
pub fn carousel_tick(dt_ms: f32) {
    with_runner(|r| r.tick(dt_ms));
}

// ---- Input ----

#[wasm_bindgen]
pub fn carousel_key_down(key: &str) {
    let key = Key::from_dom_key(key);
    with_runner(|r| r.push_input(InputEvent::KeyDown { key }));
}

#[wasm_bindgen]
pub fn carousel_pointer_down(x: f32) {
    with_runner(|r| r.push_input(InputEvent::DragStart { source: DragSource::Pointer, x }));
}

#[wasm_bindgen]
pub fn carousel_pointer_move(x: f32) {
    with_runner(|r| r.push_input(InputEvent::DragMove { source: DragSource::Pointer, x }));
}

#[wasm_bindgen]
pub fn carousel_pointer_up(x: f32) {
    with_runner(|r| r.push_input(InputEvent::DragEnd { source: DragSource::Pointer, x: Some(x) }));
}

#[wasm_bindgen]
pub fn carousel_touch_start(x: f32) {
    with_runner(|r| r.push_input(InputEvent::DragStart { source: DragSource::Touch, x }));
}

#[wasm_bindgen]
pub fn carousel_touch_move(x: f32) {
    with_runner(|r| r.push_input(InputEvent::DragMove { source: DragSource::Touch, x }));
}

/// `x` is the released touch's position, if the host has it.
#[wasm_bindgen]
pub fn carousel_touch_end(x: Option<f32>) {
    with_runner(|r| r.push_input(InputEvent::DragEnd { source: DragSource::Touch, x }));
}

#[wasm_bindgen]
pub fn carousel_touch_cancel() {
    with_runner(|r| r.push_input(InputEvent::DragCancel { source: DragSource::Touch }));
}

#[wasm_bindgen]
pub fn carousel_card_click(index: u32) {
    with_runner(|r| r.push_input(InputEvent::CardClick { index: index as usize }));
}

#[wasm_bindgen]
pub fn carousel_prev() {
    with_runner(|r| r.push_input(InputEvent::Button { direction: Direction::Prev }));
}

#[wasm_bindgen]
pub fn carousel_next() {
    with_runner(|r| r.push_input(InputEvent::Button { direction: Direction::Next }));
}

/// Bound to `window` `hashchange`.
#[wasm_bindgen]
pub fn carousel_hash_changed() {
    let fragment = location_fragment().unwrap_or_default();
    with_runner(|r| r.hash_changed(&fragment));
}

/// Bound to each card image's `error` event.
#[wasm_bindgen]
pub fn carousel_image_failed(index: u32) {
    with_runner(|r| r.image_failed(index as usize));
}

#[wasm_bindgen]
pub fn carousel_switch_tab(name: &str) {
    with_runner(|r| r.switch_tab(name));
}

// ---- Data accessors ----

#[wasm_bindgen]
pub fn get_current_index() -> u32 {
    with_runner(|r| r.current_index()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_card_count() -> u32 {
    with_runner(|r| r.card_count()).unwrap_or(0)
}

#[wasm_bindgen]
pub fn get_snapshot_ptr() -> *const f32 {
    with_runner(|r| r.snapshot_ptr()).unwrap_or(std::ptr::null())
}

#[wasm_bindgen]
pub fn get_snapshot_len() -> u32 {
    with_runner(|r| r.snapshot_len()).unwrap_or(0)
}
