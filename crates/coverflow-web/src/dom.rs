//! DOM-backed [`ViewSink`].
//!
//! Expects the page to provide:
//! - `.carousel-track`: container the card elements are built into
//! - `.carousel`: gets `loaded` on the entrance reveal
//! - `.card-info-content`: gets `fading` during a detail swap
//! - `.card-numeral`, `.card-name`, `.card-theme`, `.summary-text`,
//!   `.interpretation-text`, `.elements-list`: detail panel fields
//! - `.position-current`, `.position-total`: indicator
//! - `.nav-prev`, `.nav-next`: buttons
//! - `.tab-button[data-tab]`, `.tab-pane[id]`: detail tabs

use coverflow::{Card, CardPose, Carousel, NavState, Position, ViewSink};
use log::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlImageElement};

/// Elements for one card, indexed like the deck.
struct CardHandle {
    root: HtmlElement,
    image: HtmlImageElement,
}

/// The DOM as the carousel's output device.
pub struct DomView {
    document: Document,
    track: Element,
    cards: Vec<CardHandle>,
    info: Option<Element>,
    prev: Option<HtmlButtonElement>,
    next: Option<HtmlButtonElement>,
}

impl DomView {
    /// Build one element per card into the track and capture every handle.
    pub fn mount(carousel: &Carousel) -> Result<Self, JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let track = document
            .query_selector(".carousel-track")?
            .ok_or_else(|| JsValue::from_str("missing .carousel-track"))?;
        track.set_inner_html("");

        let mut cards = Vec::with_capacity(carousel.deck().len());
        for (index, card) in carousel.deck().iter().enumerate() {
            let root: HtmlElement = document.create_element("div")?.dyn_into()?;
            root.set_class_name("carousel-card");
            root.set_attribute("data-index", &index.to_string())?;

            let image: HtmlImageElement = document.create_element("img")?.dyn_into()?;
            if let Some(path) = carousel.image_path(index) {
                image.set_src(&path);
            }
            image.set_alt(&card.name);
            let loading = if carousel.image_is_eager(index) { "eager" } else { "lazy" };
            image.set_attribute("loading", loading)?;

            root.append_child(&image)?;
            track.append_child(&root)?;
            cards.push(CardHandle { root, image });
        }

        let info = document.query_selector(".card-info-content")?;
        let prev = button(&document, ".nav-prev")?;
        let next = button(&document, ".nav-next")?;

        Ok(Self {
            document,
            track,
            cards,
            info,
            prev,
            next,
        })
    }

    /// Swap in generated artwork after an image failed to load.
    pub fn show_placeholder(&self, index: usize, data_url: &str) {
        if let Some(handle) = self.cards.get(index) {
            handle.image.set_src(data_url);
        }
    }

    /// Activate the detail tab named `name` and its pane.
    pub fn switch_tab(&self, name: &str) {
        self.toggle_all(".tab-button", "active", |el| {
            el.get_attribute("data-tab").as_deref() == Some(name)
        });
        self.toggle_all(".tab-pane", "active", |el| el.id() == name);
    }

    fn toggle_all(&self, selector: &str, class: &str, on: impl Fn(&Element) -> bool) {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return;
        };
        for i in 0..nodes.length() {
            let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            report(el.class_list().toggle_with_force(class, on(&el)).map(|_| ()), "toggle tab");
        }
    }

    fn set_text(&self, selector: &str, text: &str) {
        match self.document.query_selector(selector) {
            Ok(Some(el)) => el.set_text_content(Some(text)),
            Ok(None) => {}
            Err(err) => warn!("dom: query {} failed: {:?}", selector, err),
        }
    }

    fn render_elements(&self, card: &Card) -> Result<(), JsValue> {
        let Some(list) = self.document.query_selector(".elements-list")? else {
            return Ok(());
        };
        list.set_inner_html("");
        for element in &card.elements {
            let item = self.document.create_element("div")?;
            item.set_class_name("element-item");

            let name = self.document.create_element("h4")?;
            name.set_class_name("element-name");
            name.set_text_content(Some(&element.name));

            let meaning = self.document.create_element("p")?;
            meaning.set_class_name("element-meaning");
            meaning.set_text_content(Some(&element.meaning));

            item.append_child(&name)?;
            item.append_child(&meaning)?;
            list.append_child(&item)?;
        }
        Ok(())
    }
}

impl ViewSink for DomView {
    fn apply_layout(&mut self, poses: &[CardPose]) {
        for (handle, pose) in self.cards.iter().zip(poses) {
            let style = handle.root.style();
            report(style.set_property("transform", &pose.css_transform()), "transform");
            report(style.set_property("opacity", &pose.opacity.to_string()), "opacity");
            report(style.set_property("z-index", &pose.stacking().to_string()), "z-index");
            report(
                handle.root.class_list().toggle_with_force("active", pose.is_active()).map(|_| ()),
                "active class",
            );
        }
    }

    fn begin_detail_fade(&mut self) {
        if let Some(info) = &self.info {
            report(info.class_list().add_1("fading"), "begin fade");
        }
    }

    fn commit_detail(&mut self, _index: usize, card: &Card) {
        self.set_text(".card-numeral", &card.numeral);
        self.set_text(".card-name", &card.name);
        self.set_text(".card-theme", &card.theme);
        self.set_text(".summary-text", &card.summary);
        self.set_text(".interpretation-text", &card.interpretation);
        report(self.render_elements(card), "elements list");
        if let Some(info) = &self.info {
            report(info.class_list().remove_1("fading"), "end fade");
        }
    }

    fn set_position(&mut self, position: Position) {
        self.set_text(".position-current", &position.current.to_string());
        self.set_text(".position-total", &position.total.to_string());
    }

    fn set_nav_state(&mut self, nav: NavState) {
        if let Some(prev) = &self.prev {
            prev.set_disabled(!nav.prev_enabled);
            report(prev.style().set_property("opacity", &nav.prev_opacity().to_string()), "prev opacity");
        }
        if let Some(next) = &self.next {
            next.set_disabled(!nav.next_enabled);
            report(next.style().set_property("opacity", &nav.next_opacity().to_string()), "next opacity");
        }
    }

    fn replace_fragment(&mut self, fragment: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let url = format!("#{fragment}");
        match window.history() {
            Ok(history) => report(history.replace_state_with_url(&JsValue::NULL, "", Some(&url)), "replaceState"),
            Err(err) => warn!("dom: history unavailable: {:?}", err),
        }
    }

    fn preload_image(&mut self, path: &str) {
        match HtmlImageElement::new() {
            Ok(image) => image.set_src(path),
            Err(err) => warn!("dom: preload {} failed: {:?}", path, err),
        }
    }

    fn reveal(&mut self) {
        if let Ok(Some(carousel)) = self.document.query_selector(".carousel") {
            report(carousel.class_list().add_1("loaded"), "mark loaded");
        }
    }

    fn set_dragging(&mut self, active: bool) {
        report(
            self.track.class_list().toggle_with_force("dragging", active).map(|_| ()),
            "dragging class",
        );
    }
}

fn button(document: &Document, selector: &str) -> Result<Option<HtmlButtonElement>, JsValue> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok()))
}

/// DOM failures are logged and otherwise ignored; they never reach the engine.
fn report(result: Result<(), JsValue>, what: &str) {
    if let Err(err) = result {
        warn!("dom: {} failed: {:?}", what, err);
    }
}
