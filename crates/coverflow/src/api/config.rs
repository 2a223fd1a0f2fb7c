use serde::{Deserialize, Serialize};

use crate::layout::LayoutParams;

/// Configuration for the carousel. Every field has a default, so a partial
/// JSON object (or none at all) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Horizontal travel a drag must exceed to navigate, in px (default: 50).
    pub drag_threshold: f32,
    /// Delay before the detail panel text is swapped, in ms (default: 300).
    pub fade_delay_ms: f32,
    /// Neighbors on each side whose images are preloaded (default: 2).
    pub preload_radius: usize,
    /// Directory holding card images (default: "images").
    pub image_dir: String,
    /// Card image extension (default: "jpg").
    pub image_ext: String,
    /// Where the host fetches the deck document from.
    pub deck_url: String,
    /// Number of leading cards whose images load eagerly (default: 5).
    pub eager_images: usize,
    /// Fan geometry.
    pub layout: LayoutParams,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            drag_threshold: 50.0,
            fade_delay_ms: 300.0,
            preload_radius: 2,
            image_dir: "images".to_string(),
            image_ext: "jpg".to_string(),
            deck_url: "content/cards.json".to_string(),
            eager_images: 5,
            layout: LayoutParams::default(),
        }
    }
}

impl CarouselConfig {
    /// Parse a config from a JSON string. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(CarouselConfig::from_json("{}").unwrap(), CarouselConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = CarouselConfig::from_json(
            r#"{ "drag_threshold": 80, "layout": { "visible_radius": 2 } }"#,
        )
        .unwrap();
        assert_eq!(config.drag_threshold, 80.0);
        assert_eq!(config.fade_delay_ms, 300.0);
        assert_eq!(config.layout.visible_radius, 2);
        assert_eq!(config.layout.base_offset, 250.0);
    }
}
