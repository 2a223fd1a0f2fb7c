// view/placeholder.rs
//
// Stand-in artwork for cards whose image failed to load.
// Deterministic: the same card always yields the same SVG.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::deck::Card;

const WIDTH: u32 = 220;
const HEIGHT: u32 = 380;
const CENTER_X: u32 = WIDTH / 2;
/// Maximum rendered width of one line of the card name.
const NAME_MAX_WIDTH: f32 = 180.0;
/// Approximate advance of one glyph at the 18px name size.
const NAME_GLYPH_WIDTH: f32 = 11.0;
const NAME_FIRST_LINE_Y: u32 = 180;
const NAME_LINE_HEIGHT: u32 = 24;
const RULE_Y: u32 = 220;

/// Break `name` into lines no wider than the name area.
pub fn wrap_name(name: &str) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    for word in name.split_whitespace() {
        let candidate_len = line.chars().count() + word.chars().count();
        if !line.is_empty() && candidate_len as f32 * NAME_GLYPH_WIDTH > NAME_MAX_WIDTH {
            lines.push(line.trim_end().to_string());
            line.clear();
        }
        line.push_str(word);
        line.push(' ');
    }
    let last = line.trim_end();
    if !last.is_empty() {
        lines.push(last.to_string());
    }
    lines
}

/// SVG document for `card`.
pub fn placeholder_svg(card: &Card) -> String {
    let mut svg = format!(
        concat!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"##,
            r##"<defs><linearGradient id="bg" x1="0" y1="0" x2="0" y2="1">"##,
            r##"<stop offset="0" stop-color="#1a3a5c"/><stop offset="1" stop-color="#0f2847"/>"##,
            r##"</linearGradient></defs>"##,
            r##"<rect width="{w}" height="{h}" fill="url(#bg)"/>"##,
            r##"<rect x="6" y="6" width="208" height="368" fill="none" stroke="#d4af37" stroke-width="4"/>"##,
            r##"<rect x="15" y="15" width="190" height="350" fill="none" stroke="rgba(212,175,55,0.3)" stroke-width="1"/>"##,
            r##"<text x="{cx}" y="50" fill="#d4af37" font-family="Cinzel, serif" font-size="24" text-anchor="middle">{numeral}</text>"##,
        ),
        w = WIDTH,
        h = HEIGHT,
        cx = CENTER_X,
        numeral = escape_xml(&card.numeral),
    );

    for (i, line) in wrap_name(&card.name).iter().enumerate() {
        let y = NAME_FIRST_LINE_Y + i as u32 * NAME_LINE_HEIGHT;
        svg.push_str(&format!(
            r##"<text x="{CENTER_X}" y="{y}" fill="#f5f0e6" font-family="Cinzel, serif" font-size="18" text-anchor="middle">{}</text>"##,
            escape_xml(line)
        ));
    }

    svg.push_str(&format!(
        r##"<line x1="60" y1="{RULE_Y}" x2="160" y2="{RULE_Y}" stroke="#d4af37" stroke-width="1"/></svg>"##
    ));
    svg
}

/// `data:` URL suitable for an `<img src>`.
pub fn placeholder_data_url(card: &Card) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(placeholder_svg(card)))
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_names_fit_one_line() {
        assert_eq!(wrap_name("The Fool"), vec!["The Fool"]);
    }

    #[test]
    fn long_names_wrap() {
        let lines = wrap_name("The Wheel of Fortune Turning");
        assert!(lines.len() > 1, "{:?}", lines);
        for line in &lines {
            assert!(line.chars().count() as f32 * NAME_GLYPH_WIDTH <= NAME_MAX_WIDTH + NAME_GLYPH_WIDTH);
        }
        assert_eq!(lines.join(" "), "The Wheel of Fortune Turning");
    }

    #[test]
    fn svg_is_deterministic_and_escaped() {
        let card = Card::named("XIX", "Sun & <Moon>");
        let a = placeholder_svg(&card);
        assert_eq!(a, placeholder_svg(&card));
        assert!(a.contains(">XIX</text>"));
        assert!(a.contains("Sun &amp; &lt;Moon&gt;"));
        assert!(a.ends_with("</svg>"));
    }

    #[test]
    fn data_url_prefix() {
        let url = placeholder_data_url(&Card::named("0", "The Fool"));
        assert!(url.starts_with("data:image/svg+xml;base64,"));
    }
}
