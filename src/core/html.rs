// src/core/html.rs
// Thin layer over `scraper`: build the tree, compile selectors, read cell text.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::{normalize_ws, strip_thousands};
use crate::error::{Error, Result};

/// Best-effort parse; html5ever never rejects input, it repairs it.
pub fn parse_document(raw: &str) -> Html {
    Html::parse_document(raw)
}

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| Error::Selector { css: s!(css), reason: e.to_string() })
}

/// Concatenated text of an element, whitespace normalized.
/// `<th>Country,<br>Other</th>` reads as "Country,Other".
pub fn text_of(el: ElementRef<'_>) -> String {
    normalize_ws(&el.text().collect::<String>())
}

/// Body cell text: like `text_of`, minus thousands separators.
pub fn cell_text(el: ElementRef<'_>) -> String {
    strip_thousands(&text_of(el))
}
