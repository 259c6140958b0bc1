//! Spacing value extraction.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::count_map;
use super::counter::OrderedCounter;

const MAX_SPACING_VALUES: usize = 20;

// Only values declared on a recognized sizing property are counted; a bare
// `12px` elsewhere in the text is not a spacing token.
static SPACING_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:margin|padding|gap|width|height):\s*([0-9.]+(?:px|rem|em))").unwrap()
});

/// Count numeric spacing values (`px`, `rem`, `em`) declared on `margin`,
/// `padding`, `gap`, `width` or `height`.
pub fn extract_spacing_values(css: &str) -> Map<String, Value> {
    let mut counter = OrderedCounter::default();
    for caps in SPACING_REGEX.captures_iter(css) {
        counter.add(&caps[1]);
    }
    count_map(counter.most_common(MAX_SPACING_VALUES))
}
