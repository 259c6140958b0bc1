//! Color literal extraction.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::count_map;
use super::counter::OrderedCounter;

/// At most this many distinct colors are kept, highest count first.
const MAX_COLORS: usize = 20;

// Permissive on purpose: 3 to 8 hex digits also admits lengths that are not
// valid CSS, and the rgb form accepts any parenthesized content.
static HEX_COLOR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[0-9a-fA-F]{3,8}\b").unwrap());
static RGB_COLOR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"rgba?\([^)]+\)").unwrap());

/// Count hex and rgb/rgba color literals, pooled into one frequency map.
///
/// Counting is by exact literal, so `#FFF` and `#ffffff` are distinct keys.
pub fn extract_colors(css: &str) -> Map<String, Value> {
    let mut counter = OrderedCounter::default();
    for m in HEX_COLOR_REGEX.find_iter(css) {
        counter.add(m.as_str());
    }
    for m in RGB_COLOR_REGEX.find_iter(css) {
        counter.add(m.as_str());
    }
    count_map(counter.most_common(MAX_COLORS))
}
