//! Border-radius extraction.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::count_map;
use super::counter::OrderedCounter;

const MAX_RADIUS_VALUES: usize = 10;

static BORDER_RADIUS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"border-radius:\s*([^;]+);").unwrap());

/// Count distinct `border-radius` values by exact trimmed string.
pub fn extract_border_radius(css: &str) -> Map<String, Value> {
    let mut counter = OrderedCounter::default();
    for caps in BORDER_RADIUS_REGEX.captures_iter(css) {
        counter.add(caps[1].trim());
    }
    count_map(counter.most_common(MAX_RADIUS_VALUES))
}
