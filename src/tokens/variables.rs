//! Custom-property (`--name: value;`) extraction.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value};

static CUSTOM_PROPERTY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"--([a-zA-Z0-9-]+)\s*:\s*([^;]+);").unwrap());

/// Extract CSS custom properties as a name → value map.
///
/// The leading `--` is stripped from names and values are trimmed. When the
/// same name is declared more than once, the last declaration wins; the key
/// keeps the position of its first occurrence.
pub fn extract_css_variables(css: &str) -> Map<String, Value> {
    let mut variables = Map::new();
    for caps in CUSTOM_PROPERTY_REGEX.captures_iter(css) {
        variables.insert(
            caps[1].to_string(),
            Value::String(caps[2].trim().to_string()),
        );
    }
    variables
}
