//! Font-family extraction.

use std::sync::LazyLock;

use regex::Regex;

static FONT_FAMILY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"font-family:\s*([^;]+);").unwrap());

/// Collect distinct `font-family` declaration values, trimmed, in
/// first-encounter order.
pub fn extract_font_families(css: &str) -> Vec<String> {
    let mut families: Vec<String> = Vec::new();
    for caps in FONT_FAMILY_REGEX.captures_iter(css) {
        let value = caps[1].trim();
        if !families.iter().any(|f| f == value) {
            families.push(value.to_string());
        }
    }
    families
}
