//! Box-shadow extraction.

use std::sync::LazyLock;

use regex::Regex;

/// Distinct shadow values beyond this cap are dropped.
const MAX_SHADOWS: usize = 10;

static BOX_SHADOW_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"box-shadow:\s*([^;]+);").unwrap());

/// Collect distinct `box-shadow` values, trimmed, capped to the first
/// `MAX_SHADOWS` in encounter order.
pub fn extract_shadows(css: &str) -> Vec<String> {
    let mut shadows: Vec<String> = Vec::new();
    for caps in BOX_SHADOW_REGEX.captures_iter(css) {
        let value = caps[1].trim();
        if !shadows.iter().any(|s| s == value) {
            shadows.push(value.to_string());
            if shadows.len() == MAX_SHADOWS {
                break;
            }
        }
    }
    shadows
}
