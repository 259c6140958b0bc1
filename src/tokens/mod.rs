//! Token extraction engine.
//!
//! Six independent pattern scans over raw CSS text, each a pure function from
//! text to a partial result. None depends on another's output, so they run in
//! a fixed order purely for a stable serialized field layout. The scans are
//! regex-based by design: no tokenizer, no AST, no comment or string
//! awareness. Malformed CSS simply produces fewer matches and is never an
//! error.

mod counter;

pub mod colors;
pub mod radius;
pub mod shadows;
pub mod spacing;
pub mod typography;
pub mod variables;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub use colors::extract_colors;
pub use radius::extract_border_radius;
pub use shadows::extract_shadows;
pub use spacing::extract_spacing_values;
pub use typography::extract_font_families;
pub use variables::extract_css_variables;

/// Token summary for one CSS text.
///
/// Maps preserve insertion order when serialized, so counted fields read
/// most-frequent-first in the output document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenRecord {
    pub css_variables: Map<String, Value>,
    pub colors: Map<String, Value>,
    pub spacing: Map<String, Value>,
    pub font_families: Vec<String>,
    pub border_radius: Map<String, Value>,
    pub shadows: Vec<String>,
}

/// Run all six extractions over one CSS text.
pub fn analyze(css: &str) -> TokenRecord {
    TokenRecord {
        css_variables: extract_css_variables(css),
        colors: extract_colors(css),
        spacing: extract_spacing_values(css),
        font_families: extract_font_families(css),
        border_radius: extract_border_radius(css),
        shadows: extract_shadows(css),
    }
}

/// Build an insertion-ordered JSON map from ranked key/count pairs.
fn count_map(entries: Vec<(String, usize)>) -> Map<String, Value> {
    entries
        .into_iter()
        .map(|(key, count)| (key, Value::from(count)))
        .collect()
}
