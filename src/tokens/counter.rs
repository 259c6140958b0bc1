//! Insertion-ordered occurrence counting.
//!
//! Frequency maps in the token summary are truncated to the most common
//! entries, with ties broken by first-encounter order. A hash-based counter
//! would make that tie-break depend on iteration order, so counting is done
//! over a plain vector of key/count pairs and ranked with a stable sort.

/// Occurrence counter that remembers the order keys were first seen in.
#[derive(Debug, Default)]
pub struct OrderedCounter {
    entries: Vec<(String, usize)>,
}

impl OrderedCounter {
    pub fn add(&mut self, key: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((key.to_string(), 1)),
        }
    }

    /// Consume the counter and return the `n` highest-count entries,
    /// descending. Equal counts keep their first-encounter order.
    pub fn most_common(mut self, n: usize) -> Vec<(String, usize)> {
        self.entries.sort_by(|a, b| b.1.cmp(&a.1));
        self.entries.truncate(n);
        self.entries
    }
}
