//! Widget id generation.
//!
//! Widgets that need an element id and were not given one draw the next
//! value from an [`IdGenerator`] passed into `render`. Nested widgets draw
//! from the same generator, so ids follow render order: a nav takes `w0`,
//! its first submenu `w1`, and so on.

use std::cell::Cell;

use strap_markup::Attributes;

/// Default prefix for generated ids.
pub const DEFAULT_PREFIX: &str = "w";

/// Monotonic id counter scoped to a render context.
#[derive(Debug)]
pub struct IdGenerator {
    prefix: String,
    counter: Cell<u64>,
}

impl IdGenerator {
    /// Create a generator starting at `w0`.
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }

    /// Create a generator with another prefix.
    pub fn with_prefix(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
            counter: Cell::new(0),
        }
    }

    /// Return the next id and advance the counter.
    pub fn next_id(&self) -> String {
        let n = self.counter.get();
        self.counter.set(n + 1);
        format!("{}{n}", self.prefix)
    }

    /// Value the next call to [`next_id`](Self::next_id) will use.
    pub fn peek(&self) -> u64 {
        self.counter.get()
    }

    /// Restart the counter at `value`.
    pub fn reset(&self, value: u64) {
        self.counter.set(value);
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether `options` carries a usable `id`. An empty `id` counts as missing.
pub(crate) fn has_explicit_id(options: &Attributes) -> bool {
    options
        .get("id")
        .and_then(|id| id.to_text())
        .is_some_and(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence() {
        let ids = IdGenerator::new();
        assert_eq!(ids.next_id(), "w0");
        assert_eq!(ids.next_id(), "w1");
        assert_eq!(ids.peek(), 2);
    }

    #[test]
    fn test_reset() {
        let ids = IdGenerator::new();
        ids.next_id();
        ids.next_id();
        ids.reset(0);
        assert_eq!(ids.next_id(), "w0");
        ids.reset(7);
        assert_eq!(ids.next_id(), "w7");
    }

    #[test]
    fn test_explicit_id() {
        assert!(has_explicit_id(&Attributes::new().with("id", "menu")));
        assert!(!has_explicit_id(&Attributes::new().with("id", "")));
        assert!(!has_explicit_id(&Attributes::new().with("class", "nav")));
    }

    #[test]
    fn test_custom_prefix() {
        let ids = IdGenerator::with_prefix("menu");
        assert_eq!(ids.next_id(), "menu0");
    }
}
