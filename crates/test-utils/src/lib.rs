//! Strap test utilities.
//!
//! Helpers for integration testing: tracing setup, HTML assertions that
//! ignore line-ending differences, and JSON item fixtures.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test subscriber once per test binary.
///
/// Output goes through the libtest capture; set `RUST_LOG` to see it.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Normalize `\r\n` and `\r` to `\n`.
pub fn normalize_line_endings(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

/// Assert two HTML fragments are equal, ignoring line-ending style.
#[track_caller]
pub fn assert_html_eq(actual: &str, expected: &str) {
    let actual = normalize_line_endings(actual);
    let expected = normalize_line_endings(expected);
    assert_eq!(
        actual, expected,
        "HTML mismatch:\nactual:\n{actual}\nexpected:\n{expected}"
    );
}

/// Assertion helpers for rendered markup.
pub mod assert {
    /// Assert that a string contains a substring.
    #[track_caller]
    pub fn contains(haystack: &str, needle: &str) {
        assert!(
            haystack.contains(needle),
            "Expected string to contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert that a string does not contain a substring.
    #[track_caller]
    pub fn not_contains(haystack: &str, needle: &str) {
        assert!(
            !haystack.contains(needle),
            "Expected string to NOT contain '{needle}'\nActual: {haystack}"
        );
    }

    /// Assert how many times `needle` occurs in `haystack`.
    #[track_caller]
    pub fn occurrences(haystack: &str, needle: &str, expected: usize) {
        let actual = haystack.matches(needle).count();
        assert_eq!(
            actual, expected,
            "Expected '{needle}' {expected} time(s), found {actual}\nActual: {haystack}"
        );
    }
}

/// Item lists used across the widget tests.
pub mod fixtures {
    use serde_json::{Value, json};

    /// A disabled page, a dropdown, a hidden dropdown and a divider.
    pub fn mixed_nav_items() -> Value {
        json!([
            {"label": "Page1", "content": "Page1", "disabled": true},
            {
                "label": "Dropdown1",
                "items": [
                    {"label": "Page2", "content": "Page2"},
                    {"label": "Page3", "content": "Page3", "visible": true}
                ]
            },
            {
                "label": "Dropdown2",
                "visible": false,
                "items": [
                    {"label": "Page4", "content": "Page4"},
                    {"label": "Page5", "content": "Page5"}
                ]
            },
            "<li class=\"dropdown-divider\"></li>"
        ])
    }

    /// One dropdown nested `depth` levels deep whose innermost page is active.
    pub fn nested_active(depth: usize) -> Value {
        let mut item = json!({"label": "Page", "content": "Page", "active": true});
        for level in (0..depth).rev() {
            item = json!({"label": format!("Level{level}"), "items": [item]});
        }
        json!([item])
    }

    /// Two links for simple dropdown menus.
    pub fn dropdown_links() -> Value {
        json!([
            {"label": "DropdownA", "url": "/"},
            {"label": "DropdownB", "url": "#"}
        ])
    }
}
