//! Ordered HTML attribute maps.
//!
//! Attributes keep insertion order. When rendered, the well-known
//! attributes in [`ATTRIBUTE_ORDER`] come first so that `id` and `class`
//! always lead, and everything else follows in the order it was added.

use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::escape::escape_attribute;

/// Attributes rendered ahead of all others, in this order.
pub const ATTRIBUTE_ORDER: &[&str] = &[
    "type",
    "id",
    "class",
    "name",
    "value",
    "href",
    "loading",
    "src",
    "srcset",
    "form",
    "action",
    "method",
    "selected",
    "checked",
    "readonly",
    "disabled",
    "multiple",
    "size",
    "maxlength",
    "minlength",
    "width",
    "height",
    "rows",
    "cols",
    "alt",
    "title",
    "rel",
    "media",
];

/// A single attribute value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttrValue {
    /// Boolean attribute: `true` renders the bare name, `false` renders nothing.
    Flag(bool),
    Int(i64),
    Text(String),
}

impl AttrValue {
    /// Textual form of the value, `None` for boolean flags.
    pub fn to_text(&self) -> Option<String> {
        match self {
            AttrValue::Text(s) => Some(s.clone()),
            AttrValue::Int(n) => Some(n.to_string()),
            AttrValue::Flag(_) => None,
        }
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        AttrValue::Text(s.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        AttrValue::Text(s)
    }
}

impl From<bool> for AttrValue {
    fn from(b: bool) -> Self {
        AttrValue::Flag(b)
    }
}

impl From<i64> for AttrValue {
    fn from(n: i64) -> Self {
        AttrValue::Int(n)
    }
}

/// Insertion-ordered attribute map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, AttrValue)>,
}

impl Attributes {
    /// Create an empty attribute map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set an attribute. An existing key keeps its position.
    pub fn insert(&mut self, key: &str, value: impl Into<AttrValue>) {
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some((_, existing)) => *existing = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.iter().any(|(k, _)| k == key)
    }

    /// Remove an attribute, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        let pos = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(pos).1)
    }

    /// Overlay `other` on top of `self`; keys from `other` win.
    pub fn merge(mut self, other: &Attributes) -> Self {
        for (key, value) in &other.entries {
            self.insert(key, value.clone());
        }
        self
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The classes currently set in the `class` attribute.
    pub fn classes(&self) -> Vec<String> {
        self.get("class")
            .and_then(AttrValue::to_text)
            .map(|c| c.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    /// Render as ` key="value"` pairs, prioritised per [`ATTRIBUTE_ORDER`].
    pub fn render(&self) -> String {
        let mut html = String::new();

        for key in ATTRIBUTE_ORDER {
            if let Some(value) = self.get(key) {
                render_pair(&mut html, key, value);
            }
        }

        for (key, value) in &self.entries {
            if !ATTRIBUTE_ORDER.contains(&key.as_str()) {
                render_pair(&mut html, key, value);
            }
        }

        html
    }
}

fn render_pair(html: &mut String, key: &str, value: &AttrValue) {
    match value {
        AttrValue::Flag(true) => {
            html.push(' ');
            html.push_str(key);
        }
        AttrValue::Flag(false) => {}
        AttrValue::Int(n) => {
            html.push_str(&format!(" {key}=\"{n}\""));
        }
        AttrValue::Text(s) => {
            html.push_str(&format!(" {key}=\"{}\"", escape_attribute(s)));
        }
    }
}

impl Serialize for Attributes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct AttributesVisitor;

impl<'de> Visitor<'de> for AttributesVisitor {
    type Value = Attributes;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of HTML attributes")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Attributes, A::Error> {
        let mut attrs = Attributes::new();
        while let Some((key, value)) = access.next_entry::<String, AttrValue>()? {
            attrs.insert(&key, value);
        }
        Ok(attrs)
    }

    // `null` in a config document means "no attributes".
    fn visit_unit<E: de::Error>(self) -> Result<Attributes, E> {
        Ok(Attributes::new())
    }
}

impl<'de> Deserialize<'de> for Attributes {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(AttributesVisitor)
    }
}

/// Append CSS classes to the `class` attribute, skipping ones already present.
///
/// Each entry may hold several space-separated classes. Existing classes
/// keep their position; new ones are appended in the given order.
pub fn add_css_class(attrs: &mut Attributes, classes: &[&str]) {
    let mut current = attrs.classes();

    for class in classes.iter().flat_map(|c| c.split_whitespace()) {
        if !current.iter().any(|c| c == class) {
            current.push(class.to_string());
        }
    }

    if !current.is_empty() {
        attrs.insert("class", current.join(" "));
    }
}

/// Remove `key` from `attrs`, returning its textual value or `default`.
pub fn remove_attribute(attrs: &mut Attributes, key: &str, default: &str) -> String {
    attrs
        .remove(key)
        .and_then(|v| v.to_text())
        .unwrap_or_else(|| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_render_orders_id_and_class_first() {
        let attrs = Attributes::new()
            .with("class", "test")
            .with("data-id", "t1")
            .with("id", "test1");
        assert_eq!(attrs.render(), r#" id="test1" class="test" data-id="t1""#);
    }

    #[test]
    fn test_render_keeps_insertion_order_for_others() {
        let attrs = Attributes::new()
            .with("tabindex", "-1")
            .with("aria-disabled", "true")
            .with("href", "#")
            .with("class", "nav-link");
        assert_eq!(
            attrs.render(),
            r##" class="nav-link" href="#" tabindex="-1" aria-disabled="true""##
        );
    }

    #[test]
    fn test_render_boolean_flags() {
        let attrs = Attributes::new()
            .with("hidden", true)
            .with("open", false)
            .with("tabindex", 0_i64);
        assert_eq!(attrs.render(), r#" hidden tabindex="0""#);
    }

    #[test]
    fn test_render_escapes_values() {
        let attrs = Attributes::new().with("title", "a \"quoted\" <b>");
        assert_eq!(attrs.render(), r#" title="a &quot;quoted&quot; &lt;b&gt;""#);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut attrs = Attributes::new().with("a", "1").with("b", "2");
        attrs.insert("a", "3");
        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(attrs.get("a"), Some(&AttrValue::from("3")));
    }

    #[test]
    fn test_merge_overrides() {
        let base = Attributes::new().with("aria-expanded", "false").with("role", "menu");
        let merged = base.merge(&Attributes::new().with("role", "listbox"));
        assert_eq!(merged.render(), r#" aria-expanded="false" role="listbox""#);
    }

    #[test]
    fn test_add_css_class_appends_missing() {
        let mut attrs = Attributes::new().with("class", "test");
        add_css_class(&mut attrs, &["dropdown-menu", "test"]);
        assert_eq!(attrs.get("class"), Some(&AttrValue::from("test dropdown-menu")));
    }

    #[test]
    fn test_add_css_class_splits_groups() {
        let mut attrs = Attributes::new();
        add_css_class(&mut attrs, &["btn", "dropdown-toggle dropdown-toggle-split"]);
        assert_eq!(
            attrs.classes(),
            vec!["btn", "dropdown-toggle", "dropdown-toggle-split"]
        );
    }

    #[test]
    fn test_remove_attribute_default() {
        let mut attrs = Attributes::new().with("tag", "nav");
        assert_eq!(remove_attribute(&mut attrs, "tag", "div"), "nav");
        assert!(attrs.is_empty());
        assert_eq!(remove_attribute(&mut attrs, "tag", "div"), "div");
    }

    #[test]
    fn test_deserialize_preserves_document_order() {
        let attrs: Attributes =
            serde_json::from_str(r#"{"z": "1", "a": true, "m": 5}"#).unwrap();
        let keys: Vec<_> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
        assert_eq!(attrs.get("m"), Some(&AttrValue::Int(5)));
    }

    #[test]
    fn test_serialize_keeps_insertion_order() {
        let attrs = Attributes::new()
            .with("z", "1")
            .with("hidden", true)
            .with("tabindex", -1_i64);
        let json = serde_json::to_string(&attrs).unwrap();
        assert_eq!(json, r#"{"z":"1","hidden":true,"tabindex":-1}"#);

        let back: Attributes = serde_json::from_str(&json).unwrap();
        assert_eq!(back, attrs);
    }

    #[test]
    fn test_deserialize_null_is_empty() {
        let attrs: Attributes = serde_json::from_str("null").unwrap();
        assert!(attrs.is_empty());
    }
}
