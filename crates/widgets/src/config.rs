//! Widget configuration documents.
//!
//! Each widget has a serde counterpart so that menus can be described in
//! JSON or YAML and turned into widgets at startup. Every field is
//! optional and defaults to the builder's default. The camelCase spellings
//! (`currentPath`, `activateParents`, ...) are accepted as aliases.

use serde::{Deserialize, Serialize};
use strap_markup::Attributes;
use tracing::debug;

use crate::button_dropdown::{ButtonDropdown, Direction};
use crate::dropdown::Dropdown;
use crate::error::WidgetResult;
use crate::item::Item;
use crate::nav::Nav;

fn default_true() -> bool {
    true
}

fn default_label() -> String {
    "Button".to_string()
}

fn default_tag_name() -> String {
    "button".to_string()
}

/// Configuration of a [`Nav`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavConfig {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default)]
    pub options: Attributes,
    #[serde(default, alias = "currentPath")]
    pub current_path: Option<String>,
    #[serde(default = "default_true", alias = "activateItems")]
    pub activate_items: bool,
    #[serde(default, alias = "activateParents")]
    pub activate_parents: bool,
    #[serde(default = "default_true", alias = "encodeLabels")]
    pub encode_labels: bool,
    #[serde(default, alias = "encodeTags")]
    pub encode_tags: bool,
}

impl NavConfig {
    /// Parse a JSON document.
    pub fn from_json(json: &str) -> WidgetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a YAML document.
    pub fn from_yaml(yaml: &str) -> WidgetResult<Self> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Build the configured widget.
    pub fn into_widget(self) -> Nav {
        debug!(items = self.items.len(), "building nav from configuration");

        let nav = Nav::new()
            .with_items(self.items)
            .with_options(self.options)
            .with_activate_items(self.activate_items)
            .with_activate_parents(self.activate_parents)
            .with_encode_labels(self.encode_labels)
            .with_encode_tags(self.encode_tags);

        match self.current_path {
            Some(path) => nav.with_current_path(&path),
            None => nav,
        }
    }
}

/// Configuration of a [`Dropdown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropdownConfig {
    /// `None` when the document has no `items` key at all.
    #[serde(default)]
    pub items: Option<Vec<Item>>,
    #[serde(default)]
    pub options: Attributes,
    #[serde(default, alias = "submenuOptions")]
    pub submenu_options: Attributes,
    #[serde(default = "default_true", alias = "encodeLabels")]
    pub encode_labels: bool,
    #[serde(default, alias = "encodeTags")]
    pub encode_tags: bool,
}

impl DropdownConfig {
    /// Parse a JSON document.
    pub fn from_json(json: &str) -> WidgetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a YAML document.
    pub fn from_yaml(yaml: &str) -> WidgetResult<Self> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Build the configured widget.
    pub fn into_widget(self) -> Dropdown {
        Dropdown::new()
            .with_items(self.items.unwrap_or_default())
            .with_options(self.options)
            .with_submenu_options(self.submenu_options)
            .with_encode_labels(self.encode_labels)
            .with_encode_tags(self.encode_tags)
    }
}

/// Configuration of a [`ButtonDropdown`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ButtonDropdownConfig {
    #[serde(default = "default_label")]
    pub label: String,
    #[serde(default)]
    pub options: Attributes,
    #[serde(default, alias = "buttonOptions")]
    pub button_options: Attributes,
    /// Only the menu's `items` are used.
    #[serde(default)]
    pub dropdown: Option<DropdownConfig>,
    #[serde(default)]
    pub direction: Direction,
    #[serde(default)]
    pub split: bool,
    #[serde(default = "default_tag_name", alias = "tagName")]
    pub tag_name: String,
    #[serde(default = "default_true", alias = "encodeLabels")]
    pub encode_labels: bool,
    #[serde(default, alias = "encodeTags")]
    pub encode_tags: bool,
    #[serde(default = "default_true", alias = "renderContainer")]
    pub render_container: bool,
}

impl ButtonDropdownConfig {
    /// Parse a JSON document.
    pub fn from_json(json: &str) -> WidgetResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a YAML document.
    pub fn from_yaml(yaml: &str) -> WidgetResult<Self> {
        Ok(serde_yml::from_str(yaml)?)
    }

    /// Build the configured widget.
    pub fn into_widget(self) -> ButtonDropdown {
        let mut widget = ButtonDropdown::new()
            .with_label(&self.label)
            .with_options(self.options)
            .with_button_options(self.button_options)
            .with_direction(self.direction)
            .with_split(self.split)
            .with_tag_name(&self.tag_name)
            .with_encode_labels(self.encode_labels)
            .with_encode_tags(self.encode_tags);

        if let Some(items) = self.dropdown.and_then(|d| d.items) {
            widget = widget.with_dropdown_items(items);
        }
        if !self.render_container {
            widget = widget.without_render_container();
        }
        widget
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::id::IdGenerator;

    #[test]
    fn test_nav_defaults() {
        let config = NavConfig::from_json("{}").unwrap();
        assert!(config.activate_items);
        assert!(!config.activate_parents);
        assert!(config.encode_labels);
        assert_eq!(config.into_widget(), Nav::new());
    }

    #[test]
    fn test_nav_from_yaml() {
        let yaml = r#"
currentPath: /blog
activateParents: true
options:
  class: navbar-nav
items:
  - label: Home
    url: /
  - label: Blog
    url: /blog
  - '<li class="dropdown-divider"></li>'
"#;
        let nav = NavConfig::from_yaml(yaml).unwrap().into_widget();
        assert_eq!(nav.activation().current_path.as_deref(), Some("/blog"));
        assert!(nav.activation().activate_parents);

        let html = nav.render(&IdGenerator::new()).unwrap();
        assert!(html.starts_with(r#"<ul id="w0-nav" class="navbar-nav nav">"#));
        assert!(html.contains(r#"<a class="nav-link active" href="/blog">Blog</a>"#));
        assert!(html.contains(r#"<li class="dropdown-divider"></li>"#));
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let err = NavConfig::from_json(r#"{"items": 5}"#).unwrap_err();
        assert!(!err.is_missing_label());
        assert!(err.to_string().starts_with("invalid JSON widget configuration"));
    }

    #[test]
    fn test_button_dropdown_without_items_renders_nothing() {
        let config = ButtonDropdownConfig::from_json(r#"{"label": "Act", "dropdown": {}}"#).unwrap();
        assert_eq!(config.label, "Act");
        let html = config.into_widget().render(&IdGenerator::new()).unwrap();
        assert_eq!(html, "");
    }

    #[test]
    fn test_button_dropdown_from_json() {
        let json = r#"{
            "label": "Action",
            "split": true,
            "direction": "up",
            "renderContainer": false,
            "dropdown": {"items": [{"label": "A", "url": "/a"}]}
        }"#;
        let widget = ButtonDropdownConfig::from_json(json).unwrap().into_widget();
        let expected = ButtonDropdown::new()
            .with_label("Action")
            .with_split(true)
            .with_direction(Direction::Up)
            .without_render_container()
            .with_dropdown_items(vec![Item::entry("A").with_url("/a").into()]);
        assert_eq!(widget, expected);
    }

    #[test]
    fn test_dropdown_from_json() {
        let json = r#"{"items": [{"label": "Header"}], "options": {"id": "menu"}}"#;
        let html = DropdownConfig::from_json(json)
            .unwrap()
            .into_widget()
            .render(&IdGenerator::new())
            .unwrap();
        assert!(html.starts_with(r#"<ul id="menu" class="dropdown-menu""#));
        assert!(html.contains(r#"<h6 class="dropdown-header">Header</h6>"#));
    }

    #[test]
    fn test_configs_survive_a_json_round_trip() {
        let nav = NavConfig::from_yaml(
            r#"
currentPath: /a
options: {class: navbar-nav, data-depth: 2}
items:
  - label: A
    url: /a
    linkOptions: {title: First}
  - '<li class="dropdown-divider"></li>'
"#,
        )
        .unwrap();
        let json = serde_json::to_string(&nav).unwrap();
        assert!(json.contains(r#""options":{"class":"navbar-nav","data-depth":2}"#));
        assert_eq!(NavConfig::from_json(&json).unwrap(), nav);

        let button_dropdown = ButtonDropdownConfig::from_json(
            r#"{"direction": "left", "dropdown": {"items": [{"label": "B"}], "submenuOptions": {"class": "sub"}}}"#,
        )
        .unwrap();
        let json = serde_json::to_string(&button_dropdown).unwrap();
        assert!(json.contains(r#""direction":"left""#));
        assert!(json.contains(r#""submenu_options":{"class":"sub"}"#));
        assert_eq!(ButtonDropdownConfig::from_json(&json).unwrap(), button_dropdown);
    }
}
