//! Menu and nav item descriptors.
//!
//! Items come either from Rust code (via the builder methods) or from
//! JSON/YAML configuration. A bare string is passed through verbatim,
//! which is how dividers and other hand-written markup are inserted.

use serde::{Deserialize, Serialize};
use strap_markup::Attributes;
use tracing::warn;

use crate::error::{WidgetError, WidgetResult};

/// One entry of a dropdown or nav.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Item {
    /// Raw markup emitted as-is.
    Verbatim(String),
    Entry(ItemDescriptor),
}

impl Item {
    /// Create a structured entry with a label.
    pub fn entry(label: &str) -> ItemDescriptor {
        ItemDescriptor::new(label)
    }

    /// Whether the item takes part in rendering at all.
    pub fn is_visible(&self) -> bool {
        match self {
            Item::Verbatim(_) => true,
            Item::Entry(d) => d.visible,
        }
    }

    /// Parse an item list from a JSON array.
    pub fn list_from_json(json: &str) -> WidgetResult<Vec<Item>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert an item list from an already-parsed JSON value.
    pub fn list_from_value(value: serde_json::Value) -> WidgetResult<Vec<Item>> {
        Ok(serde_json::from_value(value)?)
    }
}

impl From<&str> for Item {
    fn from(s: &str) -> Self {
        Item::Verbatim(s.to_string())
    }
}

impl From<String> for Item {
    fn from(s: String) -> Self {
        Item::Verbatim(s)
    }
}

impl From<ItemDescriptor> for Item {
    fn from(d: ItemDescriptor) -> Self {
        Item::Entry(d)
    }
}

/// Structured configuration for one menu or nav entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemDescriptor {
    /// Required; rendering fails without it.
    pub label: Option<String>,
    pub url: Option<String>,
    pub visible: bool,
    pub disabled: bool,
    /// Explicit activity override.
    pub active: Option<bool>,
    /// Nested items. `null` and `[]` both mean "no submenu".
    pub items: Option<Vec<Item>>,
    /// Free-form content carried along with the item; not rendered by menus.
    pub content: Option<String>,
    /// Per-item override of the widget's label encoding.
    pub encode: Option<bool>,
    /// Attributes of the submenu container a nav item opens.
    #[serde(alias = "dropdownOptions", skip_serializing_if = "Attributes::is_empty")]
    pub dropdown_options: Attributes,
    /// Attributes of the `<li>` wrapping the item.
    #[serde(skip_serializing_if = "Attributes::is_empty")]
    pub options: Attributes,
    /// Attributes of the item's `<a>`.
    #[serde(alias = "linkOptions", skip_serializing_if = "Attributes::is_empty")]
    pub link_options: Attributes,
}

impl Default for ItemDescriptor {
    fn default() -> Self {
        Self {
            label: None,
            url: None,
            visible: true,
            disabled: false,
            active: None,
            items: None,
            content: None,
            encode: None,
            dropdown_options: Attributes::new(),
            options: Attributes::new(),
            link_options: Attributes::new(),
        }
    }
}

impl ItemDescriptor {
    /// Create an entry with a label and default settings.
    pub fn new(label: &str) -> Self {
        Self {
            label: Some(label.to_string()),
            ..Self::default()
        }
    }

    /// Set the link target.
    pub fn with_url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    /// Set the nested items.
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = Some(items);
        self
    }

    /// Force the active state.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }

    /// Render the item disabled.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Hide or show the item.
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Attach free-form content.
    pub fn with_content(mut self, content: &str) -> Self {
        self.content = Some(content.to_string());
        self
    }

    /// Override label encoding for this item.
    pub fn with_encode(mut self, encode: bool) -> Self {
        self.encode = Some(encode);
        self
    }

    /// Set the `<li>` attributes.
    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }

    /// Set the `<a>` attributes.
    pub fn with_link_options(mut self, options: Attributes) -> Self {
        self.link_options = options;
        self
    }

    /// Set the attributes of the submenu this item opens.
    pub fn with_dropdown_options(mut self, options: Attributes) -> Self {
        self.dropdown_options = options;
        self
    }

    /// The label, or a configuration error naming the rendering widget.
    pub fn require_label(&self, widget: &'static str) -> WidgetResult<&str> {
        match self.label.as_deref() {
            Some(label) => Ok(label),
            None => {
                warn!(widget, url = ?self.url, "item without label");
                Err(WidgetError::MissingLabel { widget })
            }
        }
    }

    /// Nested items, if there are any.
    pub fn children(&self) -> Option<&[Item]> {
        self.items.as_deref().filter(|items| !items.is_empty())
    }
}
