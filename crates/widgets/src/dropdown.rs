//! Dropdown menu widget.
//!
//! Renders a `<ul class="dropdown-menu">` from a list of items. Per item:
//! - a verbatim string is emitted unchanged
//! - an entry without url or children becomes a `dropdown-header`
//! - an entry with a url becomes a `dropdown-item` link
//! - an entry with children becomes a toggle followed by a nested dropdown
//!
//! Only explicit `active` flags are honoured here; URL matching and parent
//! activation happen in [`Nav`](crate::Nav) before items reach the menu.

use strap_markup::{Attributes, TagBuilder, add_css_class, escape, link};
use tracing::debug;

use crate::error::WidgetResult;
use crate::id::{IdGenerator, has_explicit_id};
use crate::item::{Item, ItemDescriptor};

const WIDGET: &str = "dropdown";

#[derive(Debug, Clone, PartialEq)]
pub struct Dropdown {
    items: Vec<Item>,
    options: Attributes,
    submenu_options: Attributes,
    encode_labels: bool,
    encode_tags: bool,
}

impl Default for Dropdown {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            options: Attributes::new(),
            submenu_options: Attributes::new(),
            encode_labels: true,
            encode_tags: false,
        }
    }
}

impl Dropdown {
    /// Create an empty dropdown.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the menu items.
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// Attributes of the menu `<ul>`. An `id` here suppresses the generated one.
    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }

    /// Attributes of the `<ul>` wrapping each nested submenu.
    pub fn with_submenu_options(mut self, options: Attributes) -> Self {
        self.submenu_options = options;
        self
    }

    /// Escape item labels (the default).
    pub fn with_encode_labels(mut self, encode: bool) -> Self {
        self.encode_labels = encode;
        self
    }

    /// Insert item labels as raw HTML.
    pub fn without_encode_labels(self) -> Self {
        self.with_encode_labels(false)
    }

    /// Escape the generated `<li>` and `<ul>` content.
    pub fn with_encode_tags(mut self, encode: bool) -> Self {
        self.encode_tags = encode;
        self
    }

    /// Render the menu and any nested submenus.
    pub fn render(&self, ids: &IdGenerator) -> WidgetResult<String> {
        let mut options = Attributes::new()
            .with("aria-expanded", "false")
            .merge(&self.options);
        if !has_explicit_id(&options) {
            options.insert("id", format!("{}-dropdown", ids.next_id()));
        }
        add_css_class(&mut options, &["dropdown-menu"]);

        debug!(
            widget = WIDGET,
            id = ?options.get("id"),
            items = self.items.len(),
            "rendering dropdown"
        );

        let mut lines = Vec::with_capacity(self.items.len());
        for item in &self.items {
            match item {
                Item::Verbatim(html) => lines.push(html.clone()),
                Item::Entry(d) if d.visible => lines.push(self.render_entry(d, ids)?),
                Item::Entry(_) => {}
            }
        }

        let content = format!("\n{}\n", lines.join("\n"));
        Ok(self.tag("ul", &content, &options))
    }

    fn render_entry(&self, item: &ItemDescriptor, ids: &IdGenerator) -> WidgetResult<String> {
        let label = item.require_label(WIDGET)?;
        let label = if item.encode.unwrap_or(self.encode_labels) {
            escape(label)
        } else {
            label.to_string()
        };

        let content = match item.children() {
            None => match &item.url {
                None => TagBuilder::new("h6")
                    .class("dropdown-header")
                    .content(&label)
                    .render(),
                Some(url) => {
                    let mut link_options = item.link_options.clone();
                    add_css_class(&mut link_options, &["dropdown-item"]);
                    mark_state(&mut link_options, item);
                    link(&label, Some(url), &link_options)
                }
            },
            Some(children) => {
                let mut link_options = Attributes::new()
                    .with("data-bs-toggle", "dropdown")
                    .with("aria-haspopup", "true")
                    .with("aria-expanded", "false")
                    .with("role", "button")
                    .merge(&item.link_options);
                add_css_class(&mut link_options, &["dropdown-item", "dropdown-toggle"]);
                mark_state(&mut link_options, item);

                let mut submenu_options = Attributes::new()
                    .with("aria-expanded", "false")
                    .merge(&self.submenu_options);
                add_css_class(&mut submenu_options, &["dropdown"]);

                let submenu = Dropdown::new()
                    .with_items(children.to_vec())
                    .with_submenu_options(self.submenu_options.clone())
                    .with_encode_labels(self.encode_labels)
                    .with_encode_tags(self.encode_tags)
                    .render(ids)?;

                format!(
                    "{}{}",
                    link(&label, item.url.as_deref(), &link_options),
                    self.tag("ul", &submenu, &submenu_options)
                )
            }
        };

        Ok(self.tag("li", &content, &item.options))
    }

    fn tag(&self, name: &str, content: &str, attrs: &Attributes) -> String {
        TagBuilder::new(name)
            .content(content)
            .encode(self.encode_tags)
            .attrs(attrs)
            .render()
    }
}

/// Disabled wins over active.
fn mark_state(link_options: &mut Attributes, item: &ItemDescriptor) {
    if item.disabled {
        link_options.insert("tabindex", "-1");
        link_options.insert("aria-disabled", "true");
        add_css_class(link_options, &["disabled"]);
    } else if item.active == Some(true) {
        add_css_class(link_options, &["active"]);
    }
}
