//! Nav widget.
//!
//! Renders a `<ul class="nav">` of links. Items with children turn into
//! dropdown toggles followed by a menu from the configured
//! [`MenuRenderer`]. Active state is resolved here, against the current
//! path, before the submenu items are handed to the menu renderer.
//!
//! ```
//! use strap_widgets::{IdGenerator, Item, Nav};
//!
//! let html = Nav::new()
//!     .with_current_path("/about")
//!     .with_items(vec![
//!         Item::entry("Home").with_url("/").into(),
//!         Item::entry("About").with_url("/about").into(),
//!     ])
//!     .render(&IdGenerator::new())
//!     .unwrap();
//! assert!(html.contains(r#"<a class="nav-link active" href="/about">About</a>"#));
//! ```

use strap_markup::{Attributes, TagBuilder, add_css_class, escape, link};
use tracing::debug;

use crate::active::Activation;
use crate::error::WidgetResult;
use crate::id::{IdGenerator, has_explicit_id};
use crate::item::{Item, ItemDescriptor};
use crate::menu::{DropdownRenderer, MenuRenderer};

const WIDGET: &str = "nav";

#[derive(Debug, Clone, PartialEq)]
pub struct Nav<M = DropdownRenderer> {
    items: Vec<Item>,
    options: Attributes,
    activation: Activation,
    encode_labels: bool,
    encode_tags: bool,
    menu_renderer: M,
}

impl Default for Nav {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            options: Attributes::new(),
            activation: Activation::default(),
            encode_labels: true,
            encode_tags: false,
            menu_renderer: DropdownRenderer,
        }
    }
}

impl Nav {
    /// Create an empty nav.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: MenuRenderer> Nav<M> {
    /// Set the nav items.
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// Attributes of the nav `<ul>`. An `id` here suppresses the generated one.
    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }

    /// Path of the page being rendered, matched against item URLs.
    pub fn with_current_path(mut self, path: &str) -> Self {
        self.activation.current_path = Some(path.to_string());
        self
    }

    /// Toggle URL matching. Explicit `active` flags apply either way.
    pub fn with_activate_items(mut self, activate: bool) -> Self {
        self.activation.activate_items = activate;
        self
    }

    /// Mark every ancestor of an active item active too.
    pub fn with_activate_parents(mut self, activate: bool) -> Self {
        self.activation.activate_parents = activate;
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

    /// Render submenus with another strategy.
    pub fn with_menu_renderer<N: MenuRenderer>(self, menu_renderer: N) -> Nav<N> {
        Nav {
            items: self.items,
            options: self.options,
            activation: self.activation,
            encode_labels: self.encode_labels,
            encode_tags: self.encode_tags,
            menu_renderer,
        }
    }

    /// Active-state settings.
    pub fn activation(&self) -> &Activation {
        &self.activation
    }

    /// Render the nav and its submenus.
    pub fn render(&self, ids: &IdGenerator) -> WidgetResult<String> {
        let mut options = self.options.clone();
        if !has_explicit_id(&options) {
            options.insert("id", format!("{}-nav", ids.next_id()));
        }
        add_css_class(&mut options, &["nav"]);

        debug!(
            widget = WIDGET,
            id = ?options.get("id"),
            items = self.items.len(),
            current_path = ?self.activation.current_path,
            "rendering nav"
        );

        let mut lines = Vec::with_capacity(self.items.len());
        for item in &self.items {
            match item {
                Item::Verbatim(html) => lines.push(html.clone()),
                Item::Entry(d) if d.visible => lines.push(self.render_item(d, ids)?),
                Item::Entry(_) => {}
            }
        }

        Ok(self.tag("ul", &lines.join("\n"), &options))
    }

    fn render_item(&self, item: &ItemDescriptor, ids: &IdGenerator) -> WidgetResult<String> {
        let label = item.require_label(WIDGET)?;
        let label = if item.encode.unwrap_or(self.encode_labels) {
            escape(label)
        } else {
            label.to_string()
        };

        let mut options = item.options.clone();
        let mut link_options = item.link_options.clone();
        let url = item.url.as_deref().unwrap_or("#");

        let resolved = self.activation.resolve_entry(item);

        let submenu = match &resolved.children {
            None => String::new(),
            Some(children) => {
                link_options.insert("data-bs-toggle", "dropdown");
                add_css_class(&mut options, &["dropdown"]);
                add_css_class(&mut link_options, &["dropdown-toggle"]);
                self.menu_renderer.render_menu(
                    children,
                    &item.dropdown_options,
                    self.encode_labels,
                    ids,
                )?
            }
        };

        add_css_class(&mut options, &["nav-item"]);
        add_css_class(&mut link_options, &["nav-link"]);

        if item.disabled {
            link_options.insert("tabindex", "-1");
            link_options.insert("aria-disabled", "true");
            add_css_class(&mut link_options, &["disabled"]);
        } else if resolved.active {
            add_css_class(&mut link_options, &["active"]);
        }

        let content = format!("{}{}", link(&label, Some(url), &link_options), submenu);
        Ok(self.tag("li", &content, &options))
    }

    fn tag(&self, name: &str, content: &str, attrs: &Attributes) -> String {
        TagBuilder::new(name)
            .content(content)
            .encode(self.encode_tags)
            .attrs(attrs)
            .render()
    }
}
