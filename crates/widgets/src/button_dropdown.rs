//! Button dropdown widget: a button group that opens a menu.
//!
//! In split mode the group holds two buttons: one for the primary action
//! and a narrow caret button that toggles the menu.

use serde::{Deserialize, Serialize};
use strap_markup::{
    Attributes, add_css_class, escape, remove_attribute, render_tag, render_tag_encoded,
};
use tracing::debug;

use crate::button::Button;
use crate::error::WidgetResult;
use crate::id::{IdGenerator, has_explicit_id};
use crate::item::Item;
use crate::menu::{DropdownRenderer, MenuRenderer};

/// Label of the caret button in split mode.
pub const SPLIT_TOGGLE_LABEL: &str = r#"<span class="sr-only">Toggle Dropdown</span>"#;

/// Direction the menu opens in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Down,
    Up,
    Left,
    Right,
}

impl Direction {
    /// Container class for this direction.
    pub fn css_class(self) -> &'static str {
        match self {
            Direction::Down => "dropdown",
            Direction::Up => "dropup",
            Direction::Left => "dropleft",
            Direction::Right => "dropright",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ButtonDropdown<M = DropdownRenderer> {
    label: String,
    options: Attributes,
    button_options: Attributes,
    items: Option<Vec<Item>>,
    direction: Direction,
    split: bool,
    tag_name: String,
    encode_labels: bool,
    encode_tags: bool,
    render_container: bool,
    menu_renderer: M,
}

impl Default for ButtonDropdown {
    fn default() -> Self {
        Self {
            label: "Button".to_string(),
            options: Attributes::new(),
            button_options: Attributes::new(),
            items: None,
            direction: Direction::Down,
            split: false,
            tag_name: "button".to_string(),
            encode_labels: true,
            encode_tags: false,
            render_container: true,
            menu_renderer: DropdownRenderer,
        }
    }
}

impl ButtonDropdown {
    /// Create a button dropdown with no menu items.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: MenuRenderer> ButtonDropdown<M> {
    /// Set the main button label.
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// Attributes of the container. A `tag` key picks the container element.
    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }

    /// Attributes shared by the buttons.
    pub fn with_button_options(mut self, options: Attributes) -> Self {
        self.button_options = options;
        self
    }

    /// Menu items. Without them the widget renders nothing.
    pub fn with_dropdown_items(mut self, items: Vec<Item>) -> Self {
        self.items = Some(items);
        self
    }

    /// Set the direction the menu opens in.
    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Render a separate caret button for the menu.
    pub fn with_split(mut self, split: bool) -> Self {
        self.split = split;
        self
    }

    /// Element used for the main button.
    pub fn with_tag_name(mut self, tag_name: &str) -> Self {
        self.tag_name = tag_name.to_string();
        self
    }

    /// Escape the main button label (the default).
    pub fn with_encode_labels(mut self, encode: bool) -> Self {
        self.encode_labels = encode;
        self
    }

    /// Insert the main button label as raw HTML.
    pub fn without_encode_labels(self) -> Self {
        self.with_encode_labels(false)
    }

    /// Escape the container content.
    pub fn with_encode_tags(mut self, encode: bool) -> Self {
        self.encode_tags = encode;
        self
    }

    /// Return only the buttons and menu, without the enclosing element.
    pub fn without_render_container(mut self) -> Self {
        self.render_container = false;
        self
    }

    /// Render the menu with another strategy.
    pub fn with_menu_renderer<N: MenuRenderer>(self, menu_renderer: N) -> ButtonDropdown<N> {
        ButtonDropdown {
            label: self.label,
            options: self.options,
            button_options: self.button_options,
            items: self.items,
            direction: self.direction,
            split: self.split,
            tag_name: self.tag_name,
            encode_labels: self.encode_labels,
            encode_tags: self.encode_tags,
            render_container: self.render_container,
            menu_renderer,
        }
    }

    /// Render the group. Empty when no menu items are set.
    pub fn render(&self, ids: &IdGenerator) -> WidgetResult<String> {
        let Some(items) = &self.items else {
            return Ok(String::new());
        };

        let mut options = self.options.clone();
        let mut button_options = self.button_options.clone();

        // The toggle button shares the container's generated id prefix.
        if !has_explicit_id(&options) {
            let id = ids.next_id();
            options.insert("id", format!("{id}-button-dropdown"));
            button_options.insert("id", format!("{id}-button"));
        }

        debug!(
            widget = "button_dropdown",
            id = ?options.get("id"),
            split = self.split,
            items = items.len(),
            "rendering button dropdown"
        );

        let buttons = self.render_buttons(button_options, ids);
        let menu = self
            .menu_renderer
            .render_menu(items, &Attributes::new(), self.encode_labels, ids)?;
        let html = format!("{buttons}\n{menu}");

        if !self.render_container {
            return Ok(html);
        }

        add_css_class(&mut options, &[self.direction.css_class(), "btn-group"]);
        let tag = remove_attribute(&mut options, "tag", "div");

        Ok(if self.encode_tags {
            render_tag_encoded(&tag, &html, &options)
        } else {
            render_tag(&tag, &html, &options)
        })
    }

    fn render_buttons(&self, mut button_options: Attributes, ids: &IdGenerator) -> String {
        add_css_class(&mut button_options, &["btn"]);

        let label = if self.encode_labels {
            escape(&self.label)
        } else {
            self.label.clone()
        };

        let (mut main_options, split_button) = if self.split {
            let mut main_options = button_options.clone();
            main_options.remove("id");

            add_toggle_attributes(&mut button_options);
            add_css_class(
                &mut button_options,
                &["dropdown-toggle dropdown-toggle-split"],
            );
            let split_button = Button::new()
                .with_label(SPLIT_TOGGLE_LABEL)
                .without_encode_labels()
                .with_options(button_options)
                .render(ids);

            (main_options, Some(split_button))
        } else {
            add_css_class(&mut button_options, &["dropdown-toggle"]);
            add_toggle_attributes(&mut button_options);
            (button_options, None)
        };

        if self.tag_name == "a" && !main_options.contains("href") {
            main_options.insert("href", "#");
            main_options.insert("role", "button");
        }

        let main_button = Button::new()
            .with_tag_name(&self.tag_name)
            .with_label(&label)
            .with_options(main_options)
            .without_encode_labels()
            .render(ids);

        match split_button {
            Some(split_button) => format!("{main_button}\n{split_button}"),
            None => main_button,
        }
    }
}

fn add_toggle_attributes(attrs: &mut Attributes) {
    attrs.insert("data-bs-toggle", "dropdown");
    attrs.insert("aria-haspopup", "true");
    attrs.insert("aria-expanded", "false");
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    fn items() -> Vec<Item> {
        vec![
            Item::entry("DropdownA").with_url("/").into(),
            Item::entry("DropdownB").with_url("#").into(),
        ]
    }

    #[test]
    fn test_no_items_renders_nothing() {
        let ids = IdGenerator::new();
        assert_eq!(ButtonDropdown::new().render(&ids).unwrap(), "");
        assert_eq!(ids.peek(), 0);
    }

    #[test]
    fn test_render() {
        let ids = IdGenerator::new();
        let html = ButtonDropdown::new()
            .with_label("Action")
            .with_dropdown_items(items())
            .render(&ids)
            .unwrap();

        assert_eq!(
            html,
            concat!(
                r#"<div id="w0-button-dropdown" class="dropdown btn-group">"#,
                r#"<button id="w0-button" class="btn dropdown-toggle" data-bs-toggle="dropdown" aria-haspopup="true" aria-expanded="false">Action</button>"#,
                "\n",
                r#"<ul id="w1-dropdown" class="dropdown-menu" aria-expanded="false">"#,
                "\n",
                r#"<li><a class="dropdown-item" href="/">DropdownA</a></li>"#,
                "\n",
                r##"<li><a class="dropdown-item" href="#">DropdownB</a></li>"##,
                "\n</ul></div>"
            )
        );
    }

    #[test]
    fn test_direction_and_container_tag() {
        let ids = IdGenerator::new();
        let html = ButtonDropdown::new()
            .with_direction(Direction::Up)
            .with_options(Attributes::new().with("tag", "section").with("id", "bd"))
            .with_dropdown_items(items())
            .render(&ids)
            .unwrap();
        assert!(html.starts_with(r#"<section id="bd" class="dropup btn-group">"#));
        assert!(html.ends_with("</section>"));
        assert!(!html.contains("tag="));
    }

    #[test]
    fn test_empty_id_is_replaced() {
        let ids = IdGenerator::new();
        let html = ButtonDropdown::new()
            .with_options(Attributes::new().with("id", ""))
            .with_dropdown_items(items())
            .render(&ids)
            .unwrap();
        assert!(html.starts_with(r#"<div id="w0-button-dropdown" class="dropdown btn-group"><button id="w0-button""#));
    }

    #[test]
    fn test_without_container() {
        let ids = IdGenerator::new();
        let html = ButtonDropdown::new()
            .with_dropdown_items(items())
            .without_render_container()
            .render(&ids)
            .unwrap();
        assert!(html.starts_with("<button"));
        assert!(html.ends_with("</ul>"));
        assert!(!html.contains("btn-group"));
    }

    #[test]
    fn test_anchor_button_gets_href_and_role() {
        let ids = IdGenerator::new();
        let html = ButtonDropdown::new()
            .with_tag_name("a")
            .with_dropdown_items(items())
            .render(&ids)
            .unwrap();
        assert!(html.contains(
            r##"<a id="w0-button" class="btn dropdown-toggle" href="#" data-bs-toggle="dropdown" aria-haspopup="true" aria-expanded="false" role="button">Button</a>"##
        ));
    }

    #[test]
    fn test_label_encoding() {
        let ids = IdGenerator::new();
        let html = ButtonDropdown::new()
            .with_label("<b>Go</b>")
            .with_dropdown_items(items())
            .render(&ids)
            .unwrap();
        assert!(html.contains(">&lt;b&gt;Go&lt;/b&gt;</button>"));

        ids.reset(0);
        let html = ButtonDropdown::new()
            .with_label("<b>Go</b>")
            .without_encode_labels()
            .with_dropdown_items(items())
            .render(&ids)
            .unwrap();
        assert!(html.contains("><b>Go</b></button>"));
    }

    #[test]
    fn test_direction_serde() {
        let d: Direction = serde_json::from_str(r#""right""#).unwrap();
        assert_eq!(d, Direction::Right);
        assert_eq!(d.css_class(), "dropright");
    }
}
