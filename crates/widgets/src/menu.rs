//! Menu rendering strategy.
//!
//! Widgets that open a menu (nav items with children, button dropdowns)
//! render it through a [`MenuRenderer`]. [`DropdownRenderer`] is the
//! default; swap it with `with_menu_renderer` to change the menu markup.

use strap_markup::Attributes;

use crate::dropdown::Dropdown;
use crate::error::WidgetResult;
use crate::id::IdGenerator;
use crate::item::Item;

/// Renders a list of items as a menu.
pub trait MenuRenderer {
    /// Render `items` into a menu element carrying `options`.
    fn render_menu(
        &self,
        items: &[Item],
        options: &Attributes,
        encode_labels: bool,
        ids: &IdGenerator,
    ) -> WidgetResult<String>;
}

/// Renders menus with the [`Dropdown`] widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownRenderer;

impl MenuRenderer for DropdownRenderer {
    fn render_menu(
        &self,
        items: &[Item],
        options: &Attributes,
        encode_labels: bool,
        ids: &IdGenerator,
    ) -> WidgetResult<String> {
        Dropdown::new()
            .with_items(items.to_vec())
            .with_options(options.clone())
            .with_encode_labels(encode_labels)
            .render(ids)
    }
}
