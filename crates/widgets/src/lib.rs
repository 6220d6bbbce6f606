//! Strap widgets
//!
//! Server-side rendering of Bootstrap 5 widgets: [`Button`], [`Dropdown`],
//! [`ButtonDropdown`] and [`Nav`]. Widgets are plain values configured with
//! `with_*` calls and rendered to HTML strings with an [`IdGenerator`]
//! that supplies default element ids.

pub mod active;
pub mod button;
pub mod button_dropdown;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod id;
pub mod item;
pub mod menu;
pub mod nav;

pub use active::Activation;
pub use button::Button;
pub use button_dropdown::{ButtonDropdown, Direction};
pub use config::{ButtonDropdownConfig, DropdownConfig, NavConfig};
pub use dropdown::Dropdown;
pub use error::{WidgetError, WidgetResult};
pub use id::IdGenerator;
pub use item::{Item, ItemDescriptor};
pub use menu::{DropdownRenderer, MenuRenderer};
pub use nav::Nav;

// Re-exported so callers can build attribute maps without a direct dependency.
pub use strap_markup::{AttrValue, Attributes};
