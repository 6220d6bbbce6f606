//! Strap markup helpers
//!
//! Tag rendering, ordered HTML attributes, CSS class merging and escaping.
//! The widget crate builds every element through these functions and never
//! formats raw tags itself.

pub mod attributes;
pub mod escape;
pub mod tag;

pub use attributes::{AttrValue, Attributes, add_css_class, remove_attribute};
pub use escape::{escape, escape_attribute};
pub use tag::{TagBuilder, link, render_tag, render_tag_encoded};
