//! Tag rendering and the element builder API.

use crate::attributes::{AttrValue, Attributes, add_css_class};
use crate::escape::escape;

/// Elements rendered without content or a closing tag.
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "meta", "link"];

/// Render `<name attrs>content</name>` with `content` inserted as-is.
pub fn render_tag(name: &str, content: &str, attrs: &Attributes) -> String {
    if VOID_ELEMENTS.contains(&name) {
        return format!("<{name}{}>", attrs.render());
    }
    format!("<{name}{}>{content}</{name}>", attrs.render())
}

/// Like [`render_tag`] but escapes `content` first.
pub fn render_tag_encoded(name: &str, content: &str, attrs: &Attributes) -> String {
    render_tag(name, &escape(content), attrs)
}

/// Render an `<a>` element. `href` is only emitted when `url` is given.
///
/// `label` is inserted as-is; escape it beforehand when needed.
pub fn link(label: &str, url: Option<&str>, attrs: &Attributes) -> String {
    let mut attrs = attrs.clone();
    if let Some(url) = url {
        attrs.insert("href", url);
    }
    render_tag("a", label, &attrs)
}

/// Builder for a single element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBuilder {
    name: String,
    content: String,
    encode: bool,
    attrs: Attributes,
}

impl TagBuilder {
    /// Start an element with the given tag name.
    pub fn new(name: &str) -> Self {
        Self {
            name: name.into(),
            content: String::new(),
            encode: false,
            attrs: Attributes::new(),
        }
    }

    /// Set the inner content.
    pub fn content(mut self, content: &str) -> Self {
        self.content = content.into();
        self
    }

    /// Escape the content when rendering.
    pub fn encode(mut self, encode: bool) -> Self {
        self.encode = encode;
        self
    }

    /// Append a CSS class.
    pub fn class(mut self, class: &str) -> Self {
        add_css_class(&mut self.attrs, &[class]);
        self
    }

    /// Set one attribute.
    pub fn attr(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key, value);
        self
    }

    /// Overlay a whole attribute map; keys from `attrs` win.
    pub fn attrs(mut self, attrs: &Attributes) -> Self {
        self.attrs = self.attrs.merge(attrs);
        self
    }

    /// Render the element.
    pub fn render(&self) -> String {
        if self.encode {
            render_tag_encoded(&self.name, &self.content, &self.attrs)
        } else {
            render_tag(&self.name, &self.content, &self.attrs)
        }
    }
}
