//! Button widget.

use strap_markup::{Attributes, add_css_class, escape, render_tag};
use tracing::debug;

use crate::id::{IdGenerator, has_explicit_id};

/// Renders a single Bootstrap button.
///
/// ```
/// use strap_widgets::{Button, IdGenerator};
///
/// let html = Button::new().with_label("Save").render(&IdGenerator::new());
/// assert_eq!(html, r#"<button id="w0-button" class="btn">Save</button>"#);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Button {
    label: String,
    tag_name: String,
    options: Attributes,
    encode_labels: bool,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            label: "Button".to_string(),
            tag_name: "button".to_string(),
            options: Attributes::new(),
            encode_labels: true,
        }
    }
}

impl Button {
    /// Create a button labelled "Button".
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the button label.
    pub fn with_label(mut self, label: &str) -> Self {
        self.label = label.to_string();
        self
    }

    /// Element to render, `button` by default.
    pub fn with_tag_name(mut self, tag_name: &str) -> Self {
        self.tag_name = tag_name.to_string();
        self
    }

    /// HTML attributes of the button. An `id` here suppresses the generated one.
    pub fn with_options(mut self, options: Attributes) -> Self {
        self.options = options;
        self
    }

    /// Escape the label (the default).
    pub fn with_encode_labels(mut self, encode: bool) -> Self {
        self.encode_labels = encode;
        self
    }

    /// Insert the label as raw HTML.
    pub fn without_encode_labels(self) -> Self {
        self.with_encode_labels(false)
    }

    /// Render the button, drawing an id from `ids` when none is set.
    pub fn render(&self, ids: &IdGenerator) -> String {
        let mut options = self.options.clone();
        if !has_explicit_id(&options) {
            options.insert("id", format!("{}-button", ids.next_id()));
        }
        add_css_class(&mut options, &["btn"]);

        let label = if self.encode_labels {
            escape(&self.label)
        } else {
            self.label.clone()
        };

        debug!(widget = "button", tag = %self.tag_name, "rendering button");
        render_tag(&self.tag_name, &label, &options)
    }
}
