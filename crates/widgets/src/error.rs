//! Widget error types.

use thiserror::Error;

/// Errors raised while configuring or rendering a widget.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// A structured item has no `label`. Rendering of the whole widget aborts.
    #[error("the 'label' option is required ({widget} item)")]
    MissingLabel { widget: &'static str },

    #[error("invalid JSON widget configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML widget configuration: {0}")]
    Yaml(#[from] serde_yml::Error),
}

impl WidgetError {
    /// Whether this is a configuration error in the items themselves,
    /// as opposed to a document that failed to parse.
    pub fn is_missing_label(&self) -> bool {
        matches!(self, WidgetError::MissingLabel { .. })
    }
}

/// Result type alias using WidgetError.
pub type WidgetResult<T> = Result<T, WidgetError>;
