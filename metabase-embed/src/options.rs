use serde::{Deserialize, Serialize};

pub const DEFAULT_WIDTH: &str = "100%";
pub const DEFAULT_HEIGHT: &str = "800";

/// Per-call display settings for an embedded question or dashboard.
///
/// `border`, `title` and `theme` end up in the URL fragment; `width` and
/// `height` only affect the generated iframe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayOptions {
    #[serde(rename = "bordered")]
    pub border: bool,

    #[serde(rename = "titled")]
    pub title: bool,

    pub theme: Option<String>,

    /// CSS width of the iframe.
    pub width: String,

    /// CSS height of the iframe.
    pub height: String,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            border: true,
            title: false,
            theme: None,
            width: DEFAULT_WIDTH.to_string(),
            height: DEFAULT_HEIGHT.to_string(),
        }
    }
}

impl DisplayOptions {
    pub fn with_border(mut self, border: bool) -> Self {
        self.border = border;
        self
    }

    pub fn with_title(mut self, title: bool) -> Self {
        self.title = title;
        self
    }

    /// Set the theme. An empty name clears it.
    pub fn with_theme(mut self, theme: impl Into<String>) -> Self {
        let theme = theme.into();
        self.theme = (!theme.is_empty()).then_some(theme);
        self
    }

    pub fn with_size(mut self, width: impl Into<String>, height: impl Into<String>) -> Self {
        self.width = width.into();
        self.height = height.into();
        self
    }
}
