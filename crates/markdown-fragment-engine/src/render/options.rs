use serde::{Deserialize, Serialize};

pub const DEFAULT_BLOCKQUOTE_CLASS: &str = "blockquote";
pub const DEFAULT_TABLE_CLASS: &str = "table";

/// Style knobs the host can set on generated markup.
///
/// Values are inserted into `class="..."` attributes verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// CSS class on every `<blockquote>`. Defaults to `"blockquote"`.
    pub blockquote_class: String,
    /// CSS class on every `<table>`. Defaults to `"table"`.
    pub table_class: String,
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_blockquote_class(mut self, class: impl Into<String>) -> Self {
        self.blockquote_class = class.into();
        self
    }

    #[must_use]
    pub fn with_table_class(mut self, class: impl Into<String>) -> Self {
        self.table_class = class.into();
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            blockquote_class: DEFAULT_BLOCKQUOTE_CLASS.to_string(),
            table_class: DEFAULT_TABLE_CLASS.to_string(),
        }
    }
}
