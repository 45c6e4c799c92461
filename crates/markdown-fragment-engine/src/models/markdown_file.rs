use relative_path::{RelativePath, RelativePathBuf};

/// A markdown source file, addressed relative to the notes root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkdownFile {
    relative_path: RelativePathBuf,
    display_name: String,
}

impl MarkdownFile {
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let display_name = relative_path
            .file_stem()
            .unwrap_or("Untitled")
            .to_string();

        Self {
            relative_path,
            display_name,
        }
    }

    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// File name without its extension
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Name of the rendered fragment, `<stem>.html`
    pub fn html_file_name(&self) -> String {
        format!("{}.html", self.display_name)
    }

    /// Path of the rendered fragment next to the source
    pub fn html_relative_path(&self) -> RelativePathBuf {
        self.relative_path.with_extension("html")
    }
}

impl From<RelativePathBuf> for MarkdownFile {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for MarkdownFile {
    fn from(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }
}
