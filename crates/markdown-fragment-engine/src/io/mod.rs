use crate::models::MarkdownFile;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
    #[error("File is not valid UTF-8: {0}")]
    NotUtf8(PathBuf),
}

/// Read a markdown file as UTF-8 text
pub fn read_file(relative_path: &RelativePath, notes_root: &Path) -> Result<String, IoError> {
    read_path(&relative_path.to_path(notes_root))
}

/// Read any path as UTF-8 text
pub fn read_path(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path)?;
    String::from_utf8(bytes).map_err(|_| IoError::NotUtf8(path.to_path_buf()))
}

/// Write content to a file under the notes root, creating parent directories
pub fn write_file(
    relative_path: &RelativePath,
    notes_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(notes_root);

    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&absolute_path, content)?;
    log::debug!("wrote {} bytes to {}", content.len(), absolute_path.display());
    Ok(())
}

/// Scan for markdown files in the notes directory, sorted by path
pub fn scan_markdown_files(notes_root: &Path) -> Result<Vec<PathBuf>, IoError> {
    if !notes_root.exists() {
        return Err(IoError::InvalidNotesDir(
            "notes directory not found".to_string(),
        ));
    }

    let mut files = Vec::new();
    scan_directory_recursive(notes_root, &mut files)?;
    files.sort();
    log::debug!(
        "found {} markdown files under {}",
        files.len(),
        notes_root.display()
    );
    Ok(files)
}

/// Markdown files under the notes directory as display-ready models
pub fn list_markdown_files(notes_root: &Path) -> Result<Vec<MarkdownFile>, IoError> {
    let files = scan_markdown_files(notes_root)?
        .into_iter()
        .filter_map(|path| {
            let relative = path.strip_prefix(notes_root).ok()?;
            RelativePathBuf::from_path(relative).ok()
        })
        .map(MarkdownFile::new)
        .collect();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), IoError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == "md"
        {
            files.push(path);
        }
    }

    Ok(())
}

pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.is_dir() {
        return Err(IoError::InvalidNotesDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}
