use crate::models::Document;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl IoError {
    fn at(path: &Path) -> impl FnOnce(std::io::Error) -> IoError + '_ {
        move |source| IoError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Read a markup file and return its text
pub fn read_source(path: &Path) -> Result<String, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    fs::read_to_string(path).map_err(IoError::at(path))
}

/// Read and parse a markup file
pub fn read_document(path: &Path) -> Result<Document, IoError> {
    let text = read_source(path)?;
    log::debug!("read {} bytes from {}", text.len(), path.display());
    Ok(Document::parse(&text))
}

/// Canonical file contents for a document: its rendering plus a final newline.
pub fn file_text(doc: &Document) -> String {
    let mut text = doc.render();
    if !text.is_empty() {
        text.push('\n');
    }
    text
}

/// Render a document and write it to `path`, creating parent directories
pub fn write_document(path: &Path, doc: &Document) -> Result<(), IoError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(IoError::at(parent))?;
    }
    fs::write(path, file_text(doc)).map_err(IoError::at(path))
}
