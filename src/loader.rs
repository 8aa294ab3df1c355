//! Text loading.
//!
//! Getting text out of PDFs or web pages is the job of external tools; this
//! module only defines the seam ([`TextLoader`]) and a loader for plain UTF-8
//! text files.

use crate::error::{Error, Result};
use std::path::PathBuf;

/// Where a document's text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextSource {
    /// A file on disk
    Path(PathBuf),
    /// A web resource
    Url(String),
}

/// Produces the decoded text of a document.
pub trait TextLoader {
    /// Load the full text of `source`.
    fn load(&self, source: &TextSource) -> Result<String>;
}

/// Reads UTF-8 text files. URLs are not supported.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextLoader;

impl PlainTextLoader {
    /// Create a new loader.
    pub fn new() -> Self {
        Self
    }
}

impl TextLoader for PlainTextLoader {
    fn load(&self, source: &TextSource) -> Result<String> {
        match source {
            TextSource::Path(path) => {
                let bytes = std::fs::read(path)?;
                log::debug!("Loaded {} bytes from {}", bytes.len(), path.display());
                Ok(String::from_utf8(bytes)?)
            },
            TextSource::Url(url) => Err(Error::Unsupported(format!("loading URL {}", url))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_text_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Statement of Work").unwrap();

        let text = PlainTextLoader::new()
            .load(&TextSource::Path(file.path().to_path_buf()))
            .unwrap();
        assert_eq!(text, "Statement of Work");
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PlainTextLoader::new()
            .load(&TextSource::Path(PathBuf::from("/nonexistent/contract.txt")))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xff, 0xfe, 0xfd]).unwrap();

        let err = PlainTextLoader::new()
            .load(&TextSource::Path(file.path().to_path_buf()))
            .unwrap_err();
        assert!(matches!(err, Error::Utf8Error(_)));
    }

    #[test]
    fn test_url_unsupported() {
        let err = PlainTextLoader::new()
            .load(&TextSource::Url("https://sam.gov".to_string()))
            .unwrap_err();
        assert!(matches!(err, Error::Unsupported(_)));
    }
}
