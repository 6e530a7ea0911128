//! File block domain type
//!
//! A `FileBlock` is one file argument after it has been read: the path as it
//! was supplied plus either its text or the reason it could not be read.

use serde::Serialize;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};

/// One file argument and the outcome of reading it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileBlock {
    /// Path as supplied, for display
    pub path: String,
    /// Path exactly as supplied on the command line
    #[serde(skip)]
    pub raw_path: PathBuf,
    /// Decoded file content
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// Read error description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileBlock {
    /// Read a file fully and decode it as UTF-8, replacing invalid sequences
    ///
    /// Never fails: a read error is captured in the block.
    pub fn load(path: &Path) -> Self {
        let display = path.display().to_string();

        let block = match fs::read(path) {
            Ok(bytes) => Self::with_content(display, String::from_utf8_lossy(&bytes).into_owned()),
            Err(e) => Self::with_error(display, e.to_string()),
        };

        Self {
            raw_path: path.to_path_buf(),
            ..block
        }
    }

    /// Create a block for successfully read content
    pub fn with_content(path: String, content: String) -> Self {
        Self {
            raw_path: PathBuf::from(&path),
            path,
            content: Some(content),
            error: None,
        }
    }

    /// Create a block for a file that could not be read
    pub fn with_error(path: String, error: String) -> Self {
        Self {
            raw_path: PathBuf::from(&path),
            path,
            content: None,
            error: Some(error),
        }
    }

    /// Path bytes as supplied, without lossy replacement
    #[cfg(unix)]
    pub fn path_bytes(&self) -> Cow<'_, [u8]> {
        use std::os::unix::ffi::OsStrExt;
        Cow::Borrowed(self.raw_path.as_os_str().as_bytes())
    }

    /// Path bytes as supplied, without lossy replacement
    #[cfg(not(unix))]
    pub fn path_bytes(&self) -> Cow<'_, [u8]> {
        match self.raw_path.to_str() {
            Some(path) => Cow::Borrowed(path.as_bytes()),
            None => Cow::Owned(self.path.clone().into_bytes()),
        }
    }

    /// Check whether the file was read
    pub fn is_ok(&self) -> bool {
        self.content.is_some()
    }
}
