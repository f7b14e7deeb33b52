//! Content source abstraction and the JSON text loader.

use super::helpers::{is_blank, trim_controls};
use crate::error::ConvertError;
use camino::Utf8Path;
use std::io;

/// Trait for abstracting where JSON input comes from (filesystem vs. memory).
pub trait ContentSource {
    /// Read the file at the given path and return its full content.
    fn read_to_string(&mut self, path: &Utf8Path) -> io::Result<String>;
}

/// Reads files directly from the local filesystem.
pub struct FsSource;

impl ContentSource for FsSource {
    fn read_to_string(&mut self, path: &Utf8Path) -> io::Result<String> {
        std::fs::read_to_string(path.as_std_path())
    }
}

/// Read a JSON input file and return its trimmed text.
///
/// All lines are joined without a separator before trimming, so line
/// terminators never reach the converter. Trimming removes ASCII controls
/// and spaces only; a result that is still blank is rejected with
/// [`ConvertError::EmptyInput`].
pub fn load_json_text<S: ContentSource>(
    source: &mut S,
    path: &Utf8Path,
) -> Result<String, ConvertError> {
    let raw = source
        .read_to_string(path)
        .map_err(|e| ConvertError::file_access(path, e))?;
    let joined: String = raw.lines().collect();
    let text = trim_controls(&joined);
    if is_blank(text) {
        return Err(ConvertError::EmptyInput);
    }
    tracing::debug!("loaded {} bytes of JSON from {}", text.len(), path);
    Ok(text.to_string())
}
