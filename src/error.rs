//! Error type shared by the loader, converter and serializer.

use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input is empty or whitespace-only after trimming.
    #[error("the input file is empty")]
    EmptyInput,
    /// The top-level value is neither a JSON object nor a JSON array.
    #[error("invalid JSON document: root must be an object or array, found {found}")]
    InvalidRootKind { found: String },
    #[error("malformed JSON: {0}")]
    MalformedJson(#[from] serde_json::Error),
    #[error("cannot access {path}: {source}")]
    FileAccess {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConvertError {
    pub(crate) fn file_access(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        ConvertError::FileAccess {
            path: path.into(),
            source,
        }
    }
}
