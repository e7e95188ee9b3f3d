//! Error type shared by the notepad's document, dialog and storage code.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotepadError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid {field}: {value:?}")]
    Parse { field: &'static str, value: String },
    #[error("font unavailable: {0}")]
    Font(String),
    #[error(transparent)]
    Storage(#[from] padcore::storage::StorageError),
}

impl NotepadError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, NotepadError>;
