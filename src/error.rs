//! Error type shared by the loaders, sessions and the student store.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PortfolioError {
    /// A data file the app needs at startup does not exist
    #[error("{} file not found (looked for it at {})", .name, .path.display())]
    MissingFile { name: String, path: PathBuf },

    /// File content that parsed but does not make sense (empty bank, bad record line)
    #[error("malformed data: {0}")]
    MalformedData(String),

    /// Something the user typed that cannot be used
    #[error("invalid input: {0}")]
    UserInputInvalid(String),

    #[error("student ID {0} not found")]
    NotFound(String),

    #[error("student ID {0} already exists")]
    DuplicateId(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("could not read JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PortfolioError>;

impl PortfolioError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::UserInputInvalid(message.into())
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedData(message.into())
    }
}
