use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Custom(String),

    #[error("Cannot read executable {}: {source}", path.display())]
    ExecutableNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Executable path is not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("Invalid archive timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

impl Error {
    pub fn custom<T: Into<String>>(msg: T) -> Self {
        Error::Custom(msg.into())
    }
}
