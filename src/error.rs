use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum TreebatError {
    #[error("Please paste or upload a folder structure first.")]
    EmptyInput,
    #[error(
        "Could not detect a root folder. Please ensure your structure starts with something like `MyProject/`."
    )]
    NoRoot,
    #[error("Root folder {0:?} cannot be used as a script file name")]
    InvalidRoot(String),
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Invalid options in {path}: {message}")]
    Config { path: PathBuf, message: String },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
impl TreebatError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreebatError::Io {
            path: path.into(),
            source,
        }
    }
}
