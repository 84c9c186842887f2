use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardzError {
    #[error("No active card. Query one with -q or -Q first")]
    NoActiveCard,

    #[error("Active card is gone from the directory: {0}")]
    MissingFile(String),

    #[error("Not a valid card name: {0}")]
    MalformedName(String),

    #[error("Refusing to overwrite existing file: {0}")]
    Collision(String),

    #[error("Rename failed, {0} is still in place")]
    Rename(String),

    #[error("Import source is not a directory: {0:?}")]
    InvalidDirectory(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Viewer error: {0}")]
    Viewer(String),
}

pub type Result<T> = std::result::Result<T, CardzError>;
