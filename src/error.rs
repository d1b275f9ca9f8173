use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardkitError>;

#[derive(Debug, Error)]
pub enum BoardkitError {
    #[error("Invalid board index: {index} (board has {len} items)")]
    InvalidIndex { index: usize, len: usize },

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
