use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThreadError {
    #[error("Index {index} out of range for collection of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("No entry found at index {0}")]
    TargetNotFound(usize),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ThreadError>;
