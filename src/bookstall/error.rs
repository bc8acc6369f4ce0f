use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookstallError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, BookstallError>;
