use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockError {
    #[error("Product not found: {0}")]
    NotFound(String),

    #[error("Product already exists: {0}")]
    DuplicateName(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("{0} is undefined for an empty input")]
    EmptyInput(&'static str),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StockError>;
