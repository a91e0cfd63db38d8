use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReceiptError {
    #[error("OCR recognition failed: {0}")]
    OcrFailure(String),

    #[error("Invalid amount {value:?} on line {name:?}: not a parseable price")]
    InvalidAmount { name: String, value: String },

    #[error("Years must be a non-empty list")]
    EmptyYearSet,

    #[error("No receipt found with id: {0}")]
    UnknownReceipt(String),

    #[error("Storage error: {0}")]
    Persistence(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ReceiptError>;
