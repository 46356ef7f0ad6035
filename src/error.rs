use thiserror::Error;

#[derive(Error, Debug)]
pub enum TranspositionError {
    #[error("Invalid Key: {0}")]
    InvalidKey(String),

    #[error("Key length {length} exceeds the brute-force cap of {cap}")]
    TooExpensive { length: usize, cap: usize },

    #[error("Invalid key length range: {min}..={max}")]
    InvalidRange { min: usize, max: usize },

    #[error("Plaintext contains the padding character {0:?}")]
    FillerInInput(char),

    #[error("Padding character {0:?} must not be whitespace")]
    InvalidFiller(char),

    #[error("Search cancelled")]
    Cancelled,

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),
}

pub type TrResult<T> = Result<T, TranspositionError>;
