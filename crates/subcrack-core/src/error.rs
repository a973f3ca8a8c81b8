use thiserror::Error;

#[derive(Error, Debug)]
pub enum SubcrackError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid symbol {ch:?} at position {position}; expected 'a'..'z' or space")]
    InvalidSymbol { ch: char, position: usize },

    #[error("invalid key: {0}")]
    InvalidKey(String),

    #[error("no input supplied; pass --text or --input")]
    MissingInput,

    #[error("input is empty after encoding")]
    EmptyInput,
}

pub type ScResult<T> = Result<T, SubcrackError>;
