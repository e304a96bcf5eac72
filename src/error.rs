use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherError {
    #[error("Missing required key: {0}")]
    MissingKey(String),

    #[error("Invalid key: {0}")]
    InvalidKey(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CipherError {
    /// True when the caller supplied something unusable, false when the
    /// failure happened on our side.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::MissingKey(_) | Self::InvalidKey(_) | Self::InvalidInput(_) | Self::Json(_) => {
                true
            }
            Self::Processing(_) | Self::Io(_) => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CipherError>;
