use thiserror::Error;

#[derive(Debug, Error)]
pub enum QaError {
    #[error("Configuration error: {0}")]
    Config(String),
}

impl QaError {
    /// Short error code string, stable across releases.
    pub fn code(&self) -> &'static str {
        match self {
            QaError::Config(_) => "CONFIG_ERROR",
        }
    }
}

pub type Result<T> = std::result::Result<T, QaError>;
