// ABOUTME: Custom error types for the job board client
// ABOUTME: Separates transport failures from malformed feed bodies

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    Network(String),
    MalformedResponse(String),
    Render(String),
    Config(String),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BoardError::Network(msg) => write!(f, "Network error: {}", msg),
            BoardError::MalformedResponse(msg) => write!(f, "Malformed response: {}", msg),
            BoardError::Render(msg) => write!(f, "Render error: {}", msg),
            BoardError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for BoardError {}

impl From<askama::Error> for BoardError {
    fn from(err: askama::Error) -> Self {
        BoardError::Render(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;
