use std::fmt;

#[derive(Debug)]
pub enum AppError {
    UpstreamUnavailable(String),
    ReadError(String),
    DecodeError(String),
    EncodeError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::UpstreamUnavailable(msg) => write!(f, "Upstream unavailable: {}", msg),
            AppError::ReadError(msg) => write!(f, "Read error: {}", msg),
            AppError::DecodeError(msg) => write!(f, "Decode error: {}", msg),
            AppError::EncodeError(msg) => write!(f, "Encode error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}
