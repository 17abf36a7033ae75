use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    Timeout,
    Network,
    HttpStatus,
    Decode,
    Internal,
}

impl ErrorCode {
    pub fn label(self) -> &'static str {
        match self {
            Self::Timeout => "timeout",
            Self::Network => "network",
            Self::HttpStatus => "http status",
            Self::Decode => "decode",
            Self::Internal => "internal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{}: {message}", code.label())]
pub struct LoadError {
    pub code: ErrorCode,
    pub message: String,
}

impl LoadError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_code_label_and_message() {
        let err = LoadError::new(ErrorCode::HttpStatus, "endpoint returned 503");
        assert_eq!(err.to_string(), "http status: endpoint returned 503");
    }
}
