use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum CoreError {
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("config error: {0}")]
    Config(String),
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for CoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.status() == Some(reqwest::StatusCode::NOT_FOUND) {
            return Self::NotFound(err.to_string());
        }
        if err.is_decode() {
            return Self::Parse(err.to_string());
        }
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

impl From<std::io::Error> for CoreError {
    fn from(err: std::io::Error) -> Self {
        Self::Other(err.to_string())
    }
}

impl From<String> for CoreError {
    fn from(err: String) -> Self {
        Self::Other(err)
    }
}

impl From<&str> for CoreError {
    fn from(err: &str) -> Self {
        Self::Other(err.to_string())
    }
}
