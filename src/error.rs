use thiserror::Error;

/// Main error type for logboard
#[derive(Error, Debug, Clone)]
pub enum LogboardError {
    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Errors reaching the log endpoint
    #[error("Fetch error: {message}")]
    Fetch { message: String },

    /// Non-success HTTP status from the log endpoint
    #[error("Fetch failed with status {status} from {endpoint}")]
    FetchStatus { status: u16, endpoint: String },

    /// Malformed payload from the log endpoint
    #[error("Decode error: {message}")]
    Decode { message: String },

    /// Internal errors
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl LogboardError {
    /// Create a configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a fetch error
    pub fn fetch<S: Into<String>>(message: S) -> Self {
        Self::Fetch {
            message: message.into(),
        }
    }

    /// Create a fetch error for a non-success HTTP status
    pub fn fetch_status<S: Into<String>>(status: u16, endpoint: S) -> Self {
        Self::FetchStatus {
            status,
            endpoint: endpoint.into(),
        }
    }

    /// Create a decode error
    pub fn decode<S: Into<String>>(message: S) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if the error came from the fetch boundary
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            LogboardError::Fetch { .. } | LogboardError::FetchStatus { .. }
        )
    }
}

/// Result type alias for logboard operations
pub type LogboardResult<T> = Result<T, LogboardError>;

impl From<std::io::Error> for LogboardError {
    fn from(err: std::io::Error) -> Self {
        LogboardError::config(format!("IO error: {}", err))
    }
}

impl From<reqwest::Error> for LogboardError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LogboardError::fetch(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            LogboardError::fetch(format!("Connection error: {}", err))
        } else if err.is_decode() {
            LogboardError::decode(format!("Response body error: {}", err))
        } else {
            LogboardError::fetch(format!("HTTP error: {}", err))
        }
    }
}

impl From<serde_json::Error> for LogboardError {
    fn from(err: serde_json::Error) -> Self {
        LogboardError::decode(format!("JSON error: {}", err))
    }
}

impl From<toml::de::Error> for LogboardError {
    fn from(err: toml::de::Error) -> Self {
        LogboardError::config(format!("TOML parsing error: {}", err))
    }
}
