use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Transport failure or a non-success HTTP status.
    #[error("Failed to fetch data from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("API returned malformed JSON: {message} (URL: {url})")]
    ApiMalformedJson { message: String, url: String },

    #[error("API returned unexpected data structure: {message} (URL: {url})")]
    ApiUnexpectedStructure { message: String, url: String },

    /// A required top-level key is absent from the response body.
    #[error("Missing key '{key}' in response from {url}")]
    Validation { key: String, url: String },

    #[error("Invalid season value {value}: {message}")]
    Format { value: i64, message: String },

    #[error("Malformed team row {row}: {message}")]
    Shape { row: usize, message: String },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Log setup error: {0}")]
    LogSetup(String),
}

impl AppError {
    /// Create a fetch error for the given URL
    pub fn fetch(url: impl Into<String>, source: reqwest::Error) -> Self {
        Self::Fetch {
            url: url.into(),
            source,
        }
    }

    /// Create a malformed JSON error
    pub fn api_malformed_json(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiMalformedJson {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create an unexpected data structure error
    pub fn api_unexpected_structure(message: impl Into<String>, url: impl Into<String>) -> Self {
        Self::ApiUnexpectedStructure {
            message: message.into(),
            url: url.into(),
        }
    }

    /// Create a missing-key validation error
    pub fn validation(key: impl Into<String>, url: impl Into<String>) -> Self {
        Self::Validation {
            key: key.into(),
            url: url.into(),
        }
    }

    /// Create a season format error
    pub fn format_error(value: i64, message: impl Into<String>) -> Self {
        Self::Format {
            value,
            message: message.into(),
        }
    }

    /// Create a table shape error for the row at `row`
    pub fn shape_error(row: usize, message: impl Into<String>) -> Self {
        Self::Shape {
            row,
            message: message.into(),
        }
    }

    /// Create a write error for `path`
    pub fn write_error(path: &Path, source: std::io::Error) -> Self {
        Self::Write {
            path: path.display().to_string(),
            source,
        }
    }

    /// Create a configuration error with context
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a log setup error with context
    pub fn log_setup_error(msg: impl Into<String>) -> Self {
        Self::LogSetup(msg.into())
    }

    /// HTTP status of a failed fetch, if the server answered at all.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            AppError::Fetch { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// True for errors caused by the remote API rather than local input or I/O.
    pub fn is_api_error(&self) -> bool {
        matches!(
            self,
            AppError::Fetch { .. }
                | AppError::ApiMalformedJson { .. }
                | AppError::ApiUnexpectedStructure { .. }
                | AppError::Validation { .. }
        )
    }
}
