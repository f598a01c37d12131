// src/errors.rs
use thiserror::Error;

/// A creation request the service did not accept.
#[derive(Error, Debug)]
pub enum SubmitError {
    #[error("submission rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// A list or single-record fetch that produced no usable snapshot.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("service returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Raised while constructing a component, before any request is issued.
#[derive(Error, Debug)]
pub enum ConfigurationError {
    #[error("no expression id in location '{location}'")]
    MissingId { location: String },

    #[error("invalid value '{value}' for {key}")]
    InvalidSetting { key: String, value: String },

    #[error("invalid base endpoint '{0}'")]
    InvalidBaseUrl(String),
}

/// Startup failures of the dashboard host.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigurationError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_errors_name_their_cause() {
        let err = ClientError::from(ConfigurationError::InvalidBaseUrl("nope".into()));
        assert_eq!(
            err.to_string(),
            "Configuration error: invalid base endpoint 'nope'"
        );
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
