use pokegrid_protocol::ParseError;
use thiserror::Error;

/// Why a response was rejected after the transport delivered it
#[derive(Error, Debug)]
pub enum BadResponse {
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    #[error("malformed body: {0}")]
    Malformed(#[from] ParseError),
}

/// Failure of a single list or detail fetch
#[derive(Error, Debug)]
pub enum FetchError {
    /// The request never produced a response
    #[error("Network error fetching {url}: {message}")]
    Network { url: String, message: String },

    /// Non-2xx status or a body that does not parse
    #[error("Bad response from {url}: {reason}")]
    BadResponse { url: String, reason: BadResponse },
}

impl FetchError {
    pub fn network(url: impl Into<String>, error: impl std::fmt::Display) -> Self {
        Self::Network {
            url: url.into(),
            message: error.to_string(),
        }
    }

    pub fn status(url: impl Into<String>, status: u16) -> Self {
        Self::BadResponse {
            url: url.into(),
            reason: BadResponse::Status(status),
        }
    }

    pub fn malformed(url: impl Into<String>, source: ParseError) -> Self {
        Self::BadResponse {
            url: url.into(),
            reason: BadResponse::Malformed(source),
        }
    }

    /// URL of the request that failed
    pub fn url(&self) -> &str {
        match self {
            Self::Network { url, .. } | Self::BadResponse { url, .. } => url,
        }
    }
}

/// Invalid configuration value
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}
