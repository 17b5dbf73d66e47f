use thiserror::Error;

use crate::types::CountryCode;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodeError {
    #[error("not a two-letter country code: {0:?}")]
    Malformed(String),
}

/// Failures of the news service calls. None of these reach the page as an
/// error; the news panel turns them into a fallback or unavailable state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NewsError {
    #[error("invalid news endpoint {endpoint:?}: {reason}")]
    Endpoint { endpoint: String, reason: String },
    #[error("request to {endpoint} failed: {reason}")]
    Transport { endpoint: String, reason: String },
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },
    #[error("could not decode news response: {0}")]
    Decode(String),
    #[error("news fetch is only available in the browser")]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("newsLimit must be between 1 and {max}, got {got}")]
    NewsLimit { got: u32, max: u32 },
    #[error("newsEndpoint must not be empty")]
    EmptyEndpoint,
    #[error("newsEndpoint is not usable: {0}")]
    Endpoint(#[source] NewsError),
    #[error("unknown logLevel {0:?}")]
    LogLevel(String),
    #[error("{0} has no row in the country tables")]
    UnknownCountry(CountryCode),
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("could not serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not offer report for download: {0}")]
    Download(String),
}
