// Error types for the library. The binary wraps these in anyhow.

use thiserror::Error;

/// Failure talking to the X-EA Awards API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid API base URL {0:?}")]
    InvalidBaseUrl(String),

    #[error("{url} returned HTTP {status}")]
    Status { status: u16, url: String },

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Search form input that cannot be turned into a request
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FilterError {
    #[error("enter a search term")]
    EmptyQuery,

    #[error("{field} must be a number, got {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("{field} cannot be negative")]
    Negative { field: &'static str },

    #[error(transparent)]
    UnknownOption(#[from] crate::account::ParseEnumError),
}

/// Anything a data source caller can run into
#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Filter(#[from] FilterError),
}

pub type Result<T, E = DashboardError> = std::result::Result<T, E>;
