//! Error types for the FinanceView client.

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Failures surfaced by [`QueryClient`](crate::QueryClient) operations.
///
/// Nothing here is fatal: every variant is recoverable at the call site by
/// re-invoking the operation. The client never retries on its own.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced an HTTP response (connection refused,
    /// DNS failure, timeout), or the response body could not be read.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The service answered with a non-empty top-level `errors` array.
    /// Carries every message, not just the first.
    #[error("graphql errors: {}", .0.join("; "))]
    GraphQL(Vec<String>),

    /// The response arrived but did not decode into the expected shape:
    /// non-JSON body, missing `data`, or fields of the wrong type.
    #[error("malformed response: {0}")]
    Shape(String),
}

/// Local validation failure for a draft, raised before any network call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid value for field `{field}`")]
pub struct ValidationError {
    pub field: &'static str,
}

impl ValidationError {
    pub fn field(field: &'static str) -> Self {
        Self { field }
    }
}
