//! Stop Monitoring client error types.

/// Errors from the Stop Monitoring HTTP client.
///
/// A non-200 answer from the service is not an error here: it comes back as
/// an [`SmResponse`](super::SmResponse) like any other response.
#[derive(Debug, thiserror::Error)]
pub enum SmError {
    /// Request never produced a response (DNS, connect, timeout, body read)
    #[error("HTTP request failed")]
    Http(#[from] reqwest::Error),

    /// Endpoint is not a usable URL
    #[error("invalid endpoint {endpoint:?}: {message}")]
    InvalidEndpoint { endpoint: String, message: String },
}
