use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum DashError {
    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The response body was not the JSON shape we expected.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    ///
    /// The `token` query parameter is redacted from `url`.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// No Finnhub API key was configured on the client.
    #[error("Finnhub API key is not configured")]
    MissingApiKey,

    /// The news aggregator failed as a whole. The underlying cause is logged, not carried.
    #[error("Failed to fetch news")]
    NewsUnavailable,
}
