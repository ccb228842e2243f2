use thiserror::Error;

/// Errors returned by the Places provider client.
#[derive(Debug, Error)]
pub enum PlacesError {
    /// Network, TLS, or non-2xx HTTP failure. The request URL is stripped
    /// because it carries the API key.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The provider answered with a status other than `OK`/`ZERO_RESULTS`.
    #[error("Places API status {status}: {message}")]
    Status { status: String, message: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid Places base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}
