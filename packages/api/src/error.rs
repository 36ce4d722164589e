use thiserror::Error;

/// Why the user collection could not be loaded.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request never produced a response (bad URL, network failure).
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} responded with status {status}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },

    /// The body is not a JSON array of user records.
    #[error("could not decode user records: {0}")]
    Decode(#[from] serde_json::Error),
}
