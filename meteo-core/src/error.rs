use thiserror::Error;

/// Why a provider call produced no usable data.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} answered with status {status}: {body}")]
    Status { url: String, status: u16, body: String },

    #[error("unusable response body from {url}: {reason}")]
    Body { url: String, reason: String },
}
