/// All errors that can occur when talking to the club's document store.
#[derive(thiserror::Error, Debug)]
pub enum ClubError {
    /// HTTP request failed (network, DNS, TLS, timeout, etc.).
    #[error("http request failed for {url}: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// Store returned a non-success HTTP status code.
    #[error("unexpected status {status} for {url}")]
    UnexpectedStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Failed to read the response body as text.
    #[error("failed to read response body from {url}: {source}")]
    ResponseBody {
        url: String,
        source: reqwest::Error,
    },

    /// Response body was not a valid document of the expected shape.
    #[error("failed to decode document from {url}: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },

    /// A draft or patch was rejected at the write boundary.
    #[error("invalid {entity}: {reason}")]
    Validation {
        entity: &'static str,
        reason: String,
    },

    /// A session's email has no matching player document.
    #[error("no player profile for {email}")]
    ProfileNotFound { email: String },
}

pub type Result<T> = std::result::Result<T, ClubError>;
