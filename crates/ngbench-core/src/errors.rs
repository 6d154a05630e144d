//! Error types for the benchmark harness.
//!
//! Two tiers: `ConfigError` is fatal (the run never starts), `ClientError`
//! is per-call (the runner degrades it to a sentinel record).

/// Errors raised while loading the config or the test suite.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// File was read but is not JSON of the expected shape.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// Structurally valid but semantically unusable.
    #[error("{message}")]
    Invalid { message: String },
}

/// Errors raised by a generation client for a single call.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Endpoint could not be parsed into a usable URL.
    #[error("invalid endpoint {endpoint}: {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    /// Transport-level failure (connect, DNS, read).
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server responded outside the 2xx range.
    #[error("server returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// Response body parsed but the expected field is missing.
    #[error("response is missing field `{0}`")]
    MissingField(&'static str),

    /// Call exceeded the configured deadline.
    #[error("generation timed out after {0:.1}s")]
    Timeout(f64),
}
