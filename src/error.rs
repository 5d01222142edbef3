// Error taxonomy for the lookup pipeline. Every failure the pipeline can
// hit is a distinct variant here, so `main` can map each category to its
// own exit code instead of dying with a generic unhandled error.

use std::fmt;

use thiserror::Error;

/// Which remote service a request-level failure came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// The Ghibli films catalog.
    Catalog,
    /// The Bing image-search service.
    Search,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Catalog => f.write_str("catalog"),
            Endpoint::Search => f.write_str("image search"),
        }
    }
}

/// Errors produced while fetching titles and resolving posters.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The search credential is not configured.
    #[error("environment variable {name} is not set or is empty")]
    MissingCredential {
        /// Name of the expected environment variable.
        name: &'static str,
    },

    /// The HTTP client itself could not be constructed.
    #[error("failed to build HTTP client: {source}")]
    ClientInit {
        #[source]
        source: reqwest::Error,
    },

    /// Network-level failure (DNS, connect, timeout) on a request.
    #[error("{endpoint} request failed: {source}")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered, but with a non-success status.
    #[error("{endpoint} endpoint returned HTTP {status}")]
    Status {
        endpoint: Endpoint,
        status: reqwest::StatusCode,
    },

    /// The response body is not valid JSON or lacks required fields.
    #[error("{endpoint} response could not be decoded: {source}")]
    Decode {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },

    /// The search answered with an empty `value` array for a title.
    #[error("no image results for '{title}'")]
    NoResults {
        /// The catalog title that produced no results.
        title: String,
    },

    /// Writing a formatted line to the output stream failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

impl LookupError {
    /// Exit code for this error, one per failure category:
    /// 2 configuration, 3 transport, 4 decode, 1 everything else.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingCredential { .. } => 2,
            Self::Transport { .. } | Self::Status { .. } => 3,
            Self::Decode { .. } | Self::NoResults { .. } => 4,
            Self::ClientInit { .. } | Self::Io(_) => 1,
        }
    }
}
