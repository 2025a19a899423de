//! Error type for the fetch-verify-persist operation.
//!
//! Every failure is reported to users as one message, but the variant is kept
//! so callers and tests can tell a dead server from a bad body or a full disk.

use thiserror::Error;

/// Coarse failure class of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Remote unreachable, DNS failure, timeout, non-2xx status, oversized body.
    Transport,
    /// Body is not JSON or lacks the `data` / `checksum` string fields.
    Parse,
    /// Writing the artifact to local storage failed.
    Storage,
}

#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (connection refused, DNS, timeout, etc.).
    #[error("{0}")]
    Curl(#[from] curl::Error),
    /// HTTP response had a non-2xx status.
    #[error("HTTP {0}")]
    Http(u32),
    /// Response body exceeded the configured cap; the transfer was aborted.
    #[error("response body exceeds {limit} bytes")]
    BodyTooLarge { limit: u64 },
    #[error("invalid payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("storage: {0}")]
    Storage(#[from] std::io::Error),
}

impl FetchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FetchError::Curl(_) | FetchError::Http(_) | FetchError::BodyTooLarge { .. } => {
                ErrorKind::Transport
            }
            FetchError::Parse(_) => ErrorKind::Parse,
            FetchError::Storage(_) => ErrorKind::Storage,
        }
    }
}
