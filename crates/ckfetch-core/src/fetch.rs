//! The single outbound HTTP GET.
//!
//! Uses the curl crate (libcurl). Runs in the current thread; call from
//! `spawn_blocking` if used from async code.

use std::time::Duration;

use crate::error::FetchError;

/// Default cap on the response body (16 MiB).
pub const DEFAULT_MAX_BODY_BYTES: u64 = 16 * 1024 * 1024;

/// Transfer limits for the outbound request. `None` leaves the limit to libcurl
/// (i.e. wait indefinitely).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchSettings {
    pub connect_timeout: Option<Duration>,
    pub timeout: Option<Duration>,
    pub max_body_bytes: u64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Some(Duration::from_secs(15)),
            timeout: Some(Duration::from_secs(30)),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

/// GET `url` and return the full body of a 2xx response. Follows redirects.
pub fn fetch_body(url: &str, settings: &FetchSettings) -> Result<Vec<u8>, FetchError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    if let Some(d) = settings.connect_timeout {
        easy.connect_timeout(d)?;
    }
    if let Some(d) = settings.timeout {
        easy.timeout(d)?;
    }

    let limit = settings.max_body_bytes;
    let mut body: Vec<u8> = Vec::new();
    let mut too_large = false;
    let performed = {
        let mut transfer = easy.transfer();
        transfer.write_function(|data| {
            if (body.len() + data.len()) as u64 > limit {
                too_large = true;
                return Ok(0); // abort transfer
            }
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()
    };
    if too_large {
        return Err(FetchError::BodyTooLarge { limit });
    }
    performed?;

    let code = easy.response_code()?;
    if !(200..300).contains(&code) {
        return Err(FetchError::Http(code));
    }
    tracing::debug!(url, status = code, bytes = body.len(), "GET completed");
    Ok(body)
}
