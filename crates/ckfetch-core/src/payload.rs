//! Wire format of the remote endpoint: `{ "data": string, "checksum": string }`.

use serde::Deserialize;

use crate::error::FetchError;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Payload {
    pub data: String,
    /// Expected lowercase hex SHA-256 of `data`. Not validated here.
    pub checksum: String,
}

impl Payload {
    /// Parse a response body. Unknown fields are ignored; missing or
    /// non-string `data` / `checksum` is an error.
    pub fn parse(body: &[u8]) -> Result<Payload, FetchError> {
        Ok(serde_json::from_slice(body)?)
    }
}
