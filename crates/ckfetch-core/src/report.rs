//! User-facing text for a [`FetchOutcome`].

use crate::verify::{FetchOutcome, VerifiedPayload};

pub const STATUS_VERIFIED: &str = "✅ Checksum verified!";
pub const STATUS_MISMATCH: &str = "❌ Checksum mismatch!";

impl VerifiedPayload {
    pub fn status_text(&self) -> &'static str {
        if self.verified {
            STATUS_VERIFIED
        } else {
            STATUS_MISMATCH
        }
    }
}

impl FetchOutcome {
    /// The single string shown to the user; every failure kind shares one prefix.
    pub fn message(&self) -> String {
        match self {
            FetchOutcome::Success(p) => format!(
                "Data:\n{}\n\nChecksum:\n{}\n\nStatus: {}",
                p.raw_data,
                p.server_checksum,
                p.status_text()
            ),
            FetchOutcome::Failure(e) => format!("Error connecting to server: {}", e),
        }
    }
}
