//! Fetch, persist and verify: the one operation behind the "Fetch Data" button.
//!
//! Sequence: GET the configured endpoint, parse `{data, checksum}`, save
//! `data` through the [`IntegrityStore`], recompute SHA-256 over the UTF-8
//! bytes of `data` and compare it to the server's value. Any failure before
//! the comparison yields [`FetchOutcome::Failure`]; a mismatch is still a
//! success with `verified == false`. There are no retries.

use serde::{Deserialize, Serialize};

use crate::checksum::sha256_hex;
use crate::error::FetchError;
use crate::fetch::{fetch_body, FetchSettings};
use crate::payload::Payload;
use crate::store::IntegrityStore;

/// When the received data is written to the store relative to verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PersistPolicy {
    /// Save before comparing checksums; mismatching data is stored too.
    #[default]
    Always,
    /// Compare first and save only data whose checksum matches.
    VerifiedOnly,
}

/// Result of a fetch whose body was parsed successfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedPayload {
    pub raw_data: String,
    pub server_checksum: String,
    pub computed_checksum: String,
    /// `computed_checksum == server_checksum`, exact and case-sensitive.
    pub verified: bool,
}

#[derive(Debug)]
pub enum FetchOutcome {
    Success(VerifiedPayload),
    Failure(FetchError),
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }

    pub fn verified(&self) -> bool {
        matches!(self, FetchOutcome::Success(p) if p.verified)
    }
}

/// Runs the fetch-verify-persist sequence against one remote endpoint.
#[derive(Debug, Clone)]
pub struct FetchVerifyService {
    remote_url: String,
    settings: FetchSettings,
    persist: PersistPolicy,
    store: IntegrityStore,
}

impl FetchVerifyService {
    pub fn new(
        remote_url: impl Into<String>,
        settings: FetchSettings,
        store: IntegrityStore,
    ) -> Self {
        Self {
            remote_url: remote_url.into(),
            settings,
            persist: PersistPolicy::default(),
            store,
        }
    }

    pub fn with_persist_policy(mut self, persist: PersistPolicy) -> Self {
        self.persist = persist;
        self
    }

    pub fn remote_url(&self) -> &str {
        &self.remote_url
    }

    pub fn store(&self) -> &IntegrityStore {
        &self.store
    }

    /// Fetch from the configured endpoint. Blocking.
    pub fn fetch_and_verify(&self) -> FetchOutcome {
        self.fetch_and_verify_from(&self.remote_url)
    }

    /// Fetch from `url` instead of the configured endpoint. Blocking.
    pub fn fetch_and_verify_from(&self, url: &str) -> FetchOutcome {
        match self.run(url) {
            Ok(payload) => {
                if payload.verified {
                    tracing::info!(url, "checksum verified");
                } else {
                    tracing::warn!(
                        url,
                        expected = %payload.server_checksum,
                        computed = %payload.computed_checksum,
                        "checksum mismatch"
                    );
                }
                FetchOutcome::Success(payload)
            }
            Err(e) => {
                tracing::warn!(url, kind = ?e.kind(), "fetch failed: {}", e);
                FetchOutcome::Failure(e)
            }
        }
    }

    fn run(&self, url: &str) -> Result<VerifiedPayload, FetchError> {
        tracing::debug!(url, "fetching payload");
        let body = fetch_body(url, &self.settings)?;
        let Payload { data, checksum } = Payload::parse(&body)?;

        if self.persist == PersistPolicy::Always {
            self.store.save(&data)?;
        }
        let computed = sha256_hex(data.as_bytes());
        let verified = computed == checksum;
        if self.persist == PersistPolicy::VerifiedOnly && verified {
            self.store.save(&data)?;
        }

        Ok(VerifiedPayload {
            raw_data: data,
            server_checksum: checksum,
            computed_checksum: computed,
            verified,
        })
    }
}
