pub mod config;
pub mod logging;

pub mod checksum;
pub mod error;
pub mod fetch;
pub mod payload;
pub mod report;
pub mod store;
pub mod verify;

pub use error::{ErrorKind, FetchError};
pub use store::IntegrityStore;
pub use verify::{FetchOutcome, FetchVerifyService, PersistPolicy, VerifiedPayload};
