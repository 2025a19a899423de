//! `ckfetch fetch` – run the fetch-verify-persist operation once.

use anyhow::{Context, Result};
use ckfetch_core::config::CkfetchConfig;
use ckfetch_core::FetchOutcome;

pub async fn run_fetch(cfg: &CkfetchConfig) -> Result<()> {
    let service = cfg.build_service()?;
    let outcome = tokio::task::spawn_blocking(move || service.fetch_and_verify())
        .await
        .context("fetch task failed")?;
    match outcome {
        FetchOutcome::Success(_) => {
            println!("{}", outcome.message());
            Ok(())
        }
        FetchOutcome::Failure(e) => {
            Err(anyhow::Error::new(e).context("Error connecting to server"))
        }
    }
}
