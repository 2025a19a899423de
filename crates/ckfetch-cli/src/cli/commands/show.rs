//! `ckfetch show` – print the stored artifact.

use anyhow::{Context, Result};
use ckfetch_core::config::CkfetchConfig;
use ckfetch_core::IntegrityStore;

pub fn run_show(cfg: &CkfetchConfig) -> Result<()> {
    let dir = cfg.resolved_data_dir()?;
    let store = IntegrityStore::locate(&dir, &cfg.file_name);
    match store
        .load()
        .with_context(|| format!("read {}", store.path().display()))?
    {
        Some(content) => println!("{}", content),
        None => println!("Nothing stored yet at {}.", store.path().display()),
    }
    Ok(())
}
