//! `ckfetch serve` – web page plus the /fetch endpoint.

use anyhow::{Context, Result};
use ckfetch_core::config::CkfetchConfig;
use tokio::net::TcpListener;

use crate::cli::web;

pub async fn run_serve(cfg: &CkfetchConfig) -> Result<()> {
    let service = cfg.build_service()?;
    tracing::info!(
        remote = %service.remote_url(),
        artifact = %service.store().path().display(),
        "fetch target configured"
    );
    let app = web::build_router(service);

    let listener = TcpListener::bind(&cfg.bind_addr)
        .await
        .with_context(|| format!("bind {}", cfg.bind_addr))?;
    tracing::info!("ckfetch listening on {}", cfg.bind_addr);
    println!("Listening on http://{}", cfg.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;
    tracing::info!("ckfetch stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("ctrl-c handler: {}", e);
        std::future::pending::<()>().await;
    }
}
