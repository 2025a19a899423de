//! Web shell: the static page at `/` and the `/fetch` action endpoint.
//!
//! `/fetch` always answers 200 with `{"message": ...}`; failures inside the
//! fetch are part of the message, not the status code.

use axum::extract::State;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use ckfetch_core::FetchVerifyService;
use serde::Serialize;
use std::sync::Arc;

const INDEX_HTML: &str = include_str!("../../assets/index.html");

#[derive(Clone)]
pub struct AppState {
    service: Arc<FetchVerifyService>,
}

#[derive(Debug, Serialize)]
pub struct FetchResponse {
    pub message: String,
}

pub fn build_router(service: FetchVerifyService) -> Router {
    let state = AppState {
        service: Arc::new(service),
    };
    Router::new()
        .route("/", get(index_handler))
        .route("/fetch", get(fetch_handler))
        .with_state(state)
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn fetch_handler(State(state): State<AppState>) -> Json<FetchResponse> {
    let service = Arc::clone(&state.service);
    // curl and the file write both block.
    let message = match tokio::task::spawn_blocking(move || service.fetch_and_verify().message())
        .await
    {
        Ok(message) => message,
        Err(e) => {
            tracing::error!("fetch task failed: {}", e);
            format!("Error connecting to server: {}", e)
        }
    };
    Json(FetchResponse { message })
}
