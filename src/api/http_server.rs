// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP server setup and routing

use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, Method};
use axum::response::Html;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::export::export_handler;
use crate::api::languages::languages_handler;
use crate::api::recognize::recognize_handler;
use crate::config::ServerConfig;
use crate::engine::ModelCache;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub models: Arc<ModelCache>,
}

impl AppState {
    pub fn new(models: Arc<ModelCache>) -> Self {
        Self { models }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub backend: String,
    pub loaded_languages: Vec<String>,
}

/// GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        backend: state.models.backend_name().to_string(),
        loaded_languages: state.models.loaded_codes().await,
    })
}

/// GET / serves the single page.
pub async fn page_handler() -> Html<&'static str> {
    Html(include_str!("../../assets/index.html"))
}

/// Build the router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(page_handler))
        .route("/health", get(health_handler))
        .route("/v1/languages", get(languages_handler))
        .route("/v1/recognize", post(recognize_handler))
        .route("/v1/export", post(export_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn start_server(config: &ServerConfig, state: AppState) -> anyhow::Result<()> {
    let app = router(state);
    let addr = config.listen_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!("OCR web service listening on {}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
