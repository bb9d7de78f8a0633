// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

use std::env;
use std::sync::Arc;

use tracing::info;

use ocr_web::api::{start_server, AppState};
use ocr_web::config::{Backend, ServerConfig};
use ocr_web::engine::mock::MockFactory;
use ocr_web::engine::tesseract::TesseractFactory;
use ocr_web::engine::{EngineFactory, ModelCache};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let factory: Arc<dyn EngineFactory> = match config.backend {
        Backend::Tesseract => Arc::new(TesseractFactory),
        Backend::Mock => Arc::new(MockFactory::new()),
    };
    info!("starting OCR web service with '{}' backend", config.backend.name());

    let state = AppState::new(Arc::new(ModelCache::new(factory)));
    start_server(&config, state).await
}
