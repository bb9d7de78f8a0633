// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Model loader with process-lifetime handle reuse
//!
//! `ModelCache` is an explicit get-or-create cache keyed by language
//! code, injected through the application state rather than accessed as
//! ambient global state. Engine construction happens under the cache
//! lock, so concurrent first-use requests for the same code never build
//! duplicate handles. There is no eviction: the expected number of
//! distinct languages per session is small, and handles stay resident
//! for the life of the process.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};

use super::{EngineError, OcrEngine};

/// Constructs engine handles for a language code. Implementations wrap
/// a concrete backend (Tesseract, mock); the cache stays backend-agnostic.
pub trait EngineFactory: Send + Sync {
    /// Short backend identifier reported in responses and /health.
    fn backend_name(&self) -> &'static str;

    /// Build a handle for `code`. Construction is allowed to block on
    /// disk or network while model artifacts load.
    fn create(&self, code: &str) -> Result<Arc<dyn OcrEngine>, EngineError>;
}

/// Thread-safe cache of loaded engine handles, one per language code.
pub struct ModelCache {
    factory: Arc<dyn EngineFactory>,
    engines: Mutex<HashMap<String, Arc<dyn OcrEngine>>>,
}

impl ModelCache {
    pub fn new(factory: Arc<dyn EngineFactory>) -> Self {
        Self {
            factory,
            engines: Mutex::new(HashMap::new()),
        }
    }

    pub fn backend_name(&self) -> &'static str {
        self.factory.backend_name()
    }

    /// Return the handle for `code`, constructing it on first use.
    ///
    /// Idempotent: repeated calls with the same code return the same
    /// `Arc`. Construction runs on the blocking pool because weight
    /// loading is disk-bound.
    pub async fn get_or_load(&self, code: &str) -> Result<Arc<dyn OcrEngine>, EngineError> {
        let mut engines = self.engines.lock().await;
        if let Some(engine) = engines.get(code) {
            debug!("reusing loaded OCR engine for '{}'", code);
            return Ok(engine.clone());
        }

        let factory = self.factory.clone();
        let owned_code = code.to_string();
        let engine = tokio::task::spawn_blocking(move || factory.create(&owned_code))
            .await
            .map_err(|e| EngineError::ModelUnavailable {
                code: code.to_string(),
                reason: format!("engine construction task failed: {}", e),
            })??;

        info!(
            "loaded '{}' OCR engine for language '{}'",
            self.factory.backend_name(),
            code
        );
        engines.insert(code.to_string(), engine.clone());
        Ok(engine)
    }

    /// Codes with a resident handle, for /health reporting.
    pub async fn loaded_codes(&self) -> Vec<String> {
        let engines = self.engines.lock().await;
        let mut codes: Vec<String> = engines.keys().cloned().collect();
        codes.sort();
        codes
    }
}
