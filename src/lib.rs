// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Single-page OCR web service
//!
//! Upload a PNG or JPEG, pick one of the catalog languages, and a
//! pretrained engine recognizes the text. The service decodes the
//! upload, loads (and caches) an engine handle per language, joins the
//! detection texts with single spaces, and offers the result as a
//! plain-text download. All heavy lifting stays in the engine; this
//! crate is plumbing around it.

pub mod api;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod export;
pub mod pipeline;
pub mod session;
pub mod upload;

pub use api::{router, start_server, AppState};
pub use config::{Backend, ServerConfig};
pub use engine::{ModelCache, OcrEngine};
pub use pipeline::RecognitionResult;
