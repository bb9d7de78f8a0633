// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! HTTP API surface

pub mod errors;
pub mod export;
pub mod http_server;
pub mod languages;
pub mod recognize;

pub use errors::{ApiError, ErrorResponse};
pub use http_server::{router, start_server, AppState};
