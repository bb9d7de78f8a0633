// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! POST /v1/export handler

use axum::http::{header, StatusCode};
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::export;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    /// The recognized text to download, exactly as shown on the page
    pub text: String,
}

/// Stream the recognized text back as a `.txt` attachment.
///
/// The artifact is built from the request body alone, so every visitor
/// downloads exactly the text their own session produced.
pub async fn export_handler(Json(request): Json<ExportRequest>) -> Response {
    let artifact = export::text_artifact(&request.text);
    debug!("exporting {} bytes as {}", artifact.bytes.len(), artifact.filename);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
        .header(
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", artifact.filename),
        )
        .body(axum::body::Body::from(artifact.bytes))
        .unwrap_or_else(|_| Response::new(axum::body::Body::empty()))
}
