// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! API error types and HTTP mapping

use std::collections::HashMap;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::engine::EngineError;
use crate::upload::UploadError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unknown language: {0}")]
    UnknownLanguage(String),

    #[error("invalid image: {0}")]
    InvalidImage(#[from] UploadError),

    #[error("model unavailable for '{code}': {reason}")]
    ModelUnavailable { code: String, reason: String },

    #[error("recognition failed: {0}")]
    Recognition(String),

    #[error("validation error on '{field}': {message}")]
    Validation { field: String, message: String },
}

impl ApiError {
    /// Stable machine-readable error category.
    pub fn error_type(&self) -> &'static str {
        match self {
            ApiError::UnknownLanguage(_) => "unknown_language",
            ApiError::InvalidImage(_) => "invalid_image",
            ApiError::ModelUnavailable { .. } => "model_unavailable",
            ApiError::Recognition(_) => "recognition_failed",
            ApiError::Validation { .. } => "validation_error",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::UnknownLanguage(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidImage(_) => StatusCode::BAD_REQUEST,
            ApiError::ModelUnavailable { .. } => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Recognition(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        let CatalogError::UnknownLanguage(name) = err;
        ApiError::UnknownLanguage(name)
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::ModelUnavailable { code, reason } => {
                ApiError::ModelUnavailable { code, reason }
            }
            EngineError::Inference(msg) => ApiError::Recognition(msg),
        }
    }
}

/// JSON body returned for every API error.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let details = match err {
            ApiError::ModelUnavailable { code, .. } => {
                let mut map = HashMap::new();
                map.insert(
                    "languageCode".to_string(),
                    serde_json::Value::String(code.clone()),
                );
                Some(map)
            }
            ApiError::Validation { field, .. } => {
                let mut map = HashMap::new();
                map.insert(
                    "field".to_string(),
                    serde_json::Value::String(field.clone()),
                );
                Some(map)
            }
            _ => None,
        };

        ErrorResponse {
            error_type: err.error_type().to_string(),
            message: err.to_string(),
            details,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorResponse::from(&self);
        (self.status_code(), Json(body)).into_response()
    }
}
