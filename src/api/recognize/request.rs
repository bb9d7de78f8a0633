// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Recognition request model

use serde::{Deserialize, Serialize};

use crate::api::errors::ApiError;
use crate::upload::{MAX_UPLOAD_SIZE, SUPPORTED_TYPES};

fn default_format() -> String {
    "png".to_string()
}

/// Body of `POST /v1/recognize`.
///
/// Both inputs are optional: the page posts on every input change, and
/// a request with either one missing is answered with the instruction
/// prompt rather than an error.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizeRequest {
    /// Catalog display name of the selected language
    #[serde(default)]
    pub language: Option<String>,

    /// Base64-encoded image bytes
    #[serde(default)]
    pub image: Option<String>,

    /// Declared upload type: png, jpg, or jpeg
    #[serde(default = "default_format")]
    pub format: String,
}

impl RecognizeRequest {
    /// Validate the request shape. Missing inputs are not a validation
    /// failure; only malformed fields are.
    pub fn validate(&self) -> Result<(), ApiError> {
        let format = self.format.to_lowercase();
        if !SUPPORTED_TYPES.contains(&format.as_str()) {
            return Err(ApiError::Validation {
                field: "format".to_string(),
                message: format!(
                    "unsupported format '{}', expected one of: png, jpg, jpeg",
                    self.format
                ),
            });
        }

        if let Some(image) = &self.image {
            // Base64 expands by 4/3, so cap the wire form accordingly.
            if image.len() > MAX_UPLOAD_SIZE * 4 / 3 + 4 {
                return Err(ApiError::Validation {
                    field: "image".to_string(),
                    message: format!(
                        "image payload exceeds the {} byte limit",
                        MAX_UPLOAD_SIZE
                    ),
                });
            }
        }

        Ok(())
    }
}
