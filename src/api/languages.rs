// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! GET /v1/languages handler

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::catalog;

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageDto {
    pub name: String,
    pub code: String,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageDto>,
    pub count: usize,
}

/// Return the full language catalog in its fixed order, so the page's
/// dropdown always lists the same names in the same positions.
pub async fn languages_handler() -> Json<LanguagesResponse> {
    let languages: Vec<LanguageDto> = catalog::entries()
        .map(|entry| LanguageDto {
            name: entry.name.to_string(),
            code: entry.code.to_string(),
        })
        .collect();
    let count = languages.len();
    Json(LanguagesResponse { languages, count })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_catalog_is_complete_and_ordered() {
        let Json(response) = languages_handler().await;
        assert_eq!(response.count, 83);
        assert_eq!(response.languages.len(), 83);
        assert_eq!(response.languages[0].name, "Abaza");
        assert_eq!(response.languages[0].code, "abq");
        let english = response
            .languages
            .iter()
            .find(|l| l.name == "English")
            .unwrap();
        assert_eq!(english.code, "en");
    }
}
