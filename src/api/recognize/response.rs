// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Recognition response model

use serde::{Deserialize, Serialize};

use crate::engine::Detection;
use crate::pipeline::RecognitionResult;

/// Message shown while either input is missing.
pub const INSTRUCTION_PROMPT: &str =
    "Please select a language and upload an image for recognition. The text will appear here.";

/// One detection on the wire.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionDto {
    pub text: String,
    pub confidence: f32,
    /// Bounding polygon corners as [x, y] pairs, clockwise from top-left
    pub region: Vec<[u32; 2]>,
}

impl From<&Detection> for DetectionDto {
    fn from(detection: &Detection) -> Self {
        Self {
            text: detection.text.clone(),
            confidence: detection.confidence,
            region: detection
                .region
                .points
                .iter()
                .map(|p| [p.x, p.y])
                .collect(),
        }
    }
}

/// Body of a successful `POST /v1/recognize`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecognizeResponse {
    /// Display state the page should render: idle or resultShown
    pub state: String,

    /// Instruction prompt, present only while inputs are incomplete
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,

    /// Engine language code the recognition ran with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// All detection texts joined with single spaces, in detection order
    pub text: String,

    /// Individual detection texts, in detection order
    pub texts: Vec<String>,

    pub detections: Vec<DetectionDto>,

    pub processing_time_ms: u64,

    /// Backend that served the request
    pub model: String,
}

impl RecognizeResponse {
    /// Response for a request with one or both inputs missing.
    pub fn prompt(state: &str, model: &str) -> Self {
        Self {
            state: state.to_string(),
            prompt: Some(INSTRUCTION_PROMPT.to_string()),
            language: None,
            text: String::new(),
            texts: Vec::new(),
            detections: Vec::new(),
            processing_time_ms: 0,
            model: model.to_string(),
        }
    }

    /// Response for a completed recognition pass.
    pub fn from_result(state: &str, code: &str, model: &str, result: &RecognitionResult) -> Self {
        Self {
            state: state.to_string(),
            prompt: None,
            language: Some(code.to_string()),
            text: result.text.clone(),
            texts: result.detections.iter().map(|d| d.text.clone()).collect(),
            detections: result.detections.iter().map(DetectionDto::from).collect(),
            processing_time_ms: result.processing_time_ms,
            model: model.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Region;

    #[test]
    fn test_prompt_response_shape() {
        let response = RecognizeResponse::prompt("idle", "mock");
        assert_eq!(response.state, "idle");
        assert_eq!(response.prompt.as_deref(), Some(INSTRUCTION_PROMPT));
        assert!(response.text.is_empty());
        assert!(response.detections.is_empty());
    }

    #[test]
    fn test_result_response_carries_join_and_order() {
        let result = RecognitionResult {
            detections: vec![
                Detection::new("alpha", 0.9, Region::from_rect(0, 0, 10, 10)),
                Detection::new("beta", 0.8, Region::from_rect(0, 12, 10, 10)),
            ],
            text: "alpha beta".to_string(),
            processing_time_ms: 42,
        };
        let response = RecognizeResponse::from_result("resultShown", "en", "mock", &result);
        assert_eq!(response.state, "resultShown");
        assert!(response.prompt.is_none());
        assert_eq!(response.language.as_deref(), Some("en"));
        assert_eq!(response.text, "alpha beta");
        assert_eq!(response.texts, vec!["alpha", "beta"]);
        assert_eq!(response.detections.len(), 2);
        assert_eq!(response.processing_time_ms, 42);
    }

    #[test]
    fn test_detection_dto_region_corners() {
        let detection = Detection::new("x", 0.5, Region::from_rect(1, 2, 3, 4));
        let dto = DetectionDto::from(&detection);
        assert_eq!(dto.region, vec![[1, 2], [4, 2], [4, 6], [1, 6]]);
    }

    #[test]
    fn test_prompt_field_omitted_when_none() {
        let result = RecognitionResult {
            detections: vec![],
            text: String::new(),
            processing_time_ms: 0,
        };
        let response = RecognizeResponse::from_result("resultShown", "en", "mock", &result);
        let json = serde_json::to_string(&response).unwrap();
        assert!(!json.contains("prompt"));
        assert!(json.contains("processingTimeMs"));
    }
}
