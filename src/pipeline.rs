// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Recognition pipeline
//!
//! Runs one inference pass over a decoded image and derives the joined
//! plain-text view from the detections. Detections are kept in the
//! order the engine emitted them; this module never reorders, filters,
//! or post-corrects the engine output.

use std::time::Instant;

use image::DynamicImage;
use thiserror::Error;
use tracing::debug;

use crate::engine::{Detection, EngineError, OcrEngine};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("recognition failed: {0}")]
    Inference(String),
}

/// Output of one recognition pass.
#[derive(Debug, Clone)]
pub struct RecognitionResult {
    /// Detections in engine emission order
    pub detections: Vec<Detection>,
    /// Detection texts joined with a single space, in the same order
    pub text: String,
    /// Wall-clock inference time
    pub processing_time_ms: u64,
}

/// Run the engine once over `image` and assemble the result.
///
/// The joined text is exactly the detection texts separated by one
/// space each: no trimming, no deduplication, no newlines. An image
/// with no detections produces an empty string.
pub fn recognize(
    engine: &dyn OcrEngine,
    image: &DynamicImage,
) -> Result<RecognitionResult, PipelineError> {
    let start = Instant::now();

    let detections = engine.recognize(image).map_err(|e| match e {
        EngineError::Inference(msg) => PipelineError::Inference(msg),
        other => PipelineError::Inference(other.to_string()),
    })?;

    let text = detections
        .iter()
        .map(|d| d.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let processing_time_ms = start.elapsed().as_millis() as u64;
    debug!(
        "recognized {} fragments in {}ms (language '{}')",
        detections.len(),
        processing_time_ms,
        engine.language()
    );

    Ok(RecognitionResult {
        detections,
        text,
        processing_time_ms,
    })
}
