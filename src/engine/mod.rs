// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! OCR engine seam
//!
//! Text detection, segmentation, and recognition are fully delegated to
//! a pretrained engine behind the [`OcrEngine`] trait. The service never
//! inspects pixels itself; it only decodes the upload and hands the
//! buffer to whichever backend the handle wraps.

pub mod loader;
pub mod mock;
pub mod tesseract;

use image::DynamicImage;
use thiserror::Error;

pub use loader::{EngineFactory, ModelCache};

/// A point in image pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// Bounding polygon of a detected text fragment.
///
/// Four corners in clockwise order starting at the top-left. Engines
/// that only report axis-aligned boxes expand them to a rectangle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    pub points: [Point; 4],
}

impl Region {
    pub fn from_rect(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            points: [
                Point { x, y },
                Point { x: x + width, y },
                Point { x: x + width, y: y + height },
                Point { x, y: y + height },
            ],
        }
    }
}

/// One recognized text fragment with its bounding region and confidence.
#[derive(Debug, Clone)]
pub struct Detection {
    /// Bounding polygon in the source image
    pub region: Region,
    /// Recognized text content
    pub text: String,
    /// Confidence score (0.0-1.0)
    pub confidence: f32,
}

impl Detection {
    pub fn new(text: impl Into<String>, confidence: f32, region: Region) -> Self {
        Self {
            region,
            text: text.into(),
            confidence,
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    /// The engine does not support the code or its model artifacts
    /// cannot be fetched/loaded.
    #[error("model unavailable for '{code}': {reason}")]
    ModelUnavailable { code: String, reason: String },

    /// The engine raised during inference.
    #[error("inference failed: {0}")]
    Inference(String),
}

/// An opaque handle over a pretrained OCR engine configured for one
/// language. Handles are expensive to construct (large weight files),
/// shared read-only across concurrent requests, and live for the rest
/// of the process once built; [`ModelCache`] enforces one per code.
pub trait OcrEngine: Send + Sync {
    /// Language code this handle was built for.
    fn language(&self) -> &str;

    /// Run inference once over a decoded image.
    ///
    /// Detections come back in recognition order, which is not
    /// guaranteed to be reading order. A blank image yields an empty
    /// sequence, not an error.
    fn recognize(&self, image: &DynamicImage) -> Result<Vec<Detection>, EngineError>;
}

impl std::fmt::Debug for dyn OcrEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OcrEngine")
            .field("language", &self.language())
            .finish()
    }
}
