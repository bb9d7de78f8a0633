// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Scripted OCR backend
//!
//! Deterministic engine used by the test suite and selectable with
//! `OCR_BACKEND=mock` for running the service without a Tesseract
//! install. Each language code can be scripted with a fixed detection
//! sequence; unscripted codes behave like a blank image (no detections).

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use image::DynamicImage;

use super::{Detection, EngineError, EngineFactory, OcrEngine};

pub struct MockEngine {
    code: String,
    detections: Vec<Detection>,
}

impl MockEngine {
    pub fn new(code: impl Into<String>, detections: Vec<Detection>) -> Self {
        Self {
            code: code.into(),
            detections,
        }
    }
}

impl OcrEngine for MockEngine {
    fn language(&self) -> &str {
        &self.code
    }

    fn recognize(&self, _image: &DynamicImage) -> Result<Vec<Detection>, EngineError> {
        Ok(self.detections.clone())
    }
}

/// Engine whose inference always faults, for error-path tests.
pub struct FaultyEngine {
    code: String,
    message: String,
}

impl FaultyEngine {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

impl OcrEngine for FaultyEngine {
    fn language(&self) -> &str {
        &self.code
    }

    fn recognize(&self, _image: &DynamicImage) -> Result<Vec<Detection>, EngineError> {
        Err(EngineError::Inference(self.message.clone()))
    }
}

/// Factory producing [`MockEngine`]s. Counts constructions so tests can
/// assert handle reuse and lazy evaluation.
#[derive(Default)]
pub struct MockFactory {
    scripts: HashMap<String, Vec<Detection>>,
    unavailable: HashSet<String>,
    faulty: HashSet<String>,
    created: AtomicUsize,
}

impl MockFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the detections returned for a language code.
    pub fn with_script(mut self, code: impl Into<String>, detections: Vec<Detection>) -> Self {
        self.scripts.insert(code.into(), detections);
        self
    }

    /// Make loading fail for a language code.
    pub fn with_unavailable(mut self, code: impl Into<String>) -> Self {
        self.unavailable.insert(code.into());
        self
    }

    /// Make inference fault for a language code.
    pub fn with_faulty(mut self, code: impl Into<String>) -> Self {
        self.faulty.insert(code.into());
        self
    }

    /// How many engines this factory has constructed.
    pub fn created(&self) -> usize {
        self.created.load(Ordering::SeqCst)
    }
}

impl EngineFactory for MockFactory {
    fn backend_name(&self) -> &'static str {
        "mock"
    }

    fn create(&self, code: &str) -> Result<Arc<dyn OcrEngine>, EngineError> {
        if self.unavailable.contains(code) {
            return Err(EngineError::ModelUnavailable {
                code: code.to_string(),
                reason: "scripted as unavailable".to_string(),
            });
        }
        self.created.fetch_add(1, Ordering::SeqCst);
        if self.faulty.contains(code) {
            return Ok(Arc::new(FaultyEngine::new(code, "scripted engine fault")));
        }
        let detections = self.scripts.get(code).cloned().unwrap_or_default();
        Ok(Arc::new(MockEngine::new(code, detections)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Region;

    fn blank() -> DynamicImage {
        DynamicImage::new_rgb8(4, 4)
    }

    #[test]
    fn test_unscripted_code_behaves_blank() {
        let factory = MockFactory::new();
        let engine = factory.create("en").unwrap();
        assert!(engine.recognize(&blank()).unwrap().is_empty());
        assert_eq!(engine.language(), "en");
    }

    #[test]
    fn test_scripted_detections_returned_in_order() {
        let factory = MockFactory::new().with_script(
            "en",
            vec![
                Detection::new("HELLO", 0.99, Region::from_rect(0, 0, 40, 10)),
                Detection::new("WORLD", 0.97, Region::from_rect(0, 12, 40, 10)),
            ],
        );
        let engine = factory.create("en").unwrap();
        let detections = engine.recognize(&blank()).unwrap();
        assert_eq!(detections.len(), 2);
        assert_eq!(detections[0].text, "HELLO");
        assert_eq!(detections[1].text, "WORLD");
    }

    #[test]
    fn test_faulty_engine_raises() {
        let factory = MockFactory::new().with_faulty("en");
        let engine = factory.create("en").unwrap();
        let err = engine.recognize(&blank()).unwrap_err();
        assert!(matches!(err, EngineError::Inference(_)));
    }
}
