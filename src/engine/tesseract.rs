// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Tesseract OCR backend
//!
//! Delegates recognition to the system Tesseract install through
//! `rusty-tesseract`. The catalog's language code is used verbatim as
//! the traineddata identifier, and availability is checked once at
//! load time against the engine's installed language list, so a code
//! without artifacts fails fast with `ModelUnavailable` instead of on
//! every request.

use std::collections::HashMap;
use std::sync::Arc;

use image::DynamicImage;
use rusty_tesseract::{image_to_data, Args, Image};
use tracing::debug;

use super::{Detection, EngineError, EngineFactory, OcrEngine, Region};

/// TSV row level for word records.
const WORD_LEVEL: i32 = 5;

pub struct TesseractFactory;

impl EngineFactory for TesseractFactory {
    fn backend_name(&self) -> &'static str {
        "tesseract"
    }

    fn create(&self, code: &str) -> Result<Arc<dyn OcrEngine>, EngineError> {
        let installed =
            rusty_tesseract::get_tesseract_langs().map_err(|e| EngineError::ModelUnavailable {
                code: code.to_string(),
                reason: format!("tesseract engine not reachable: {}", e),
            })?;

        if !installed.iter().any(|lang| lang == code) {
            return Err(EngineError::ModelUnavailable {
                code: code.to_string(),
                reason: "no traineddata installed for this language code".to_string(),
            });
        }

        Ok(Arc::new(TesseractEngine {
            code: code.to_string(),
        }))
    }
}

pub struct TesseractEngine {
    code: String,
}

impl TesseractEngine {
    fn args(&self) -> Args {
        Args {
            lang: self.code.clone(),
            config_variables: HashMap::from([("tessedit_create_tsv".into(), "1".into())]),
            dpi: Some(300),
            psm: Some(3),
            oem: Some(1),
        }
    }
}

impl OcrEngine for TesseractEngine {
    fn language(&self) -> &str {
        &self.code
    }

    fn recognize(&self, image: &DynamicImage) -> Result<Vec<Detection>, EngineError> {
        // The engine reads from disk, so the decoded buffer goes through
        // a per-request temp file (never a path shared across sessions).
        let mut tmp = tempfile::Builder::new()
            .prefix("ocr-web-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| EngineError::Inference(format!("temp file: {}", e)))?;
        image
            .write_to(tmp.as_file_mut(), image::ImageFormat::Png)
            .map_err(|e| EngineError::Inference(format!("re-encode for engine: {}", e)))?;

        let tess_image = Image::from_path(tmp.path())
            .map_err(|e| EngineError::Inference(e.to_string()))?;
        let output = image_to_data(&tess_image, &self.args())
            .map_err(|e| EngineError::Inference(e.to_string()))?;

        let detections: Vec<Detection> = output
            .data
            .iter()
            .filter(|record| {
                record.level == WORD_LEVEL
                    && record.conf >= 0.0
                    && !record.text.trim().is_empty()
            })
            .map(|record| {
                Detection::new(
                    record.text.clone(),
                    record.conf / 100.0,
                    Region::from_rect(
                        record.left.max(0) as u32,
                        record.top.max(0) as u32,
                        record.width.max(0) as u32,
                        record.height.max(0) as u32,
                    ),
                )
            })
            .collect();

        debug!(
            "tesseract '{}' returned {} word records",
            self.code,
            detections.len()
        );
        Ok(detections)
    }
}
