// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Upload decoding for recognition requests
//!
//! One image per request, PNG or JPEG, arriving base64-encoded in the
//! JSON body. Decoding is the only preprocessing this service does;
//! the blob is never persisted.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat};
use thiserror::Error;

/// Maximum decoded payload size (10MB)
pub const MAX_UPLOAD_SIZE: usize = 10 * 1024 * 1024;

/// Accepted declared content types
pub const SUPPORTED_TYPES: &[&str] = &["png", "jpg", "jpeg"];

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("image data is empty")]
    EmptyData,

    #[error("unsupported content type '{0}', supported: png, jpg, jpeg")]
    UnsupportedType(String),

    #[error("image data is too large: {0} bytes (max: {1} bytes)")]
    TooLarge(usize, usize),

    #[error("invalid base64 encoding: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    #[error("payload is not a PNG or JPEG image")]
    UnrecognizedFormat,

    #[error("failed to decode image: {0}")]
    DecodeFailed(String),
}

/// Decode an uploaded blob into an in-memory pixel buffer.
///
/// The declared type gates the request before any bytes are inspected;
/// the actual format is then detected from magic bytes so a mislabeled
/// or corrupt payload fails here rather than inside the engine.
pub fn decode_upload(bytes: &[u8], declared_type: &str) -> Result<DynamicImage, UploadError> {
    let declared = declared_type.to_lowercase();
    if !SUPPORTED_TYPES.contains(&declared.as_str()) {
        return Err(UploadError::UnsupportedType(declared_type.to_string()));
    }

    if bytes.is_empty() {
        return Err(UploadError::EmptyData);
    }
    if bytes.len() > MAX_UPLOAD_SIZE {
        return Err(UploadError::TooLarge(bytes.len(), MAX_UPLOAD_SIZE));
    }

    let format = detect_format(bytes)?;
    image::load_from_memory_with_format(bytes, format)
        .map_err(|e| UploadError::DecodeFailed(e.to_string()))
}

/// Decode a base64-encoded upload (the wire form used by the page).
pub fn decode_base64_upload(
    base64_str: &str,
    declared_type: &str,
) -> Result<DynamicImage, UploadError> {
    if base64_str.is_empty() {
        return Err(UploadError::EmptyData);
    }
    let bytes = STANDARD.decode(base64_str)?;
    decode_upload(&bytes, declared_type)
}

/// Detect PNG or JPEG from magic bytes.
fn detect_format(bytes: &[u8]) -> Result<ImageFormat, UploadError> {
    match bytes {
        // PNG: 89 50 4E 47
        [0x89, 0x50, 0x4E, 0x47, ..] => Ok(ImageFormat::Png),
        // JPEG: FF D8 FF
        [0xFF, 0xD8, 0xFF, ..] => Ok(ImageFormat::Jpeg),
        _ => Err(UploadError::UnrecognizedFormat),
    }
}
