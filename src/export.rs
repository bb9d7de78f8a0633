// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Text export
//!
//! Builds the downloadable artifact for the recognized text. The bytes
//! are assembled per request and travel only in the response body;
//! nothing is ever written to a shared path on the server, so two
//! concurrent visitors can never see each other's text.

/// Filename suggested to the browser for the download.
pub const DEFAULT_EXPORT_NAME: &str = "recognized.txt";

/// An in-memory downloadable file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: &'static str,
    pub bytes: Vec<u8>,
}

/// Wrap recognized text as a UTF-8 plain-text artifact.
///
/// The bytes are exactly the joined text, with no trailing newline
/// added and no transformation applied.
pub fn text_artifact(text: &str) -> ExportArtifact {
    ExportArtifact {
        filename: DEFAULT_EXPORT_NAME,
        bytes: text.as_bytes().to_vec(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_artifact_bytes_match_text_exactly() {
        let artifact = text_artifact("alpha beta gamma");
        assert_eq!(artifact.bytes, b"alpha beta gamma");
        assert_eq!(artifact.filename, "recognized.txt");
    }

    #[test]
    fn test_empty_text_yields_empty_artifact() {
        let artifact = text_artifact("");
        assert!(artifact.bytes.is_empty());
    }

    #[test]
    fn test_unicode_text_survives() {
        let artifact = text_artifact("日本語 テキスト");
        assert_eq!(artifact.bytes, "日本語 テキスト".as_bytes());
    }

    #[test]
    fn test_artifacts_are_independent_buffers() {
        let a = text_artifact("first visitor");
        let b = text_artifact("second visitor");
        assert_ne!(a.bytes, b.bytes);
    }
}
