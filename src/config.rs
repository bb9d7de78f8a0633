// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service configuration from environment variables

use std::env;

use anyhow::{bail, Result};
use tracing::warn;

/// Which OCR backend serves recognition requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// System Tesseract install (default)
    Tesseract,
    /// Scripted engine, for running without model artifacts
    Mock,
}

impl Backend {
    pub fn name(&self) -> &'static str {
        match self {
            Backend::Tesseract => "tesseract",
            Backend::Mock => "mock",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub api_port: u16,
    pub backend: Backend,
}

impl ServerConfig {
    /// Read configuration from the environment, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Result<Self> {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1".to_string());

        let api_port = match env::var("API_PORT") {
            Ok(raw) => match raw.parse::<u16>() {
                Ok(port) => port,
                Err(_) => {
                    warn!("invalid API_PORT '{}', using default 8080", raw);
                    8080
                }
            },
            Err(_) => 8080,
        };

        let backend_raw = env::var("OCR_BACKEND").unwrap_or_else(|_| "tesseract".to_string());
        let backend = match backend_raw.to_lowercase().as_str() {
            "tesseract" => Backend::Tesseract,
            "mock" => Backend::Mock,
            other => bail!("unknown OCR_BACKEND '{}' (expected tesseract or mock)", other),
        };

        Ok(Self {
            bind_addr,
            api_port,
            backend,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.api_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_names() {
        assert_eq!(Backend::Tesseract.name(), "tesseract");
        assert_eq!(Backend::Mock.name(), "mock");
    }

    #[test]
    fn test_listen_addr_format() {
        let config = ServerConfig {
            bind_addr: "0.0.0.0".to_string(),
            api_port: 9090,
            backend: Backend::Mock,
        };
        assert_eq!(config.listen_addr(), "0.0.0.0:9090");
    }
}
