// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Recognition endpoint

pub mod handler;
pub mod request;
pub mod response;

pub use handler::recognize_handler;
pub use request::RecognizeRequest;
pub use response::{DetectionDto, RecognizeResponse, INSTRUCTION_PROMPT};
