// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! POST /v1/recognize handler

use axum::extract::State;
use axum::Json;
use tracing::{debug, info, warn};

use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::api::recognize::request::RecognizeRequest;
use crate::api::recognize::response::RecognizeResponse;
use crate::catalog;
use crate::pipeline;
use crate::session::{InputEvent, Session};
use crate::upload;

/// Handle one recognition request.
///
/// The page posts on every input change, so a body with either input
/// missing is a normal outcome answered with the instruction prompt,
/// not an error. No engine is loaded until both inputs are present.
pub async fn recognize_handler(
    State(state): State<AppState>,
    Json(request): Json<RecognizeRequest>,
) -> Result<Json<RecognizeResponse>, ApiError> {
    debug!(
        "recognize request: language={:?}, image={} bytes (base64), format={}",
        request.language,
        request.image.as_ref().map(|i| i.len()).unwrap_or(0),
        request.format
    );

    // Step 1: Validate request shape
    request.validate()?;

    // Step 2: Feed the inputs through the session state machine
    let mut session = Session::new();
    if let Some(language) = &request.language {
        session.apply(InputEvent::LanguageSelected(language.clone()));
    }

    // Decode failures reject the upload before it counts as an input.
    let image = match &request.image {
        Some(encoded) => {
            let decoded = upload::decode_base64_upload(encoded, &request.format)?;
            session.apply(InputEvent::ImageUploaded);
            Some(decoded)
        }
        None => None,
    };

    // Step 3: Incomplete inputs get the prompt, never an error
    let model = state.models.backend_name();
    if !matches!(
        session.state(),
        crate::session::SessionState::Recognizing
    ) {
        debug!("inputs incomplete, returning instruction prompt");
        return Ok(Json(RecognizeResponse::prompt(
            session.state().name(),
            model,
        )));
    }

    // Both present past this point; language was set above.
    let language = request.language.as_deref().unwrap_or_default();
    let image = image.ok_or_else(|| ApiError::Recognition("image missing".to_string()))?;

    // Step 4: Resolve the display name to an engine code
    let code = catalog::get_code(language)?;

    // Step 5: Fetch or construct the engine handle
    let engine = state.models.get_or_load(code).await?;

    // Step 6: Run inference on the blocking pool
    let outcome = tokio::task::spawn_blocking(move || pipeline::recognize(&*engine, &image))
        .await
        .map_err(|e| ApiError::Recognition(format!("inference task failed: {}", e)))?;

    match outcome {
        Ok(result) => {
            info!(
                "recognized {} fragments in {}ms for '{}'",
                result.detections.len(),
                result.processing_time_ms,
                code
            );
            session.apply(InputEvent::RecognitionSucceeded(result.clone()));
            Ok(Json(RecognizeResponse::from_result(
                session.state().name(),
                code,
                model,
                &result,
            )))
        }
        Err(pipeline::PipelineError::Inference(message)) => {
            warn!("recognition failed for '{}': {}", code, message);
            session.apply(InputEvent::RecognitionFailed(message.clone()));
            Err(ApiError::Recognition(message))
        }
    }
}
