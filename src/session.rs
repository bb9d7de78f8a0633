// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Presentation session state machine
//!
//! Tracks the page's inputs (language choice, uploaded image) and the
//! display state derived from them. The state machine is explicit:
//! recognition only starts once both inputs are present, and changing
//! either input from a terminal state re-enters `Recognizing` (or drops
//! back to `Idle` when an input is cleared).

use crate::pipeline::RecognitionResult;

/// What the page is showing right now.
#[derive(Debug, Clone)]
pub enum SessionState {
    /// One or both inputs missing; the page shows the instruction prompt.
    Idle,
    /// Both inputs present; inference is in flight.
    Recognizing,
    /// Terminal: recognized text and detections are on screen.
    ResultShown(RecognitionResult),
    /// Terminal: an error banner is on screen.
    ErrorShown(String),
}

impl SessionState {
    /// Wire name for this state.
    pub fn name(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Recognizing => "recognizing",
            SessionState::ResultShown(_) => "resultShown",
            SessionState::ErrorShown(_) => "errorShown",
        }
    }
}

/// Inputs and outcomes the session reacts to.
#[derive(Debug, Clone)]
pub enum InputEvent {
    LanguageSelected(String),
    LanguageCleared,
    ImageUploaded,
    ImageCleared,
    RecognitionSucceeded(RecognitionResult),
    RecognitionFailed(String),
}

/// One visitor's interaction state. Nothing here is shared between
/// sessions; in particular the export buffer lives on the response,
/// never in a file on disk.
#[derive(Debug)]
pub struct Session {
    language: Option<String>,
    has_image: bool,
    state: SessionState,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            language: None,
            has_image: false,
            state: SessionState::Idle,
        }
    }

    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    pub fn has_image(&self) -> bool {
        self.has_image
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Apply an event and recompute the display state.
    pub fn apply(&mut self, event: InputEvent) {
        match event {
            InputEvent::LanguageSelected(name) => {
                self.language = Some(name);
                self.recompute_from_inputs();
            }
            InputEvent::LanguageCleared => {
                self.language = None;
                self.recompute_from_inputs();
            }
            InputEvent::ImageUploaded => {
                self.has_image = true;
                self.recompute_from_inputs();
            }
            InputEvent::ImageCleared => {
                self.has_image = false;
                self.recompute_from_inputs();
            }
            InputEvent::RecognitionSucceeded(result) => {
                // Outcomes only land while inference is in flight.
                if matches!(self.state, SessionState::Recognizing) {
                    self.state = SessionState::ResultShown(result);
                }
            }
            InputEvent::RecognitionFailed(message) => {
                if matches!(self.state, SessionState::Recognizing) {
                    self.state = SessionState::ErrorShown(message);
                }
            }
        }
    }

    /// Any input change restarts the cycle, including from the terminal
    /// states: a stale result never survives an input edit.
    fn recompute_from_inputs(&mut self) {
        self.state = if self.language.is_some() && self.has_image {
            SessionState::Recognizing
        } else {
            SessionState::Idle
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(text: &str) -> RecognitionResult {
        RecognitionResult {
            detections: vec![],
            text: text.to_string(),
            processing_time_ms: 1,
        }
    }

    #[test]
    fn test_new_session_is_idle() {
        let session = Session::new();
        assert_eq!(session.state().name(), "idle");
        assert!(session.language().is_none());
        assert!(!session.has_image());
    }

    #[test]
    fn test_one_input_stays_idle() {
        let mut session = Session::new();
        session.apply(InputEvent::LanguageSelected("English".into()));
        assert_eq!(session.state().name(), "idle");

        let mut session = Session::new();
        session.apply(InputEvent::ImageUploaded);
        assert_eq!(session.state().name(), "idle");
    }

    #[test]
    fn test_both_inputs_enter_recognizing() {
        let mut session = Session::new();
        session.apply(InputEvent::LanguageSelected("English".into()));
        session.apply(InputEvent::ImageUploaded);
        assert_eq!(session.state().name(), "recognizing");
    }

    #[test]
    fn test_success_from_recognizing_shows_result() {
        let mut session = Session::new();
        session.apply(InputEvent::LanguageSelected("English".into()));
        session.apply(InputEvent::ImageUploaded);
        session.apply(InputEvent::RecognitionSucceeded(result("hello")));
        match session.state() {
            SessionState::ResultShown(r) => assert_eq!(r.text, "hello"),
            other => panic!("expected ResultShown, got {:?}", other),
        }
    }

    #[test]
    fn test_failure_from_recognizing_shows_error() {
        let mut session = Session::new();
        session.apply(InputEvent::LanguageSelected("English".into()));
        session.apply(InputEvent::ImageUploaded);
        session.apply(InputEvent::RecognitionFailed("engine fault".into()));
        match session.state() {
            SessionState::ErrorShown(msg) => assert_eq!(msg, "engine fault"),
            other => panic!("expected ErrorShown, got {:?}", other),
        }
    }

    #[test]
    fn test_outcome_ignored_outside_recognizing() {
        let mut session = Session::new();
        session.apply(InputEvent::RecognitionSucceeded(result("stale")));
        assert_eq!(session.state().name(), "idle");

        session.apply(InputEvent::RecognitionFailed("stale".into()));
        assert_eq!(session.state().name(), "idle");
    }

    #[test]
    fn test_new_image_from_result_restarts_recognition() {
        let mut session = Session::new();
        session.apply(InputEvent::LanguageSelected("English".into()));
        session.apply(InputEvent::ImageUploaded);
        session.apply(InputEvent::RecognitionSucceeded(result("first")));

        session.apply(InputEvent::ImageUploaded);
        assert_eq!(session.state().name(), "recognizing");
    }

    #[test]
    fn test_language_change_from_error_restarts_recognition() {
        let mut session = Session::new();
        session.apply(InputEvent::LanguageSelected("English".into()));
        session.apply(InputEvent::ImageUploaded);
        session.apply(InputEvent::RecognitionFailed("oops".into()));

        session.apply(InputEvent::LanguageSelected("German".into()));
        assert_eq!(session.state().name(), "recognizing");
        assert_eq!(session.language(), Some("German"));
    }

    #[test]
    fn test_clearing_image_from_result_returns_to_idle() {
        let mut session = Session::new();
        session.apply(InputEvent::LanguageSelected("English".into()));
        session.apply(InputEvent::ImageUploaded);
        session.apply(InputEvent::RecognitionSucceeded(result("gone")));

        session.apply(InputEvent::ImageCleared);
        assert_eq!(session.state().name(), "idle");
    }

    #[test]
    fn test_clearing_language_mid_recognizing_returns_to_idle() {
        let mut session = Session::new();
        session.apply(InputEvent::LanguageSelected("English".into()));
        session.apply(InputEvent::ImageUploaded);
        assert_eq!(session.state().name(), "recognizing");

        session.apply(InputEvent::LanguageCleared);
        assert_eq!(session.state().name(), "idle");
    }
}
