//! Speech synthesis for pronunciation playback
//!
//! The session speaks through the [`Narrator`] trait so the engine can be
//! swapped out (or faked in tests). At most one utterance is in flight at
//! a time: starting a new one cancels the previous one, and `cancel_all`
//! cancels without replacement.

mod espeak;

pub use espeak::EspeakNarrator;

use std::future::Future;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur during speech playback
#[derive(Debug, Error)]
pub enum NarratorError {
    /// The speech engine binary could not be started
    #[error("Failed to start speech engine '{program}': {source}")]
    Spawn {
        /// Engine program name
        program: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The speech engine exited with a failure status
    #[error("Speech engine exited with {status}")]
    Engine {
        /// Exit status reported by the engine process
        status: std::process::ExitStatus,
    },

    /// Waiting on the engine process failed
    #[error("Speech engine I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The utterance was cancelled before it finished
    #[error("Utterance cancelled")]
    Cancelled,
}

/// Engine and voice settings for narration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechSettings {
    /// Speech engine program to spawn
    pub program: String,
    /// BCP 47 language tag for the voice
    pub language: String,
    /// Speaking rate multiplier (1.0 = engine default)
    pub rate: f32,
    /// Pitch multiplier (1.0 = engine default)
    pub pitch: f32,
}

impl Default for SpeechSettings {
    fn default() -> Self {
        Self {
            program: "espeak-ng".to_string(),
            language: "ar-SA".to_string(),
            rate: 0.7,
            pitch: 1.2,
        }
    }
}

/// A single piece of text to speak, with its voice parameters
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    /// Text to speak
    pub text: String,
    /// BCP 47 language tag
    pub language: String,
    /// Speaking rate multiplier
    pub rate: f32,
    /// Pitch multiplier
    pub pitch: f32,
}

impl Utterance {
    /// Build an utterance from text and the configured voice settings
    pub fn new(text: impl Into<String>, settings: &SpeechSettings) -> Self {
        Self {
            text: text.into(),
            language: settings.language.clone(),
            rate: settings.rate,
            pitch: settings.pitch,
        }
    }
}

/// A text-to-speech playback service
pub trait Narrator: Send + Sync + 'static {
    /// Speak an utterance, suspending the caller until playback completes,
    /// fails, or is cancelled. Starting a new utterance cancels any
    /// utterance still in flight.
    fn speak(&self, utterance: Utterance) -> impl Future<Output = Result<(), NarratorError>> + Send;

    /// Cancel any in-flight utterance
    fn cancel_all(&self);
}
