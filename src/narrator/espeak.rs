//! espeak-ng backed narrator
//!
//! Each utterance spawns the engine as a child process and waits for it
//! to exit. Cancellation kills the child; the child is also killed if the
//! speak future is dropped mid-utterance (e.g. by a playback timeout).

use std::process::Stdio;
use std::sync::Mutex;

use tokio::process::Command;
use tokio_util::sync::CancellationToken;

use super::{Narrator, NarratorError, Utterance};

/// espeak-ng's default speaking rate in words per minute
const BASE_WPM: f32 = 175.0;

/// espeak-ng's default pitch on its 0-99 scale
const BASE_PITCH: f32 = 50.0;

/// Speaks through an `espeak-ng` child process
pub struct EspeakNarrator {
    program: String,
    // Token for the utterance currently in flight, replaced on each speak
    current: Mutex<CancellationToken>,
}

impl EspeakNarrator {
    /// Create a narrator spawning the given engine program
    pub fn new(program: impl Into<String>) -> Self {
        Self { program: program.into(), current: Mutex::new(CancellationToken::new()) }
    }

    /// Cancel the in-flight utterance and register a token for the next one
    fn begin_utterance(&self) -> CancellationToken {
        let token = CancellationToken::new();
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        current.cancel();
        *current = token.clone();
        token
    }

    /// espeak voice name for a BCP 47 tag ("ar-SA" -> "ar")
    fn voice(language: &str) -> &str {
        language.split('-').next().unwrap_or(language)
    }

    /// Words per minute for a rate multiplier
    fn wpm(rate: f32) -> u32 {
        (BASE_WPM * rate).round().max(1.0) as u32
    }

    /// espeak pitch (0-99) for a pitch multiplier
    fn pitch(pitch: f32) -> u32 {
        (BASE_PITCH * pitch).round().clamp(0.0, 99.0) as u32
    }
}

impl Narrator for EspeakNarrator {
    async fn speak(&self, utterance: Utterance) -> Result<(), NarratorError> {
        let token = self.begin_utterance();

        let mut child = Command::new(&self.program)
            .arg("-v")
            .arg(Self::voice(&utterance.language))
            .arg("-s")
            .arg(Self::wpm(utterance.rate).to_string())
            .arg("-p")
            .arg(Self::pitch(utterance.pitch).to_string())
            .arg("--")
            .arg(&utterance.text)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| NarratorError::Spawn { program: self.program.clone(), source })?;

        tokio::select! {
            _ = token.cancelled() => {
                let _ = child.kill().await;
                Err(NarratorError::Cancelled)
            }
            status = child.wait() => {
                let status = status?;
                if status.success() {
                    Ok(())
                } else {
                    Err(NarratorError::Engine { status })
                }
            }
        }
    }

    fn cancel_all(&self) {
        self.current.lock().unwrap_or_else(|e| e.into_inner()).cancel();
    }
}
