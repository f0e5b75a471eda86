//! Sequential "play all" narration
//!
//! Walks the active deck once from the first card to the last. The loop
//! runs as its own task and never touches session state directly: it
//! emits [`PlaybackEvent`]s that the application loop applies, so the
//! event loop stays the only writer.
//!
//! Per card the loop waits for narration to finish or for a fixed timeout,
//! whichever comes first, then pauses briefly before the next card. A
//! cancellation token stops the run before its next suspension point.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::catalog::CharacterRecord;
use crate::narrator::{Narrator, SpeechSettings, Utterance};

/// Longest time to wait for one card's narration
pub const NARRATION_TIMEOUT: Duration = Duration::from_millis(2000);

/// Pause between cards
pub const ITEM_PAUSE: Duration = Duration::from_millis(500);

/// Progress notifications from a playback run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// The run reached this card; the receiver should select it
    Step(usize),
    /// The current card's narration finished (or timed out)
    NarrationEnded,
    /// The run is over, whether completed or cancelled
    Finished,
}

/// Handle to a running playback task
pub struct PlaybackHandle {
    cancel: CancellationToken,
    task: JoinHandle<()>,
}

impl PlaybackHandle {
    /// Request the run to stop before its next suspension point
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Whether the run's task has exited
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

/// Spawn a playback run over a snapshot of the active deck
pub fn start<N: Narrator>(
    items: Vec<CharacterRecord>,
    narrator: Arc<N>,
    settings: SpeechSettings,
    events: mpsc::UnboundedSender<PlaybackEvent>,
) -> PlaybackHandle {
    let cancel = CancellationToken::new();
    let task = tokio::spawn(run(items, narrator, settings, events, cancel.clone()));
    PlaybackHandle { cancel, task }
}

async fn run<N: Narrator>(
    items: Vec<CharacterRecord>,
    narrator: Arc<N>,
    settings: SpeechSettings,
    events: mpsc::UnboundedSender<PlaybackEvent>,
    cancel: CancellationToken,
) {
    tracing::debug!("Playback starting over {} cards", items.len());

    for (index, item) in items.iter().enumerate() {
        if cancel.is_cancelled() {
            break;
        }
        // Receiver gone means the app is shutting down
        if events.send(PlaybackEvent::Step(index)).is_err() {
            return;
        }

        narrator.cancel_all();
        let utterance = Utterance::new(item.name.clone(), &settings);
        tokio::select! {
            _ = cancel.cancelled() => {
                narrator.cancel_all();
                break;
            }
            result = tokio::time::timeout(NARRATION_TIMEOUT, narrator.speak(utterance)) => {
                match result {
                    Ok(Ok(())) => {}
                    Ok(Err(err)) => tracing::debug!("Narration failed for card {index}: {err}"),
                    Err(_) => tracing::trace!("Narration timed out for card {index}"),
                }
            }
        }
        if events.send(PlaybackEvent::NarrationEnded).is_err() {
            return;
        }

        tokio::select! {
            _ = cancel.cancelled() => break,
            _ = tokio::time::sleep(ITEM_PAUSE) => {}
        }
    }

    tracing::debug!("Playback finished");
    let _ = events.send(PlaybackEvent::Finished);
}
