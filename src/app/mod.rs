//! Application state and event handling

pub mod input;
pub mod state;

use std::io::{self, Stdout};
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;

use crate::config::Config;
use crate::narrator::{EspeakNarrator, Narrator, NarratorError, Utterance};
use crate::session::playback::{self, PlaybackEvent, PlaybackHandle};
use crate::session::{Direction, LearningSession, Mode};
use crate::ui;
use input::{Action, Gesture};
use state::{AppState, Screen};

/// Notifications delivered to the event loop from spawned tasks
#[derive(Debug)]
enum AppEvent {
    /// Progress from the play-all task
    Playback(PlaybackEvent),
    /// A manually requested narration ended
    NarrationFinished { generation: u64, error: Option<NarratorError> },
}

/// The main application
pub struct App {
    /// Application configuration
    config: Config,

    /// Current UI state
    state: AppState,

    /// The flashcard session
    session: LearningSession,

    /// Speech engine
    narrator: Arc<EspeakNarrator>,

    /// Active play-all run, if any
    playback: Option<PlaybackHandle>,

    /// Generation counter for manual narrations
    speak_generation: u64,

    /// Channel for task notifications
    events_tx: mpsc::UnboundedSender<AppEvent>,
    events_rx: mpsc::UnboundedReceiver<AppEvent>,

    /// Terminal backend
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config, session: LearningSession) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        let narrator = Arc::new(EspeakNarrator::new(config.speech.program.clone()));
        let (events_tx, events_rx) = mpsc::unbounded_channel();

        Ok(Self {
            config,
            state: AppState::default(),
            session,
            narrator,
            playback: None,
            speak_generation: 0,
            events_tx,
            events_rx,
            terminal,
        })
    }

    /// Set up the terminal for TUI rendering
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;
        Ok(terminal)
    }

    /// Restore the terminal to its original state
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> Result<()> {
        // Set up panic hook to restore terminal
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        loop {
            self.drain_events();

            // Draw UI
            self.terminal.draw(|frame| {
                ui::draw(frame, &mut self.state, &self.session, &self.config);
            })?;

            // Handle input
            if event::poll(std::time::Duration::from_millis(16))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        if self.handle_key(key.code) {
                            break;
                        }
                    }
                    Event::Mouse(mouse) => self.handle_mouse(mouse),
                    _ => {}
                }
            }
        }

        if let Some(handle) = &self.playback {
            handle.cancel();
        }
        self.narrator.cancel_all();
        self.restore_terminal()?;
        Ok(())
    }

    /// Apply queued notifications from spawned tasks
    fn drain_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                AppEvent::Playback(PlaybackEvent::Step(index)) => {
                    self.session.select_item(index);
                    self.state.speaking = true;
                }
                AppEvent::Playback(PlaybackEvent::NarrationEnded) => {
                    self.state.speaking = false;
                }
                AppEvent::Playback(PlaybackEvent::Finished) => {
                    self.playback = None;
                    self.state.auto_playing = false;
                    self.state.speaking = false;
                    self.state.status.clear();
                }
                AppEvent::NarrationFinished { generation, error } => {
                    if generation == self.speak_generation {
                        self.state.speaking = false;
                    }
                    if let Some(err) = error {
                        tracing::debug!("Narration failed: {err}");
                    }
                }
            }
        }
    }

    /// Whether a play-all run is still active
    fn playback_active(&self) -> bool {
        self.playback.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Handle a key press, returns true if the app should exit
    fn handle_key(&mut self, key: crossterm::event::KeyCode) -> bool {
        let Some(action) = input::key_to_action(key) else {
            return false;
        };
        self.handle_action(action)
    }

    /// Handle an action, returns true if the app should exit
    fn handle_action(&mut self, action: Action) -> bool {
        // During auto-play only cancel, help, and quit are live
        if self.playback_active()
            && !matches!(action, Action::Cancel | Action::Help | Action::Quit)
        {
            self.state.status.set_error("Auto-play running (press Esc to stop)");
            return false;
        }

        match action {
            Action::Previous => {
                self.state.status.clear();
                self.session.advance(Direction::Previous);
            }
            Action::Next => {
                self.state.status.clear();
                self.session.advance(Direction::Next);
            }
            Action::Speak => self.speak_current(),
            Action::Random => {
                if self.session.select_random(None).is_some() {
                    self.speak_current();
                }
            }
            Action::LettersMode => {
                self.state.status.clear();
                self.session.switch_mode(Mode::Letters);
            }
            Action::NumbersMode => {
                self.state.status.clear();
                self.session.switch_mode(Mode::Numbers);
            }
            Action::PlayAll => self.start_playback(),
            Action::Cancel => {
                if self.state.screen == Screen::Help {
                    self.state.screen = Screen::Main;
                } else {
                    self.cancel_playback();
                }
            }
            Action::Help => {
                self.state.screen = match self.state.screen {
                    Screen::Help => Screen::Main,
                    Screen::Main => Screen::Help,
                };
            }
            Action::Quit => {
                self.cancel_playback();
                return true;
            }
        }
        false
    }

    /// Handle a mouse event (card clicks and swipes)
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.state.swipe.press(mouse.column, mouse.row);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                let Some(gesture) = self.state.swipe.release(mouse.column, mouse.row) else {
                    return;
                };
                if self.playback_active() {
                    self.state.status.set_error("Auto-play running (press Esc to stop)");
                    return;
                }
                match gesture {
                    Gesture::Swipe(direction) => {
                        self.state.status.clear();
                        self.session.advance(direction);
                    }
                    Gesture::Tap { x, y } => {
                        if let Some(index) = self.state.grid.hit_test(x, y) {
                            self.state.status.clear();
                            self.session.select_item(index);
                        }
                    }
                }
            }
            _ => {}
        }
    }

    /// Speak the selected card's name
    ///
    /// Cancels any narration still in flight; completion (or failure)
    /// clears the playing indicator.
    fn speak_current(&mut self) {
        let Some(record) = self.session.current() else {
            return;
        };

        self.narrator.cancel_all();
        self.speak_generation += 1;
        self.state.speaking = true;

        let generation = self.speak_generation;
        let narrator = self.narrator.clone();
        let utterance = Utterance::new(record.name.clone(), &self.config.speech);
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            let error = narrator.speak(utterance).await.err();
            let _ = events.send(AppEvent::NarrationFinished { generation, error });
        });
    }

    /// Start a play-all run over the active deck
    ///
    /// Concurrent starts are rejected; the current run keeps going.
    fn start_playback(&mut self) {
        if self.playback_active() {
            self.state.status.set_error("Auto-play already running");
            return;
        }
        if self.session.is_empty() {
            return;
        }

        let (playback_tx, mut playback_rx) = mpsc::unbounded_channel();
        let events = self.events_tx.clone();
        tokio::spawn(async move {
            while let Some(event) = playback_rx.recv().await {
                if events.send(AppEvent::Playback(event)).is_err() {
                    break;
                }
            }
        });

        let handle = playback::start(
            self.session.records().to_vec(),
            self.narrator.clone(),
            self.config.speech.clone(),
            playback_tx,
        );
        self.playback = Some(handle);
        self.state.auto_playing = true;
        self.state.status.set_message("Auto-play started (press Esc to stop)");
    }

    /// Cancel the active play-all run, if any
    fn cancel_playback(&mut self) {
        if let Some(handle) = &self.playback {
            handle.cancel();
            self.narrator.cancel_all();
            self.state.status.set_message("Auto-play stopped");
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}
