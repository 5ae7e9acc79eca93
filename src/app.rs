//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::COPY_MODIFIER;
use crate::scheduler::{AppEvent, AssessmentScheduler, PendingAssessment};
use crate::state::{AppState, SubmitOutcome, SubmitProgress, Toast};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};

/// Window in which a second Ctrl+C quits
const DOUBLE_CTRL_C_WINDOW: Duration = Duration::from_secs(1);

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Runs the simulated assessment delay
    scheduler: AssessmentScheduler,
    /// The in-flight assessment, if any
    pending: Option<PendingAssessment>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &TuiConfig, scheduler: AssessmentScheduler) -> Self {
        Self {
            state: AppState::new(config.toast_duration(), config.history_limit()),
            scheduler,
            pending: None,
            quit: false,
            copy_message: None,
            last_ctrl_c: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        self.state.toasts.tick();
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.handle_ctrl_c();
            return Ok(());
        }

        // Clear any status messages on key press
        self.copy_message = None;

        match key.code {
            KeyCode::F(1) => self.state.show_help = !self.state.show_help,
            KeyCode::Esc if self.state.show_help => self.state.show_help = false,
            KeyCode::Esc => self.state.toasts.dismiss(),
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form_clear_field()
            }
            KeyCode::Char('y') if key.modifiers.contains(COPY_MODIFIER) => self.copy_result(),
            KeyCode::Enter => self.submit(),
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Left => self.state.form_slide(-slide_steps(key.modifiers)),
            KeyCode::Right => self.state.form_slide(slide_steps(key.modifiers)),
            KeyCode::Backspace => self.state.form_backspace(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                self.state.form_input_char(c)
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle an event from a background task
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::AssessmentReady(ticket) => {
                if self.pending.as_ref().is_some_and(|p| p.id() == ticket.id) {
                    self.pending = None;
                }
                let Some(prediction) = self
                    .state
                    .controller
                    .complete(&ticket)
                    .and_then(|result| result.prediction)
                else {
                    return;
                };
                self.state.progress = None;
                self.state.history.record(&ticket.readings, prediction);
            }
        }
    }

    /// Submit the form
    pub fn submit(&mut self) {
        match self.state.controller.submit() {
            SubmitOutcome::Scheduled(ticket) => {
                self.state.invalid_field = None;
                self.state.progress = Some(SubmitProgress::new(self.scheduler.delay()));
                self.pending = Some(self.scheduler.schedule(ticket));
            }
            SubmitOutcome::Rejected(err) => {
                self.state.invalid_field = Some(err.field);
                self.state.focus.focus(err.field);
                self.state.toasts.push(Toast::from(&err));
            }
            SubmitOutcome::Ignored => {}
        }
    }

    /// Cancel background work before exiting
    pub fn shutdown(&mut self) {
        if let Some(pending) = self.pending.take() {
            if !pending.is_finished() {
                pending.cancel();
            }
        }
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        if self
            .last_ctrl_c
            .is_some_and(|last| now.duration_since(last) <= DOUBLE_CTRL_C_WINDOW)
        {
            self.quit = true;
        } else {
            self.last_ctrl_c = Some(now);
            self.copy_message = Some("Press Ctrl+C again to quit".to_string());
        }
    }

    /// Copy the current result to the system clipboard
    fn copy_result(&mut self) {
        let Some(summary) = self.state.controller.result().summary() else {
            self.copy_message = Some("Nothing to copy yet".to_string());
            return;
        };
        self.copy_message = Some(match copy_to_clipboard(&summary) {
            Ok(()) => "Copied result".to_string(),
            Err(err) => {
                tracing::debug!("Clipboard copy failed: {err:#}");
                format!("Copy failed: {err}")
            }
        });
    }
}

/// Slider steps for one arrow press: ten with Shift held
fn slide_steps(modifiers: KeyModifiers) -> i32 {
    if modifiers.contains(KeyModifiers::SHIFT) {
        10
    } else {
        1
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
