//! Application state and core logic

use crate::api::{ContactPayload, FormsApi, SubmitError};
use crate::router::Route;
use crate::state::{validate, AppState, Form};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::Instant;

type SubmitTask = JoinHandle<Result<(), SubmitError>>;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Forms API client
    api: Arc<dyn FormsApi>,
    /// Outstanding submission request
    in_flight: Option<SubmitTask>,
    /// Whether the app should quit
    quit: bool,
    /// Transient notice for the status bar (clipboard failures)
    pub notice: Option<String>,
}

impl App {
    /// Create a new App instance mounted on `route`
    pub fn new(route: Route, api: Arc<dyn FormsApi>) -> Self {
        Self {
            state: AppState::new(route),
            api,
            in_flight: None,
            quit: false,
            notice: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Whether a submission request is outstanding
    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear any notice on key press
        self.notice = None;

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let form = &self.state.form;
        let on_submit_row = form.is_submit_row_active();
        let on_select = form.is_active_field_select();
        let on_multiline = form.is_active_field_multiline();

        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if ctrl => self.submit(),
            KeyCode::Char('v') if key.modifiers.contains(crate::platform::PASTE_MODIFIER) => {
                self.paste_from_clipboard()
            }
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),
            // Enter adds a newline in the query box and submits everywhere else
            KeyCode::Enter if on_multiline => {
                self.state.form.input_char('\n');
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Left if on_select => {
                self.state.form.cycle_choice(false);
            }
            KeyCode::Right | KeyCode::Char(' ') if on_select => {
                self.state.form.cycle_choice(true);
            }
            KeyCode::Char(c) if !on_submit_row && is_text_input(key.modifiers) => {
                if !self.state.form.input_char(c) {
                    let field = self
                        .state
                        .form
                        .get_field(self.state.form.active_field())
                        .map(|f| f.name);
                    tracing::trace!(?field, "Keystroke rejected");
                }
            }
            KeyCode::Backspace => self.state.form.backspace(),
            _ => {}
        }
    }

    /// Handle a bracketed paste into the active field
    pub fn handle_paste(&mut self, text: &str) {
        if !self.state.form.input_str(text) {
            tracing::debug!(len = text.len(), "Paste rejected by field filter");
        }
    }

    fn paste_from_clipboard(&mut self) {
        match read_clipboard() {
            Ok(text) => self.handle_paste(&text),
            Err(err) => {
                tracing::warn!(error = %err, "Clipboard read failed");
                self.notice = Some("Clipboard unavailable".to_string());
            }
        }
    }

    /// Validate and, if valid, start the submission request.
    ///
    /// Ignored while a request is outstanding.
    pub fn submit(&mut self) {
        if self.is_submitting() {
            tracing::debug!("Submit ignored while a request is in flight");
            return;
        }

        let values = self.state.form.values();
        if let Err(error) = validate(&values) {
            self.state.submission.reject(&error);
            return;
        }

        let payload = ContactPayload::from_values(&values);
        self.state.submission.begin();
        tracing::debug!(route = self.state.route.path(), "Submitting contact form");

        let api = Arc::clone(&self.api);
        self.in_flight = Some(tokio::spawn(async move { api.submit(&payload).await }));
    }

    /// Clear the status line once its deadline passes
    pub fn tick(&mut self) {
        self.state.submission.tick(Instant::now());
    }

    /// Apply the outcome of the outstanding request if it has finished.
    /// Never waits on the network.
    pub async fn poll_submission(&mut self) {
        if self.in_flight.as_ref().is_some_and(|task| task.is_finished()) {
            self.settle_submission().await;
        }
    }

    /// Wait for the outstanding request and apply its outcome
    pub async fn settle_submission(&mut self) {
        let Some(task) = self.in_flight.take() else {
            return;
        };
        let result = match task.await {
            Ok(result) => result,
            Err(join_error) => Err(SubmitError::Task(join_error.to_string())),
        };
        self.finish_submission(result);
    }

    fn finish_submission(&mut self, result: Result<(), SubmitError>) {
        match result {
            Ok(()) => {
                self.state.form.reset();
                self.state.submission.succeed(Instant::now());
            }
            Err(error) => {
                tracing::error!(%error, "Contact form submission failed");
                self.state.submission.fail();
            }
        }
    }
}

/// Whether a character key carries text rather than a shortcut.
/// AltGr arrives as CONTROL | ALT on Windows terminals and must still type.
fn is_text_input(modifiers: KeyModifiers) -> bool {
    let ctrl = modifiers.contains(KeyModifiers::CONTROL);
    let alt = modifiers.contains(KeyModifiers::ALT);
    !(ctrl && !alt) && !modifiers.contains(KeyModifiers::SUPER)
}

fn read_clipboard() -> Result<String> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    Ok(clipboard.get_text()?)
}
