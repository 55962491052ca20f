//! Submission lifecycle and status message

use super::forms::ValidationError;
use std::time::Duration;
use tokio::time::Instant;

/// How long the success message stays up
pub const STATUS_CLEAR_DELAY: Duration = Duration::from_secs(3);

pub const SUBMITTING_MESSAGE: &str = "Submitting…";
pub const SUCCESS_MESSAGE: &str = "Submitted ✅";
pub const FAILURE_MESSAGE: &str = "Error ❌";

/// Phase of the most recent submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitPhase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Submission phase plus the user-facing status line.
///
/// Every status change drops any pending clear deadline, so a success
/// message's timer can never wipe a newer message.
#[derive(Debug, Default)]
pub struct SubmissionState {
    phase: SubmitPhase,
    status: Option<String>,
    clear_at: Option<Instant>,
}

impl SubmissionState {
    pub fn phase(&self) -> SubmitPhase {
        self.phase
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    /// Show a validation failure. No request was made.
    pub fn reject(&mut self, error: &ValidationError) {
        self.phase = SubmitPhase::Idle;
        self.set_status(error.to_string());
    }

    /// Enter Submitting
    pub fn begin(&mut self) {
        self.phase = SubmitPhase::Submitting;
        self.set_status(SUBMITTING_MESSAGE.to_string());
    }

    /// Record success and schedule the status to clear
    pub fn succeed(&mut self, now: Instant) {
        self.phase = SubmitPhase::Succeeded;
        self.set_status(SUCCESS_MESSAGE.to_string());
        self.clear_at = Some(now + STATUS_CLEAR_DELAY);
    }

    /// Record failure; the message stays until the next attempt
    pub fn fail(&mut self) {
        self.phase = SubmitPhase::Failed;
        self.set_status(FAILURE_MESSAGE.to_string());
    }

    /// Clear the status once its deadline has passed.
    /// Returns true if the status changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.clear_at {
            Some(deadline) if now >= deadline => {
                self.clear_at = None;
                self.status = None;
                self.phase = SubmitPhase::Idle;
                true
            }
            _ => false,
        }
    }

    fn set_status(&mut self, message: String) {
        self.clear_at = None;
        self.status = Some(message);
    }
}
