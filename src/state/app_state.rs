//! Application state definitions

use super::forms::ContactForm;
use super::submission::SubmissionState;
use crate::router::Route;

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub route: Route,

    // Form state
    pub form: ContactForm,
    pub submission: SubmissionState,
}

impl AppState {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            ..Self::default()
        }
    }

    /// Status line text, if any
    pub fn status_message(&self) -> Option<&str> {
        self.submission.status()
    }
}
