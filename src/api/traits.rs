//! Trait abstraction for the forms API to enable mocking in tests

use super::client::SubmitError;
use super::payload::ContactPayload;
use async_trait::async_trait;

/// Trait for forms API operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormsApi: Send + Sync {
    /// Post a contact form submission
    async fn submit(&self, payload: &ContactPayload) -> Result<(), SubmitError>;
}
