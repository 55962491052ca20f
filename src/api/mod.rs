//! Forms API module for HTTP submission

mod client;
mod payload;
mod traits;

pub use client::{FormsClient, SubmitError};
pub use payload::ContactPayload;
pub use traits::FormsApi;

#[cfg(test)]
pub use traits::MockFormsApi;
