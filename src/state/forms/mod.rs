//! Form domain layer
//!
//! Field value objects, the contact form itself, the disposition options
//! and the validation rules that gate input and submission.

mod contact_form;
mod disposition;
mod field;
mod validation;

pub use contact_form::{ContactForm, Form, FormValues, SUBMIT_ROW};
pub use disposition::Disposition;
pub use field::FormField;
pub use validation::{validate, ValidationError};
