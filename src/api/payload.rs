//! Wire format for the contact form submission

use crate::state::FormValues;
use serde::Serialize;

/// JSON body posted to `{base}/forms`.
///
/// Field order is the wire order. The trimmed phone number travels as
/// `contact_number`; `phone` is a legacy key with no input bound to it and is
/// always sent empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub company: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub query: String,
    pub disposition: String,
    pub contact_number: String,
}

impl ContactPayload {
    pub fn from_values(values: &FormValues) -> Self {
        Self {
            company: values.company.clone(),
            name: values.name.clone(),
            phone: String::new(),
            email: values.email.clone(),
            query: values.query.clone(),
            disposition: values.disposition.clone(),
            contact_number: values.phone.trim().to_string(),
        }
    }
}
