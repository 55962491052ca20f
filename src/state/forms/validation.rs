//! Contact form validation
//!
//! Two layers:
//! - [`phone_input_allowed`] gates every change to the phone field, so the
//!   stored value is always a prefix of a valid number
//! - [`validate`] gates submission and runs before any network I/O

use super::contact_form::FormValues;
use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

/// Optional leading `+`, then up to 15 digits. Matches every partial entry.
static PHONE_INPUT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{0,15}$").expect("phone input pattern compiles"));

/// Optional leading `+`, then 1 to 15 digits.
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9]{1,15}$").expect("phone pattern compiles"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Reasons a submission is blocked before it reaches the network
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill out the {0} field")]
    MissingField(&'static str),
    #[error("Invalid phone format")]
    InvalidPhone,
    #[error("Invalid email")]
    InvalidEmail,
}

/// Whether `candidate` may become the phone field's value
pub fn phone_input_allowed(candidate: &str) -> bool {
    PHONE_INPUT.is_match(candidate)
}

/// Run the submit-time checks in order, stopping at the first failure.
pub fn validate(values: &FormValues) -> Result<(), ValidationError> {
    let required = [
        ("Company", &values.company),
        ("Client Name", &values.name),
        ("Email", &values.email),
        ("Contact Number", &values.phone),
        ("Disposition", &values.disposition),
    ];
    if let Some((label, _)) = required.iter().find(|(_, value)| value.is_empty()) {
        return Err(ValidationError::MissingField(*label));
    }

    let phone = values.phone.trim();
    if !phone.is_empty() && !PHONE.is_match(phone) {
        return Err(ValidationError::InvalidPhone);
    }

    if !EMAIL.is_match(&values.email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_values() -> FormValues {
        FormValues {
            company: "Acme".to_string(),
            name: "J Doe".to_string(),
            phone: "+14155550100".to_string(),
            email: "j@acme.com".to_string(),
            query: String::new(),
            disposition: "New Lead".to_string(),
        }
    }

    mod phone_input {
        use super::*;

        #[test]
        fn test_accepts_empty() {
            assert!(phone_input_allowed(""));
        }

        #[test]
        fn test_accepts_lone_plus() {
            assert!(phone_input_allowed("+"));
        }

        #[test]
        fn test_accepts_fifteen_digits() {
            assert!(phone_input_allowed("123456789012345"));
            assert!(phone_input_allowed("+123456789012345"));
        }

        #[test]
        fn test_rejects_sixteen_digits() {
            assert!(!phone_input_allowed("1234567890123456"));
            assert!(!phone_input_allowed("+1234567890123456"));
        }

        #[test]
        fn test_rejects_plus_not_first() {
            assert!(!phone_input_allowed("1+"));
            assert!(!phone_input_allowed("++1"));
        }

        #[test]
        fn test_rejects_letters_and_spaces() {
            assert!(!phone_input_allowed("123a"));
            assert!(!phone_input_allowed("123 456"));
            assert!(!phone_input_allowed(" 123"));
        }

        #[test]
        fn test_rejects_non_ascii_digits() {
            assert!(!phone_input_allowed("١٢٣"));
        }
    }

    mod submit_checks {
        use super::*;

        #[test]
        fn test_valid_values_pass() {
            assert_eq!(validate(&valid_values()), Ok(()));
        }

        #[test]
        fn test_query_is_optional() {
            let values = FormValues {
                query: String::new(),
                ..valid_values()
            };
            assert!(validate(&values).is_ok());
        }

        #[test]
        fn test_required_fields_in_form_order() {
            let values = FormValues {
                name: String::new(),
                email: String::new(),
                ..valid_values()
            };
            assert_eq!(
                validate(&values),
                Err(ValidationError::MissingField("Client Name"))
            );
        }

        #[test]
        fn test_missing_disposition() {
            let values = FormValues {
                disposition: String::new(),
                ..valid_values()
            };
            assert_eq!(
                validate(&values),
                Err(ValidationError::MissingField("Disposition"))
            );
        }

        #[test]
        fn test_lone_plus_is_invalid_phone() {
            let values = FormValues {
                phone: "+".to_string(),
                ..valid_values()
            };
            assert_eq!(validate(&values), Err(ValidationError::InvalidPhone));
        }

        #[test]
        fn test_phone_is_trimmed_before_check() {
            let values = FormValues {
                phone: "  +4915112345678 ".to_string(),
                ..valid_values()
            };
            assert!(validate(&values).is_ok());
        }

        #[test]
        fn test_phone_checked_before_email() {
            let values = FormValues {
                phone: "+".to_string(),
                email: "not-an-email".to_string(),
                ..valid_values()
            };
            assert_eq!(validate(&values), Err(ValidationError::InvalidPhone));
        }

        #[test]
        fn test_invalid_emails() {
            for email in ["j@acme", "jacme.com", "j @acme.com", "j@@acme.com", "@acme.com"] {
                let values = FormValues {
                    email: email.to_string(),
                    ..valid_values()
                };
                assert_eq!(
                    validate(&values),
                    Err(ValidationError::InvalidEmail),
                    "{email} should be rejected"
                );
            }
        }

        #[test]
        fn test_messages() {
            assert_eq!(
                ValidationError::InvalidPhone.to_string(),
                "Invalid phone format"
            );
            assert_eq!(ValidationError::InvalidEmail.to_string(), "Invalid email");
            assert_eq!(
                ValidationError::MissingField("Company").to_string(),
                "Please fill out the Company field"
            );
        }
    }
}
