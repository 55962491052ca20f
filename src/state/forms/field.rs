//! Form field value objects

use super::disposition::Disposition;
use super::validation::phone_input_allowed;

/// Type-safe field values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Choice(Option<Disposition>),
}

/// How a field accepts input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Single-line free text
    Text,
    /// Free text where Enter inserts a newline
    Multiline,
    /// Single-line text gated by the phone input filter
    Phone,
    /// Closed list of dispositions, changed by cycling
    Select,
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    /// Input key, as the field is named in the form
    pub name: &'static str,
    pub label: &'static str,
    pub value: FieldValue,
    pub kind: FieldKind,
}

impl FormField {
    /// Create a new single-line text field
    pub fn text(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Text(String::new()),
            kind: FieldKind::Text,
        }
    }

    /// Create a new multiline text field
    pub fn multiline(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::Multiline,
            ..Self::text(name, label)
        }
    }

    /// Create a new phone field
    pub fn phone(name: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::Phone,
            ..Self::text(name, label)
        }
    }

    /// Create a new disposition select, initially unset
    pub fn select(name: &'static str, label: &'static str) -> Self {
        Self {
            name,
            label,
            value: FieldValue::Choice(None),
            kind: FieldKind::Select,
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::Multiline
    }

    pub fn is_select(&self) -> bool {
        self.kind == FieldKind::Select
    }

    /// Get the value as text; a select yields its label or an empty string
    pub fn as_text(&self) -> &str {
        match &self.value {
            FieldValue::Text(s) => s,
            FieldValue::Choice(Some(d)) => d.label(),
            FieldValue::Choice(None) => "",
        }
    }

    /// Get the selected disposition (None for text fields)
    pub fn as_choice(&self) -> Option<Disposition> {
        match &self.value {
            FieldValue::Choice(choice) => *choice,
            FieldValue::Text(_) => None,
        }
    }

    /// Replace the text value if the field's filter accepts it.
    /// Returns false when the change was discarded.
    pub fn set_text(&mut self, candidate: String) -> bool {
        match self.kind {
            FieldKind::Select => false,
            FieldKind::Phone if !phone_input_allowed(&candidate) => false,
            _ => {
                self.value = FieldValue::Text(candidate);
                true
            }
        }
    }

    /// Set the selected disposition (ignored for text fields)
    pub fn set_choice(&mut self, choice: Option<Disposition>) {
        if let FieldValue::Choice(current) = &mut self.value {
            *current = choice;
        }
    }

    /// Move the select to the next or previous option
    pub fn cycle_choice(&mut self, forward: bool) {
        if self.is_select() {
            let next = Disposition::cycle(self.as_choice(), forward);
            self.set_choice(Some(next));
        }
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) -> bool {
        if !self.is_multiline() && matches!(c, '\n' | '\r') {
            return false;
        }
        let mut candidate = self.as_text().to_string();
        candidate.push(c);
        self.set_text(candidate)
    }

    /// Append pasted text as one change. The whole paste is accepted or
    /// rejected; single-line fields drop line breaks first.
    pub fn push_str(&mut self, text: &str) -> bool {
        let mut candidate = self.as_text().to_string();
        if self.is_multiline() {
            candidate.push_str(text);
        } else {
            candidate.extend(text.chars().filter(|c| !matches!(c, '\n' | '\r')));
        }
        self.set_text(candidate)
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        if let FieldValue::Text(s) = &mut self.value {
            s.pop();
        }
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        match &mut self.value {
            FieldValue::Text(s) => s.clear(),
            FieldValue::Choice(choice) => *choice = None,
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        match &self.value {
            FieldValue::Text(s) => s.clone(),
            FieldValue::Choice(Some(d)) => format!("◂ {} ▸", d.label()),
            FieldValue::Choice(None) => "Select disposition".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(field: &mut FormField, text: &str) {
        for c in text.chars() {
            field.push_char(c);
        }
    }

    mod text_field {
        use super::*;

        #[test]
        fn test_accepts_any_character() {
            let mut field = FormField::text("company", "Company");
            type_into(&mut field, "Acme & Sons, Ltd.");
            assert_eq!(field.as_text(), "Acme & Sons, Ltd.");
        }

        #[test]
        fn test_single_line_drops_newlines() {
            let mut field = FormField::text("name", "Client Name");
            assert!(!field.push_char('\n'));
            assert!(field.push_str("J\nDoe"));
            assert_eq!(field.as_text(), "JDoe");
        }

        #[test]
        fn test_pop_and_clear() {
            let mut field = FormField::text("name", "Client Name");
            type_into(&mut field, "Doe");
            field.pop_char();
            assert_eq!(field.as_text(), "Do");
            field.clear();
            assert!(field.as_text().is_empty());
        }
    }

    mod multiline_field {
        use super::*;

        #[test]
        fn test_keeps_newlines() {
            let mut field = FormField::multiline("query", "Query");
            type_into(&mut field, "line one\nline two");
            assert_eq!(field.as_text(), "line one\nline two");
            assert!(field.is_multiline());
        }
    }

    mod phone_field {
        use super::*;

        #[test]
        fn test_non_digit_keystrokes_rejected() {
            let mut field = FormField::phone("contact_number", "Contact Number");
            type_into(&mut field, "123");
            for c in "abc".chars() {
                assert!(!field.push_char(c));
            }
            assert_eq!(field.as_text(), "123");
        }

        #[test]
        fn test_plus_only_at_start() {
            let mut field = FormField::phone("contact_number", "Contact Number");
            assert!(field.push_char('+'));
            assert!(field.push_char('4'));
            assert!(!field.push_char('+'));
            assert_eq!(field.as_text(), "+4");
        }

        #[test]
        fn test_stops_at_fifteen_digits() {
            let mut field = FormField::phone("contact_number", "Contact Number");
            type_into(&mut field, "+12345678901234567");
            assert_eq!(field.as_text(), "+123456789012345");
            assert_eq!(field.as_text().len(), 16);
        }

        #[test]
        fn test_invalid_paste_rejected_whole() {
            let mut field = FormField::phone("contact_number", "Contact Number");
            type_into(&mut field, "12");
            assert!(!field.push_str("34x56"));
            assert_eq!(field.as_text(), "12");
        }

        #[test]
        fn test_overlong_paste_not_truncated() {
            let mut field = FormField::phone("contact_number", "Contact Number");
            assert!(!field.push_str("1234567890123456"));
            assert_eq!(field.as_text(), "");
        }

        #[test]
        fn test_valid_paste_accepted() {
            let mut field = FormField::phone("contact_number", "Contact Number");
            assert!(field.push_str("+14155550100\n"));
            assert_eq!(field.as_text(), "+14155550100");
        }

        #[test]
        fn test_set_text_applies_filter() {
            let mut field = FormField::phone("contact_number", "Contact Number");
            assert!(!field.set_text("555-0100".to_string()));
            assert!(field.as_text().is_empty());
        }
    }

    mod select_field {
        use super::*;

        #[test]
        fn test_starts_unset() {
            let field = FormField::select("disposition", "Disposition");
            assert_eq!(field.as_choice(), None);
            assert_eq!(field.as_text(), "");
            assert_eq!(field.display_value(), "Select disposition");
        }

        #[test]
        fn test_typing_is_ignored() {
            let mut field = FormField::select("disposition", "Disposition");
            assert!(!field.push_char('x'));
            assert!(!field.push_str("New Lead"));
            assert!(field.as_text().is_empty());
        }

        #[test]
        fn test_cycle_sets_label_text() {
            let mut field = FormField::select("disposition", "Disposition");
            field.cycle_choice(true);
            assert_eq!(field.as_text(), "Application Support");
            field.cycle_choice(false);
            assert_eq!(field.as_text(), "Renewals");
            field.cycle_choice(false);
            assert_eq!(field.as_text(), "New Lead");
        }

        #[test]
        fn test_clear_unsets() {
            let mut field = FormField::select("disposition", "Disposition");
            field.set_choice(Some(Disposition::NewLead));
            assert_eq!(field.as_text(), "New Lead");
            field.clear();
            assert_eq!(field.as_choice(), None);
        }
    }
}
