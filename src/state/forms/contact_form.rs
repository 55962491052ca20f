//! Contact form state

use super::field::FormField;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Flat snapshot of the form's values, keyed as the form tracks them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub company: String,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub query: String,
    pub disposition: String,
}

/// Index of the submit button row
pub const SUBMIT_ROW: usize = 6;

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub company: FormField,
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub disposition: FormField,
    pub query: FormField,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            company: FormField::text("company", "Company"),
            name: FormField::text("name", "Client Name"),
            email: FormField::text("email", "Email"),
            phone: FormField::phone("contact_number", "Contact Number"),
            disposition: FormField::select("disposition", "Disposition"),
            query: FormField::multiline("query", "Query"),
            active_field_index: 0,
        }
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    pub fn values(&self) -> FormValues {
        FormValues {
            company: self.company.as_text().to_string(),
            name: self.name.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
            email: self.email.as_text().to_string(),
            query: self.query.as_text().to_string(),
            disposition: self.disposition.as_text().to_string(),
        }
    }

    /// Back to the initial empty form with focus on the first field
    pub fn reset(&mut self) {
        for field in [
            &mut self.company,
            &mut self.name,
            &mut self.email,
            &mut self.phone,
            &mut self.disposition,
            &mut self.query,
        ] {
            field.clear();
        }
        self.active_field_index = 0;
    }

    /// Type a character into the active field.
    /// Returns false when the keystroke was discarded.
    pub fn input_char(&mut self, c: char) -> bool {
        self.active_field_mut().is_some_and(|f| f.push_char(c))
    }

    /// Paste text into the active field as a single change
    pub fn input_str(&mut self, text: &str) -> bool {
        self.active_field_mut().is_some_and(|f| f.push_str(text))
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.active_field_mut() {
            field.pop_char();
        }
    }

    /// Cycle the active field if it is a select
    pub fn cycle_choice(&mut self, forward: bool) -> bool {
        match self.active_field_mut() {
            Some(field) if field.is_select() => {
                field.cycle_choice(forward);
                true
            }
            _ => false,
        }
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_multiline())
    }

    pub fn is_active_field_select(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(|f| f.is_select())
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        7 // six fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.company),
            1 => Some(&mut self.name),
            2 => Some(&mut self.email),
            3 => Some(&mut self.phone),
            4 => Some(&mut self.disposition),
            5 => Some(&mut self.query),
            // Submit row has no field
            _ => None,
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.company),
            1 => Some(&self.name),
            2 => Some(&self.email),
            3 => Some(&self.phone),
            4 => Some(&self.disposition),
            5 => Some(&self.query),
            _ => None,
        }
    }
}
