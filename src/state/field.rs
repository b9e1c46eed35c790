//! Form field value objects

/// A single text input with its configuration and current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: String,
    pub placeholder: String,
    pub value: String,
    pub required: bool,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: &str, placeholder: &str, required: bool) -> Self {
        Self {
            name: name.to_string(),
            placeholder: placeholder.to_string(),
            value: String::new(),
            required,
        }
    }

    /// Get the current text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Replace the field value wholesale
    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Append a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// Whether the field currently holds no text
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}
