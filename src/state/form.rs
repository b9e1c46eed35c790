//! Signup form state

use super::field::FormField;
use super::lead::Lead;

/// Index of the submit button row in the focus cycle
const BUTTON_ROW: usize = 3;

/// The lead capture form: three text inputs plus the submit button row
#[derive(Debug, Clone)]
pub struct LeadForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub active_field_index: usize,
}

impl LeadForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "이름", true),
            email: FormField::text("email", "이메일 주소", true),
            phone: FormField::text("phone", "연락처 (선택사항)", false),
            active_field_index: 0,
        }
    }

    pub fn field_count(&self) -> usize {
        4 // name, email, phone, button row
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.field_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.field_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(BUTTON_ROW);
    }

    /// Returns true if the submit button row is currently focused
    pub fn is_button_row_active(&self) -> bool {
        self.active_field_index == BUTTON_ROW
    }

    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_field_index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.phone),
            _ => None, // button row has no text field
        }
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.phone),
            _ => None,
        }
    }

    /// Snapshot the current values for delivery
    pub fn to_lead(&self) -> Lead {
        Lead {
            name: self.name.as_text().to_string(),
            email: self.email.as_text().to_string(),
            phone: self.phone.as_text().to_string(),
        }
    }

    /// Clear all values and return focus to the first field
    pub fn reset(&mut self) {
        self.name.clear();
        self.email.clear();
        self.phone.clear();
        self.active_field_index = 0;
    }

    /// First field that fails the surface-level checks, with its hint.
    ///
    /// These are the checks the host inputs enforce (required name, required
    /// well-formed email); the submission flow itself does not validate.
    pub fn first_invalid(&self) -> Option<(usize, &'static str)> {
        if self.name.as_text().trim().is_empty() {
            return Some((0, "이름을 입력해주세요."));
        }
        let email = self.email.as_text().trim();
        if email.is_empty() {
            return Some((1, "이메일 주소를 입력해주세요."));
        }
        if !looks_like_email(email) {
            return Some((1, "올바른 이메일 주소를 입력해주세요."));
        }
        None
    }
}

impl Default for LeadForm {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal shape check matching what an email input would enforce
fn looks_like_email(value: &str) -> bool {
    match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_new_has_correct_defaults() {
        let form = LeadForm::new();
        assert_eq!(form.active_field_index, 0);
        assert_eq!(form.name.name, "name");
        assert_eq!(form.email.name, "email");
        assert_eq!(form.phone.name, "phone");
        assert!(form.name.required);
        assert!(form.email.required);
        assert!(!form.phone.required);
    }

    #[test]
    fn test_next_field_cycles() {
        let mut form = LeadForm::new();
        for _ in 0..4 {
            form.next_field();
        }
        assert_eq!(form.active_field_index, 0); // wrapped back
    }

    #[test]
    fn test_prev_field_cycles() {
        let mut form = LeadForm::new();
        form.prev_field();
        assert_eq!(form.active_field_index, 3); // wrapped to button row
    }

    #[test]
    fn test_is_button_row_active() {
        let mut form = LeadForm::new();
        assert!(!form.is_button_row_active());
        form.set_active_field(3);
        assert!(form.is_button_row_active());
    }

    #[test]
    fn test_set_active_field_clamps() {
        let mut form = LeadForm::new();
        form.set_active_field(100);
        assert_eq!(form.active_field_index, 3);
    }

    #[test]
    fn test_active_field_mut_on_button_row_is_none() {
        let mut form = LeadForm::new();
        form.set_active_field(3);
        assert!(form.active_field_mut().is_none());
    }

    #[test]
    fn test_get_field_returns_correct_fields() {
        let form = LeadForm::new();
        assert_eq!(form.get_field(0).unwrap().name, "name");
        assert_eq!(form.get_field(1).unwrap().name, "email");
        assert_eq!(form.get_field(2).unwrap().name, "phone");
        assert!(form.get_field(3).is_none()); // button row
    }

    #[test]
    fn test_to_lead_snapshots_values() {
        let mut form = LeadForm::new();
        form.name.set_text("박현우".to_string());
        form.email.set_text("x@y.com".to_string());
        form.phone.set_text("010-1234-5678".to_string());
        let lead = form.to_lead();
        assert_eq!(lead.name, "박현우");
        assert_eq!(lead.email, "x@y.com");
        assert_eq!(lead.phone, "010-1234-5678");
    }

    #[test]
    fn test_reset_clears_all_fields() {
        let mut form = LeadForm::new();
        form.name.set_text("김지영".to_string());
        form.email.set_text("a@b.com".to_string());
        form.set_active_field(2);
        form.reset();
        assert!(form.name.is_empty());
        assert!(form.email.is_empty());
        assert!(form.phone.is_empty());
        assert_eq!(form.active_field_index, 0);
    }

    #[test]
    fn test_first_invalid_missing_name() {
        let form = LeadForm::new();
        let (index, hint) = form.first_invalid().unwrap();
        assert_eq!(index, 0);
        assert!(hint.contains("이름"));
    }

    #[test]
    fn test_first_invalid_missing_email() {
        let mut form = LeadForm::new();
        form.name.set_text("김지영".to_string());
        let (index, _) = form.first_invalid().unwrap();
        assert_eq!(index, 1);
    }

    #[test]
    fn test_first_invalid_malformed_email() {
        let mut form = LeadForm::new();
        form.name.set_text("김지영".to_string());
        form.email.set_text("not-an-email".to_string());
        let (index, hint) = form.first_invalid().unwrap();
        assert_eq!(index, 1);
        assert!(hint.contains("올바른"));
    }

    #[test]
    fn test_first_invalid_none_when_valid() {
        let mut form = LeadForm::new();
        form.name.set_text("김지영".to_string());
        form.email.set_text("a@b.com".to_string());
        assert!(form.first_invalid().is_none()); // phone stays optional
    }

    #[test]
    fn test_looks_like_email() {
        assert!(looks_like_email("a@b.com"));
        assert!(looks_like_email("user.name@mail.example.org"));
        assert!(!looks_like_email("plainaddress"));
        assert!(!looks_like_email("@no-local.com"));
        assert!(!looks_like_email("no-domain@"));
        assert!(!looks_like_email("dot@.start"));
        assert!(!looks_like_email("dot@end."));
    }
}
