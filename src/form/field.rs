//! Form field identifiers and raw input state.
//!
//! This module contains the closed set of form fields and the owned input
//! snapshot the validator reads from.

/// Identifies one field of the résumé form.
///
/// The set is closed: every field the form carries is listed here, and
/// validation matches on it exhaustively.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Email,
    Phone,
    Experience,
    Education,
}

impl FieldId {
    /// All fields in declaration order. Error rendering and scroll-to-first
    /// both follow this order.
    pub const ALL: [FieldId; 5] = [
        FieldId::Name,
        FieldId::Email,
        FieldId::Phone,
        FieldId::Experience,
        FieldId::Education,
    ];

    /// Stable lowercase name used as a storage/wire key.
    ///
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldId::Name => "name",
            FieldId::Email => "email",
            FieldId::Phone => "phone",
            FieldId::Experience => "experience",
            FieldId::Education => "education",
        }
    }

    /// Human-readable label used in error messages.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            FieldId::Name => "Name",
            FieldId::Email => "Email",
            FieldId::Phone => "Phone",
            FieldId::Experience => "Experience",
            FieldId::Education => "Education",
        }
    }
}

/// Raw user input for one form session.
///
/// Owned by the orchestration layer and mutated on every field-change event;
/// the validator only ever reads it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormInput {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub education: String,
    pub consent: bool,
}

impl FormInput {
    /// Return a new empty instance.
    ///
    pub fn new() -> FormInput {
        FormInput::default()
    }

    /// Current raw value of the given field.
    ///
    pub fn value(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Email => &self.email,
            FieldId::Phone => &self.phone,
            FieldId::Experience => &self.experience,
            FieldId::Education => &self.education,
        }
    }

    /// Overwrite the value of the given field.
    ///
    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        let value = value.into();
        match field {
            FieldId::Name => self.name = value,
            FieldId::Email => self.email = value,
            FieldId::Phone => self.phone = value,
            FieldId::Experience => self.experience = value,
            FieldId::Education => self.education = value,
        }
    }

    /// Clear every field back to defaults (empty strings, consent unchecked).
    ///
    pub fn reset(&mut self) {
        *self = FormInput::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields_in_declaration_order() {
        assert_eq!(FieldId::ALL.len(), 5);
        assert_eq!(FieldId::ALL[0], FieldId::Name);
        assert_eq!(FieldId::ALL[1], FieldId::Email);
        assert_eq!(FieldId::ALL[2], FieldId::Phone);
        assert_eq!(FieldId::ALL[3], FieldId::Experience);
        assert_eq!(FieldId::ALL[4], FieldId::Education);
    }

    #[test]
    fn test_field_names_and_labels() {
        assert_eq!(FieldId::Name.as_str(), "name");
        assert_eq!(FieldId::Education.as_str(), "education");
        assert_eq!(FieldId::Phone.label(), "Phone");
        assert_eq!(FieldId::Experience.label(), "Experience");
    }

    #[test]
    fn test_input_defaults_are_empty() {
        let input = FormInput::new();
        for field in FieldId::ALL {
            assert_eq!(input.value(field), "");
        }
        assert!(!input.consent);
    }

    #[test]
    fn test_set_and_get_value() {
        let mut input = FormInput::new();
        input.set_value(FieldId::Email, "ada@example.com");
        assert_eq!(input.value(FieldId::Email), "ada@example.com");
        assert_eq!(input.value(FieldId::Name), "");
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut input = FormInput::new();
        input.set_value(FieldId::Name, "Ada Lovelace");
        input.consent = true;
        input.reset();
        assert_eq!(input, FormInput::default());
    }
}
