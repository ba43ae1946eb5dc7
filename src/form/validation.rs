//! Whole-form validation.
//!
//! One pass over every field plus the consent checkbox, producing a complete
//! [`ValidationResult`]. A pass never merges into a previous result; callers
//! replace displayed errors wholesale.

use super::field::{FieldId, FormInput};
use super::predicates::{is_non_empty, is_valid_email, is_valid_phone};

/// Where a validation error attaches: a form field, or the consent checkbox
/// (which has no [`FieldId`] of its own).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorTarget {
    Field(FieldId),
    Consent,
}

/// Outcome of one validation pass.
///
/// Entries are kept in field declaration order, consent last, so rendering
/// and scroll-to-first-error need no extra sorting. Empty means valid.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ValidationResult {
    entries: Vec<(ErrorTarget, String)>,
}

impl ValidationResult {
    /// Return a new empty (all-valid) result.
    ///
    pub fn new() -> ValidationResult {
        ValidationResult::default()
    }

    fn add(&mut self, target: ErrorTarget, message: impl Into<String>) {
        self.entries.push((target, message.into()));
    }

    /// True iff no field or consent error was recorded.
    ///
    pub fn is_valid(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of recorded errors.
    ///
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Error message recorded for the given target, if any.
    ///
    pub fn message(&self, target: ErrorTarget) -> Option<&str> {
        self.entries
            .iter()
            .find(|(t, _)| *t == target)
            .map(|(_, m)| m.as_str())
    }

    /// First error in declaration order; the scroll destination on rejection.
    ///
    pub fn first_target(&self) -> Option<ErrorTarget> {
        self.entries.first().map(|(t, _)| *t)
    }

    /// Iterate over all recorded errors in declaration order.
    ///
    pub fn iter(&self) -> impl Iterator<Item = (ErrorTarget, &str)> {
        self.entries.iter().map(|(t, m)| (*t, m.as_str()))
    }
}

/// Validate the whole form in one deterministic, side-effect-free pass.
///
/// Required checks run first per field; the email and phone fields get a
/// format check only when non-empty, so a blank email reports "required"
/// rather than "invalid".
pub fn validate_form(input: &FormInput) -> ValidationResult {
    let mut result = ValidationResult::new();

    for field in FieldId::ALL {
        let value = input.value(field);
        match field {
            FieldId::Email => {
                if !is_non_empty(value) {
                    result.add(ErrorTarget::Field(field), "Email is required");
                } else if !is_valid_email(value) {
                    result.add(ErrorTarget::Field(field), "Invalid email");
                }
            }
            FieldId::Phone => {
                if !is_non_empty(value) {
                    result.add(ErrorTarget::Field(field), "Phone is required");
                } else if !is_valid_phone(value) {
                    result.add(
                        ErrorTarget::Field(field),
                        "Invalid phone (minimum 10 digits)",
                    );
                }
            }
            FieldId::Name | FieldId::Experience | FieldId::Education => {
                if !is_non_empty(value) {
                    result.add(
                        ErrorTarget::Field(field),
                        format!("{} is required", field.label()),
                    );
                }
            }
        }
    }

    if !input.consent {
        result.add(ErrorTarget::Consent, "You must accept the privacy policy");
    }

    result
}
