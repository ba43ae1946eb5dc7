//! Form input and validation module.
//!
//! This module contains the closed field set, the raw input snapshot, the
//! field-level validity predicates, and the whole-form validation pass:
//! - `FieldId` / `FormInput` for field identity and raw values
//! - Pure predicates (`is_non_empty`, `is_valid_email`, `is_valid_phone`)
//! - `validate_form` producing a complete `ValidationResult` per pass

mod field;
mod predicates;
mod validation;

pub use field::{FieldId, FormInput};
pub use predicates::{is_non_empty, is_valid_email, is_valid_phone};
pub use validation::{validate_form, ErrorTarget, ValidationResult};
