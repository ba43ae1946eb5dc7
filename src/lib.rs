//! Résumé-submission form core.
//!
//! Validates applicant input, tracks per-field error state, and persists
//! accepted submissions to a local append-only log. The visual layer and
//! the storage medium are collaborator traits ([`Presenter`], [`Store`])
//! injected into the orchestrating [`FormFlow`]; nothing here touches a
//! screen or a fixed path unless the host wires it to.
//!
//! Typical wiring:
//!
//! ```
//! use resume_intake::{FieldId, FormFlow, LogPresenter, MemoryStore, SubmitOutcome, SystemClock};
//!
//! let mut flow = FormFlow::new(LogPresenter::new(), MemoryStore::new(), SystemClock::new());
//! flow.field_changed(FieldId::Name, "Ada Lovelace");
//! flow.field_changed(FieldId::Email, "ada@example.com");
//! flow.field_changed(FieldId::Phone, "(11) 98765-4321");
//! flow.field_changed(FieldId::Experience, "Analytical Engine programming");
//! flow.field_changed(FieldId::Education, "Private tutoring, mathematics");
//! flow.consent_changed(true);
//! assert_eq!(flow.submit(), SubmitOutcome::Accepted);
//! ```

pub mod clock;
pub mod error;
pub mod flow;
pub mod form;
pub mod presenter;
pub mod store;
pub mod submission;

pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{AppError, AppResult};
pub use flow::{FormFlow, Phase, SubmitOutcome, RESET_DELAY};
pub use form::{
    is_non_empty, is_valid_email, is_valid_phone, validate_form, ErrorTarget, FieldId, FormInput,
    ValidationResult,
};
pub use presenter::{LogPresenter, Presenter, ScrollTarget};
pub use store::{JsonFileStore, MemoryStore, Store, StoreError};
pub use submission::{SubmissionLog, SubmissionRecord};
