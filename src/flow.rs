//! Submission orchestration.
//!
//! [`FormFlow`] owns the live [`FormInput`], drives validation on submit, and
//! coordinates the two collaborators: the [`Presenter`] for everything the
//! user sees and the [`Store`] for accepted submissions. All transitions run
//! synchronously on the caller's thread; the only deferred work is the
//! automatic reset after acceptance, held as an explicit scheduled task and
//! fired from [`FormFlow::tick`].

use crate::clock::Clock;
use crate::form::{validate_form, ErrorTarget, FieldId, FormInput, ValidationResult};
use crate::presenter::{Presenter, ScrollTarget};
use crate::store::Store;
use crate::submission::SubmissionRecord;
use log::*;
use std::time::Duration;

/// Delay between acceptance and the automatic form reset.
pub const RESET_DELAY: Duration = Duration::from_secs(3);

/// Observable flow state.
///
/// Validation itself is synchronous, so `Validating` and `Rejected` never
/// rest between events; their outcome is reported through [`SubmitOutcome`]
/// instead. `Resetting` likewise completes within the `tick` that fires it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// User is mutating the form.
    Editing,
    /// Submission accepted; form hidden, reset scheduled.
    Accepted,
    /// Reset side effects in progress.
    Resetting,
}

/// What a submit attempt did.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation passed; one record was appended and the success view shown.
    Accepted,
    /// Validation failed; errors were rendered, nothing persisted.
    Rejected(ValidationResult),
    /// Submit arrived while the form was hidden awaiting reset.
    Ignored,
}

/// Reset scheduled to fire once the clock reaches `due`.
#[derive(Debug)]
struct ResetTask {
    due: Duration,
}

/// Drives the form through editing, validation, acceptance and reset.
///
pub struct FormFlow<P: Presenter, S: Store, C: Clock> {
    input: FormInput,
    phase: Phase,
    pending_reset: Option<ResetTask>,
    presenter: P,
    store: S,
    clock: C,
}

impl<P: Presenter, S: Store, C: Clock> FormFlow<P, S, C> {
    /// Start a new flow in the editing phase with empty input.
    ///
    pub fn new(presenter: P, store: S, clock: C) -> FormFlow<P, S, C> {
        FormFlow {
            input: FormInput::new(),
            phase: Phase::Editing,
            pending_reset: None,
            presenter,
            store,
            clock,
        }
    }

    /// Current live input.
    ///
    pub fn input(&self) -> &FormInput {
        &self.input
    }

    /// Current observable phase.
    ///
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether an automatic reset is scheduled.
    ///
    pub fn reset_pending(&self) -> bool {
        self.pending_reset.is_some()
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Record a field edit. Clears that field's displayed error immediately,
    /// without re-validating — the user is presumed to be fixing it.
    pub fn field_changed(&mut self, field: FieldId, value: impl Into<String>) {
        if self.phase != Phase::Editing {
            return;
        }
        self.input.set_value(field, value);
        self.presenter.clear_field_error(field);
    }

    /// Record a consent checkbox change, clearing its displayed error.
    ///
    pub fn consent_changed(&mut self, checked: bool) {
        if self.phase != Phase::Editing {
            return;
        }
        self.input.consent = checked;
        self.presenter.clear_consent_error();
    }

    /// Validate the live input and either persist the submission or render
    /// the full set of errors. Runs to completion before returning.
    pub fn submit(&mut self) -> SubmitOutcome {
        if self.phase != Phase::Editing {
            debug!("ignoring submit while form is hidden");
            return SubmitOutcome::Ignored;
        }

        debug!("validating submission");
        let result = validate_form(&self.input);

        // Displayed errors are replaced wholesale on every pass
        self.clear_displayed_errors();

        if !result.is_valid() {
            for (target, message) in result.iter() {
                match target {
                    ErrorTarget::Field(field) => self.presenter.show_field_error(field, message),
                    ErrorTarget::Consent => self.presenter.show_consent_error(message),
                }
            }
            if let Some(first) = result.first_target() {
                self.presenter.scroll_to(match first {
                    ErrorTarget::Field(field) => ScrollTarget::Field(field),
                    ErrorTarget::Consent => ScrollTarget::Consent,
                });
            }
            debug!("submission rejected with {} error(s)", result.len());
            return SubmitOutcome::Rejected(result);
        }

        let record = SubmissionRecord::from_input(&self.input, self.clock.now_wall());
        let mut log = self.store.load();
        log.push(record);
        if let Err(e) = self.store.save(&log) {
            // The user already corrected everything they could; absorb it
            error!("Failed to persist submission: {}", e);
        }
        info!("submission accepted ({} on record)", log.len());

        self.presenter.hide_form();
        self.presenter.show_success();
        self.presenter.scroll_to(ScrollTarget::Success);

        self.pending_reset = Some(ResetTask {
            due: self.clock.now_tick() + RESET_DELAY,
        });
        self.phase = Phase::Accepted;
        SubmitOutcome::Accepted
    }

    /// Fire the scheduled reset if it has come due. Returns true when the
    /// reset ran. Hosts call this from their event loop or timer.
    pub fn tick(&mut self) -> bool {
        let due = match &self.pending_reset {
            Some(task) => task.due,
            None => return false,
        };
        if self.clock.now_tick() < due {
            return false;
        }
        self.perform_reset();
        true
    }

    /// Drop the scheduled reset without running it. Returns true if a task
    /// was pending. The form stays hidden until [`FormFlow::reset_now`].
    pub fn cancel_reset(&mut self) -> bool {
        self.pending_reset.take().is_some()
    }

    /// Run the reset immediately, regardless of the schedule.
    ///
    pub fn reset_now(&mut self) {
        if self.phase == Phase::Editing {
            return;
        }
        self.perform_reset();
    }

    fn perform_reset(&mut self) {
        self.phase = Phase::Resetting;
        self.pending_reset = None;
        debug!("resetting form after accepted submission");

        self.input.reset();
        self.clear_displayed_errors();
        self.presenter.hide_success();
        self.presenter.show_form();

        self.phase = Phase::Editing;
    }

    fn clear_displayed_errors(&mut self) {
        for field in FieldId::ALL {
            self.presenter.clear_field_error(field);
        }
        self.presenter.clear_consent_error();
    }
}
