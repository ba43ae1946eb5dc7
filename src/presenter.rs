//! Visual-feedback collaborator boundary.
//!
//! The core never touches a screen directly; everything a user sees goes
//! through a [`Presenter`] implementation injected into the flow. The crate
//! ships a [`LogPresenter`] that narrates through the `log` facade, which is
//! enough for headless hosts and demos; real front ends implement the trait
//! against their own widgets.

use crate::form::FieldId;
use log::*;

/// Where the presenter should scroll the user's attention.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollTarget {
    Field(FieldId),
    Consent,
    Success,
}

/// Renders validation feedback and form visibility changes.
///
/// Calls arrive in a fixed discipline: before errors are rendered they are
/// cleared wholesale, so implementations never need to diff passes.
pub trait Presenter {
    fn show_field_error(&mut self, field: FieldId, message: &str);
    fn clear_field_error(&mut self, field: FieldId);
    fn show_consent_error(&mut self, message: &str);
    fn clear_consent_error(&mut self);
    fn show_success(&mut self);
    fn show_form(&mut self);
    fn hide_form(&mut self);
    fn hide_success(&mut self);
    fn scroll_to(&mut self, target: ScrollTarget);
}

/// Presenter that narrates every call through the `log` facade.
///
#[derive(Debug, Default)]
pub struct LogPresenter;

impl LogPresenter {
    pub fn new() -> LogPresenter {
        LogPresenter
    }
}

impl Presenter for LogPresenter {
    fn show_field_error(&mut self, field: FieldId, message: &str) {
        info!("field error [{}]: {}", field.as_str(), message);
    }

    fn clear_field_error(&mut self, field: FieldId) {
        debug!("clear field error [{}]", field.as_str());
    }

    fn show_consent_error(&mut self, message: &str) {
        info!("consent error: {}", message);
    }

    fn clear_consent_error(&mut self) {
        debug!("clear consent error");
    }

    fn show_success(&mut self) {
        info!("showing success acknowledgment");
    }

    fn show_form(&mut self) {
        debug!("showing form");
    }

    fn hide_form(&mut self) {
        debug!("hiding form");
    }

    fn hide_success(&mut self) {
        debug!("hiding success acknowledgment");
    }

    fn scroll_to(&mut self, target: ScrollTarget) {
        debug!("scrolling to {:?}", target);
    }
}

/// Test double that records every presenter call in order.
///
#[cfg(test)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresenterCall {
    ShowFieldError(FieldId, String),
    ClearFieldError(FieldId),
    ShowConsentError(String),
    ClearConsentError,
    ShowSuccess,
    ShowForm,
    HideForm,
    HideSuccess,
    ScrollTo(ScrollTarget),
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pub calls: Vec<PresenterCall>,
}

#[cfg(test)]
impl RecordingPresenter {
    pub fn new() -> RecordingPresenter {
        RecordingPresenter::default()
    }

    /// Calls that rendered an error (field or consent), in arrival order.
    pub fn error_renders(&self) -> Vec<&PresenterCall> {
        self.calls
            .iter()
            .filter(|c| {
                matches!(
                    c,
                    PresenterCall::ShowFieldError(_, _) | PresenterCall::ShowConsentError(_)
                )
            })
            .collect()
    }
}

#[cfg(test)]
impl Presenter for RecordingPresenter {
    fn show_field_error(&mut self, field: FieldId, message: &str) {
        self.calls
            .push(PresenterCall::ShowFieldError(field, message.to_string()));
    }

    fn clear_field_error(&mut self, field: FieldId) {
        self.calls.push(PresenterCall::ClearFieldError(field));
    }

    fn show_consent_error(&mut self, message: &str) {
        self.calls
            .push(PresenterCall::ShowConsentError(message.to_string()));
    }

    fn clear_consent_error(&mut self) {
        self.calls.push(PresenterCall::ClearConsentError);
    }

    fn show_success(&mut self) {
        self.calls.push(PresenterCall::ShowSuccess);
    }

    fn show_form(&mut self) {
        self.calls.push(PresenterCall::ShowForm);
    }

    fn hide_form(&mut self) {
        self.calls.push(PresenterCall::HideForm);
    }

    fn hide_success(&mut self) {
        self.calls.push(PresenterCall::HideSuccess);
    }

    fn scroll_to(&mut self, target: ScrollTarget) {
        self.calls.push(PresenterCall::ScrollTo(target));
    }
}
