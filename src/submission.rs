//! Accepted-submission records and the persisted log.
//!
//! A [`SubmissionRecord`] is an immutable snapshot of the form taken at the
//! moment validation succeeds. Records accumulate in a [`SubmissionLog`],
//! persisted as one JSON array blob and only ever appended to by this crate.

use crate::form::FormInput;
use chrono::{DateTime, SecondsFormat, Utc};
use fake::Dummy;
use log::*;
use serde::{Deserialize, Serialize};

/// One accepted form submission, frozen at acceptance time.
///
#[derive(Clone, Debug, Dummy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub education: String,
    pub consent: bool,
    /// ISO-8601 timestamp of the moment the submission was accepted.
    #[serde(rename = "submittedAt")]
    pub submitted_at: String,
}

impl SubmissionRecord {
    /// Snapshot the given input with the given acceptance time.
    ///
    pub fn from_input(input: &FormInput, submitted_at: DateTime<Utc>) -> SubmissionRecord {
        SubmissionRecord {
            name: input.name.clone(),
            email: input.email.clone(),
            phone: input.phone.clone(),
            experience: input.experience.clone(),
            education: input.education.clone(),
            consent: input.consent,
            submitted_at: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Ordered, append-only collection of accepted submissions.
///
/// Serialized transparently as a JSON array, the whole blob rewritten on
/// every append (read-modify-write, not incremental).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionLog(Vec<SubmissionRecord>);

impl SubmissionLog {
    /// Return a new empty log.
    ///
    pub fn new() -> SubmissionLog {
        SubmissionLog::default()
    }

    /// Append a record, preserving insertion order.
    ///
    pub fn push(&mut self, record: SubmissionRecord) {
        self.0.push(record);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// All records in insertion order.
    ///
    pub fn records(&self) -> &[SubmissionRecord] {
        &self.0
    }

    /// Parse a persisted blob. Malformed content is treated as "no prior
    /// submissions" rather than an error the user could do nothing about.
    pub fn from_json(blob: &str) -> SubmissionLog {
        match serde_json::from_str(blob) {
            Ok(log) => log,
            Err(e) => {
                warn!("Discarding unparsable submission log: {}", e);
                SubmissionLog::new()
            }
        }
    }

    /// Serialize the whole log to one JSON array blob.
    ///
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
