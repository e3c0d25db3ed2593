use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::form::FormFields;

/// Snapshot of the form at submit time, in its interchange shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionRecord {
    pub title: String,
    pub author: String,
    pub email: String,
    pub content: String,
    pub category: String,
    pub terms_accepted: bool,
}

impl From<FormFields> for SubmissionRecord {
    fn from(f: FormFields) -> Self {
        Self {
            title: f.title,
            author: f.author,
            email: f.email,
            content: f.content,
            category: f.category,
            terms_accepted: f.terms_accepted,
        }
    }
}

impl SubmissionRecord {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s)
    }

    /// Extend with a submission timestamp, leaving the record's fields as they are.
    pub fn enhance(self, at: DateTime<Utc>) -> EnhancedRecord {
        EnhancedRecord {
            record: self,
            submission_date: iso_timestamp(at),
        }
    }
}

/// A record plus `submissionDate`. Serializes as one flat object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedRecord {
    #[serde(flatten)]
    pub record: SubmissionRecord,
    pub submission_date: String,
}

impl EnhancedRecord {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// ISO-8601 in UTC with `Z` suffix, e.g. `2026-10-15T09:30:00.123456789Z`.
/// Keeps the full sub-second precision of `at` so the stamp never sorts before it.
pub fn iso_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}
