//! Shared test infrastructure for handler and form tests.
//!
//! - `RecordingNotifier` captures alerts in order
//! - `filled_form()` / `valid_form()` build a blog form with typed-in values
//! - `installed()` wires a form into a fresh handler

#![allow(dead_code)]

use blogform::form::{self, InMemoryForm};
use blogform::handler::{self, SubmissionHandler};
use blogform::notify::Notifier;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

pub const FORM_ID: &str = "blogForm";
pub const TITLE: &str = "Hello";
pub const AUTHOR: &str = "Ada Lovelace";
pub const EMAIL: &str = "a@b.com";
pub const CATEGORY: &str = "travel";
/// Exactly 30 characters.
pub const LONG_CONTENT: &str = "abcdefghijklmnopqrstuvwxyz1234";
pub const SHORT_CONTENT: &str = "short";

// ============================================================================
// NOTIFIER
// ============================================================================

#[derive(Debug, Default)]
pub struct RecordingNotifier {
    alerts: Vec<String>,
}

impl RecordingNotifier {
    pub fn take_alerts(&mut self) -> Vec<String> {
        std::mem::take(&mut self.alerts)
    }

    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

// ============================================================================
// FORMS
// ============================================================================

pub fn filled_form(content: &str, terms: bool) -> InMemoryForm {
    let mut f = InMemoryForm::blog_form(FORM_ID);
    type_into(&mut f, content, terms);
    f
}

pub fn valid_form() -> InMemoryForm {
    filled_form(LONG_CONTENT, true)
}

/// Type the standard values into an existing form.
pub fn type_into(f: &mut InMemoryForm, content: &str, terms: bool) {
    f.set_value(form::TITLE, TITLE).expect("title");
    f.set_value(form::AUTHOR, AUTHOR).expect("author");
    f.set_value(form::EMAIL, EMAIL).expect("email");
    f.set_value(form::CONTENT, content).expect("content");
    f.set_value(form::CATEGORY, CATEGORY).expect("category");
    f.set_checked(form::TERMS, terms).expect("terms");
}

pub fn installed(f: InMemoryForm) -> SubmissionHandler<InMemoryForm, RecordingNotifier> {
    handler::initialize(f, RecordingNotifier::default()).expect("Failed to install handler")
}
