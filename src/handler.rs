//! Submit handling for the blog form.
//!
//! `initialize` installs a `SubmissionHandler` on a form once; every submit
//! event then goes through `handle_submit`, which either rejects with the
//! full list of violations or accepts, logs the derived records and bumps
//! the session counter.

use chrono::Utc;

use crate::config::DEFAULT_SUCCESS_MESSAGE;
use crate::counter::SubmissionCounter;
use crate::errors::AppError;
use crate::form::{self, FormElement, FormFields};
use crate::notify::Notifier;
use crate::record::{EnhancedRecord, SubmissionRecord};
use crate::validate::{self, Violation};

/// A form-submit event. The handler always suppresses its default action.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Everything an accepted submission made observable.
#[derive(Debug, Clone)]
pub struct SubmissionReport {
    pub serialized: String,
    pub title: String,
    pub email: String,
    pub enhanced: EnhancedRecord,
    pub count: u64,
}

#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    Accepted(SubmissionReport),
    Rejected(Vec<Violation>),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

pub struct SubmissionHandler<F, N> {
    form: F,
    notifier: N,
    counter: SubmissionCounter,
    success_message: String,
}

/// Install the handler on `form`. Call once per form; fails if any of the
/// six controls is missing or is not the kind of control it is read as.
pub fn initialize<F: FormElement, N: Notifier>(
    form: F,
    notifier: N,
) -> Result<SubmissionHandler<F, N>, AppError> {
    if let Err(e) = form::check_controls(&form) {
        log::error!("Cannot install on #{}: {}", form.id(), e);
        return Err(e);
    }
    log::info!("Submission handler installed on #{}", form.id());
    Ok(SubmissionHandler {
        form,
        notifier,
        counter: SubmissionCounter::new(),
        success_message: DEFAULT_SUCCESS_MESSAGE.to_string(),
    })
}

impl<F: FormElement, N: Notifier> SubmissionHandler<F, N> {
    pub fn with_success_message(mut self, message: &str) -> Self {
        self.success_message = message.to_string();
        self
    }

    pub fn handle_submit(&mut self, event: &mut SubmitEvent) -> Result<SubmitOutcome, AppError> {
        event.prevent_default();

        let fields = FormFields::read(&self.form)?;

        let errors = validate::validate_submission(&fields);
        if !errors.is_empty() {
            log::warn!(
                "Submission on #{} rejected with {} violation(s)",
                self.form.id(),
                errors.len()
            );
            for violation in &errors {
                self.notifier.alert(violation.message());
            }
            return Ok(SubmitOutcome::Rejected(errors));
        }

        let record = SubmissionRecord::from(fields);
        let serialized = record.to_json()?;
        log::info!("Serialized submission: {serialized}");

        let restored = SubmissionRecord::from_json(&serialized)?;
        if restored != record {
            return Err(AppError::RoundTrip);
        }

        let SubmissionRecord { title, email, .. } = restored.clone();
        log::info!("Title: {title}, Email: {email}");

        let enhanced = restored.enhance(Utc::now());
        log::info!("Enhanced submission: {}", enhanced.to_json()?);

        let count = self.counter.increment();
        log::info!("Total submissions: {count}");

        self.notifier.alert(&self.success_message);
        self.form.reset();
        self.form.focus(form::TITLE);

        Ok(SubmitOutcome::Accepted(SubmissionReport {
            serialized,
            title,
            email,
            enhanced,
            count,
        }))
    }

    pub fn submission_count(&self) -> u64 {
        self.counter.get()
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Mutable access for typing into the form between submits.
    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }
}
