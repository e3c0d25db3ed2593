//! The blog form as the handler sees it: control ids, the `FormElement`
//! host seam, and the field snapshot read on each submit.

use crate::errors::AppError;

pub mod memory;

pub use memory::InMemoryForm;

pub const TITLE: &str = "title";
pub const AUTHOR: &str = "author";
pub const EMAIL: &str = "email";
pub const CONTENT: &str = "content";
pub const CATEGORY: &str = "category";
pub const TERMS: &str = "terms";

/// Every control the handler reads. `initialize` refuses forms missing any of them.
pub const CONTROL_IDS: [&str; 6] = [TITLE, AUTHOR, EMAIL, CONTENT, CATEGORY, TERMS];

/// Options of the category select, in display order. The first is the default.
pub const CATEGORIES: [&str; 5] = ["technology", "lifestyle", "travel", "food", "other"];

/// A live form whose controls can be read and written by id.
pub trait FormElement {
    fn id(&self) -> &str;
    fn has_control(&self, id: &str) -> bool;
    /// Current value of a text or select control.
    fn value(&self, id: &str) -> Option<String>;
    /// Current state of a checkbox control.
    fn checked(&self, id: &str) -> Option<bool>;
    /// Restore every control to its default.
    fn reset(&mut self);
    fn focus(&mut self, id: &str);
    fn focused(&self) -> Option<&str>;
}

/// Field values at the moment of submission.
#[derive(Debug, Clone, PartialEq)]
pub struct FormFields {
    pub title: String,
    pub author: String,
    pub email: String,
    pub content: String,
    pub category: String,
    pub terms_accepted: bool,
}

impl FormFields {
    /// Read all six fields from the form. Free-text fields are trimmed;
    /// category and terms are taken as-is.
    pub fn read<F: FormElement + ?Sized>(form: &F) -> Result<Self, AppError> {
        Ok(Self {
            title: read_trimmed(form, TITLE)?,
            author: read_trimmed(form, AUTHOR)?,
            email: read_trimmed(form, EMAIL)?,
            content: read_trimmed(form, CONTENT)?,
            category: form
                .value(CATEGORY)
                .ok_or_else(|| AppError::MissingControl(CATEGORY.to_string()))?,
            terms_accepted: form
                .checked(TERMS)
                .ok_or_else(|| AppError::MissingControl(TERMS.to_string()))?,
        })
    }
}

fn read_trimmed<F: FormElement + ?Sized>(form: &F, id: &str) -> Result<String, AppError> {
    form.value(id)
        .map(|v| v.trim().to_string())
        .ok_or_else(|| AppError::MissingControl(id.to_string()))
}

/// Check that every control in `CONTROL_IDS` exists and can be read the way
/// `FormFields::read` reads it: `terms` as a checkbox, the rest as values.
pub fn check_controls<F: FormElement + ?Sized>(form: &F) -> Result<(), AppError> {
    for id in CONTROL_IDS {
        if !form.has_control(id) {
            return Err(AppError::MissingControl(id.to_string()));
        }
        let (readable, expected) = if id == TERMS {
            (form.checked(id).is_some(), "checkbox")
        } else {
            (form.value(id).is_some(), "text or select")
        };
        if !readable {
            return Err(AppError::WrongControlKind {
                control: id.to_string(),
                expected,
            });
        }
    }
    Ok(())
}
