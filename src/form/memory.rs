use crate::errors::AppError;
use crate::form::{AUTHOR, CATEGORIES, CATEGORY, CONTENT, EMAIL, FormElement, TERMS, TITLE};

#[derive(Debug, Clone)]
enum ControlKind {
    Text { value: String, default: String },
    Select { options: Vec<String>, selected: String },
    Checkbox { checked: bool, default: bool },
}

#[derive(Debug, Clone)]
struct Control {
    id: String,
    kind: ControlKind,
}

/// Headless form host with browser-like text, select and checkbox controls.
#[derive(Debug, Clone)]
pub struct InMemoryForm {
    id: String,
    controls: Vec<Control>,
    focused: Option<String>,
}

impl InMemoryForm {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            controls: Vec::new(),
            focused: None,
        }
    }

    /// The six-control blog form: title, author, email, content, category, terms.
    pub fn blog_form(id: &str) -> Self {
        Self::new(id)
            .with_text(TITLE, "")
            .with_text(AUTHOR, "")
            .with_text(EMAIL, "")
            .with_text(CONTENT, "")
            .with_select(CATEGORY, &CATEGORIES)
            .with_checkbox(TERMS, false)
    }

    pub fn with_text(mut self, id: &str, default: &str) -> Self {
        self.controls.push(Control {
            id: id.to_string(),
            kind: ControlKind::Text {
                value: default.to_string(),
                default: default.to_string(),
            },
        });
        self
    }

    /// Select control; the first option starts selected and is the reset target.
    pub fn with_select(mut self, id: &str, options: &[&str]) -> Self {
        let options: Vec<String> = options.iter().map(|s| s.to_string()).collect();
        let selected = options.first().cloned().unwrap_or_default();
        self.controls.push(Control {
            id: id.to_string(),
            kind: ControlKind::Select { options, selected },
        });
        self
    }

    pub fn with_checkbox(mut self, id: &str, default: bool) -> Self {
        self.controls.push(Control {
            id: id.to_string(),
            kind: ControlKind::Checkbox { checked: default, default },
        });
        self
    }

    /// Drop a control, leaving the rest of the form intact.
    pub fn without(mut self, id: &str) -> Self {
        self.controls.retain(|c| c.id != id);
        self
    }

    fn control_mut(&mut self, id: &str) -> Result<&mut Control, AppError> {
        self.controls
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::MissingControl(id.to_string()))
    }

    fn control(&self, id: &str) -> Option<&Control> {
        self.controls.iter().find(|c| c.id == id)
    }

    /// Type into a text control or pick a select option.
    pub fn set_value(&mut self, id: &str, new_value: &str) -> Result<(), AppError> {
        let control = self.control_mut(id)?;
        match &mut control.kind {
            ControlKind::Text { value, .. } => {
                *value = new_value.to_string();
                Ok(())
            }
            ControlKind::Select { options, selected } => {
                if !options.iter().any(|o| o == new_value) {
                    return Err(AppError::UnknownOption {
                        control: id.to_string(),
                        value: new_value.to_string(),
                    });
                }
                *selected = new_value.to_string();
                Ok(())
            }
            ControlKind::Checkbox { .. } => Err(AppError::WrongControlKind {
                control: id.to_string(),
                expected: "text or select",
            }),
        }
    }

    pub fn set_checked(&mut self, id: &str, state: bool) -> Result<(), AppError> {
        let control = self.control_mut(id)?;
        match &mut control.kind {
            ControlKind::Checkbox { checked, .. } => {
                *checked = state;
                Ok(())
            }
            _ => Err(AppError::WrongControlKind {
                control: id.to_string(),
                expected: "checkbox",
            }),
        }
    }

    /// Apply an `application/x-www-form-urlencoded` form state.
    ///
    /// Listed fields are set. Checkboxes follow browser encoding: present
    /// (with `on`, `true` or `1`) means checked, absent means unchecked.
    /// On error the form is left exactly as it was.
    pub fn fill_urlencoded(&mut self, input: &str) -> Result<(), AppError> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_str(input)?;

        let mut next = self.clone();
        next.apply_pairs(&pairs)?;
        *self = next;
        Ok(())
    }

    fn apply_pairs(&mut self, pairs: &[(String, String)]) -> Result<(), AppError> {
        let checkbox_ids: Vec<String> = self
            .controls
            .iter()
            .filter(|c| matches!(c.kind, ControlKind::Checkbox { .. }))
            .map(|c| c.id.clone())
            .collect();

        for id in &checkbox_ids {
            let on = pairs
                .iter()
                .any(|(k, v)| k == id && matches!(v.as_str(), "on" | "true" | "1"));
            self.set_checked(id, on)?;
        }

        for (key, value) in pairs {
            if checkbox_ids.contains(key) {
                continue;
            }
            if self.control(key).is_none() {
                log::warn!("Ignoring unknown field '{}' for #{}", key, self.id);
                continue;
            }
            self.set_value(key, value)?;
        }
        Ok(())
    }
}

impl FormElement for InMemoryForm {
    fn id(&self) -> &str {
        &self.id
    }

    fn has_control(&self, id: &str) -> bool {
        self.control(id).is_some()
    }

    fn value(&self, id: &str) -> Option<String> {
        match &self.control(id)?.kind {
            ControlKind::Text { value, .. } => Some(value.clone()),
            ControlKind::Select { selected, .. } => Some(selected.clone()),
            ControlKind::Checkbox { .. } => None,
        }
    }

    fn checked(&self, id: &str) -> Option<bool> {
        match &self.control(id)?.kind {
            ControlKind::Checkbox { checked, .. } => Some(*checked),
            _ => None,
        }
    }

    fn reset(&mut self) {
        for control in &mut self.controls {
            match &mut control.kind {
                ControlKind::Text { value, default } => *value = default.clone(),
                ControlKind::Select { options, selected } => {
                    *selected = options.first().cloned().unwrap_or_default();
                }
                ControlKind::Checkbox { checked, default } => *checked = *default,
            }
        }
    }

    fn focus(&mut self, id: &str) {
        if self.has_control(id) {
            self.focused = Some(id.to_string());
        } else {
            log::warn!("Cannot focus #{id}: not in #{}", self.id);
        }
    }

    fn focused(&self) -> Option<&str> {
        self.focused.as_deref()
    }
}
