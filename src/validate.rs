use crate::form::FormFields;

/// Content must be strictly longer than this many characters.
pub const MIN_CONTENT_CHARS: usize = 25;

/// A single failed rule. Messages are shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    ContentTooShort,
    TermsNotAccepted,
}

impl Violation {
    pub fn message(&self) -> &'static str {
        match self {
            Violation::ContentTooShort => "Blog content should be more than 25 characters",
            Violation::TermsNotAccepted => "You must agree to the terms and conditions",
        }
    }
}

/// Validate blog content: more than 25 characters once trimmed.
pub fn validate_content(content: &str) -> Option<Violation> {
    if content.trim().chars().count() <= MIN_CONTENT_CHARS {
        return Some(Violation::ContentTooShort);
    }
    None
}

pub fn validate_terms(accepted: bool) -> Option<Violation> {
    if !accepted {
        return Some(Violation::TermsNotAccepted);
    }
    None
}

/// Run every rule and return all failures, content rule first.
pub fn validate_submission(fields: &FormFields) -> Vec<Violation> {
    let mut errors: Vec<Violation> = vec![];
    errors.extend(validate_content(&fields.content));
    errors.extend(validate_terms(fields.terms_accepted));
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(content: &str, terms_accepted: bool) -> FormFields {
        FormFields {
            title: "Hello".into(),
            author: "Ada".into(),
            email: "a@b.com".into(),
            content: content.into(),
            category: "technology".into(),
            terms_accepted,
        }
    }

    #[test]
    fn content_boundary_is_strict() {
        assert_eq!(validate_content(&"x".repeat(25)), Some(Violation::ContentTooShort));
        assert_eq!(validate_content(&"x".repeat(26)), None);
    }

    #[test]
    fn content_counts_characters_not_bytes() {
        // 13 two-byte characters: 26 bytes but only 13 characters
        assert_eq!(validate_content(&"é".repeat(13)), Some(Violation::ContentTooShort));
        assert_eq!(validate_content(&"é".repeat(26)), None);
    }

    #[test]
    fn surrounding_whitespace_does_not_count() {
        let padded = format!("{:^40}", "x".repeat(20));
        assert_eq!(validate_content(&padded), Some(Violation::ContentTooShort));
    }

    #[test]
    fn violations_are_cumulative_and_ordered() {
        let errors = validate_submission(&fields("short", false));
        assert_eq!(errors, vec![Violation::ContentTooShort, Violation::TermsNotAccepted]);
    }

    #[test]
    fn terms_only() {
        let errors = validate_submission(&fields(&"y".repeat(30), false));
        assert_eq!(errors, vec![Violation::TermsNotAccepted]);
        assert_eq!(errors[0].message(), "You must agree to the terms and conditions");
    }

    #[test]
    fn valid_submission_has_no_errors() {
        assert!(validate_submission(&fields(&"y".repeat(30), true)).is_empty());
    }
}
