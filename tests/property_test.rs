//! Property tests for the length threshold, the submission counter and the
//! JSON round trip of submission records.

mod common;

use blogform::handler::{SubmitEvent, SubmitOutcome};
use blogform::record::SubmissionRecord;
use blogform::validate::{self, Violation};
use common::*;
use proptest::prelude::*;

proptest! {
    #[test]
    fn record_roundtrip_preserves_all_fields(
        title in any::<String>(),
        author in any::<String>(),
        email in any::<String>(),
        content in any::<String>(),
        category in any::<String>(),
        terms_accepted in any::<bool>(),
    ) {
        let record = SubmissionRecord { title, author, email, content, category, terms_accepted };
        let json = record.to_json().expect("serialize");
        let back = SubmissionRecord::from_json(&json).expect("deserialize");
        prop_assert_eq!(back, record);
    }

    #[test]
    fn short_content_always_rejected(content in "[a-zA-Z0-9 .,!?]{0,25}") {
        prop_assert_eq!(validate::validate_content(&content), Some(Violation::ContentTooShort));

        let mut h = installed(filled_form(&content, true));
        let outcome = h.handle_submit(&mut SubmitEvent::new()).expect("submit");
        match outcome {
            SubmitOutcome::Rejected(errors) => {
                prop_assert!(errors.contains(&Violation::ContentTooShort));
            }
            SubmitOutcome::Accepted(_) => {
                prop_assert!(false, "accepted {:?}", content);
            }
        }
        prop_assert_eq!(h.submission_count(), 0);
    }

    #[test]
    fn long_content_with_terms_accepted(content in "[a-zA-Z0-9][a-zA-Z0-9 .,!?]{24,80}[a-zA-Z0-9]") {
        let mut h = installed(filled_form(&content, true));
        let outcome = h.handle_submit(&mut SubmitEvent::new()).expect("submit");
        prop_assert!(outcome.is_accepted());
        prop_assert_eq!(h.submission_count(), 1);
    }

    #[test]
    fn counter_counts_only_successes(plan in proptest::collection::vec(any::<bool>(), 1..20)) {
        let mut h = installed(valid_form());
        let mut expected = 0u64;

        for accept in plan {
            type_into(h.form_mut(), LONG_CONTENT, accept);
            let outcome = h.handle_submit(&mut SubmitEvent::new()).expect("submit");
            if accept {
                expected += 1;
                match outcome {
                    SubmitOutcome::Accepted(report) => {
                        prop_assert_eq!(report.count, expected);
                    }
                    SubmitOutcome::Rejected(errors) => {
                        prop_assert!(false, "rejected: {:?}", errors);
                    }
                }
            } else {
                prop_assert!(!outcome.is_accepted());
            }
            prop_assert_eq!(h.submission_count(), expected);
        }
    }
}
