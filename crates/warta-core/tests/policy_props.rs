// Rust guideline compliant 2026-02-06

//! Property-based tests for the side-effect policy.
//!
//! Each case runs the full admitted-transition sequence (escalation,
//! validation, stamping) on arbitrary inputs.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use warta_core::{
    apply_side_effects, resolve_effective_target, standard_table, validate, ActorRole,
    ArticleStatus, Error, ReviewStamps, StatusChange,
};

fn arb_status() -> impl Strategy<Value = ArticleStatus> {
    prop::sample::select(ArticleStatus::ALL.to_vec())
}

fn arb_role() -> impl Strategy<Value = ActorRole> {
    prop::sample::select(ActorRole::ALL.to_vec())
}

fn arb_time() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..10_000_000).prop_map(|secs| {
        Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap() + Duration::seconds(secs)
    })
}

fn arb_stamps() -> impl Strategy<Value = ReviewStamps> {
    (
        proptest::option::of("[A-Z][a-z]{2,8}"),
        proptest::option::of(arb_time()),
        proptest::option::of(arb_time()),
        proptest::option::of("[a-z ]{1,20}"),
    )
        .prop_map(|(reviewed_by, reviewed_at, published_at, rejection_note)| ReviewStamps {
            reviewed_by,
            reviewed_at,
            published_at,
            rejection_note,
        })
}

fn arb_reason() -> impl Strategy<Value = Option<String>> {
    proptest::option::of("[ a-zA-Z]{0,24}")
}

proptest! {
    /// Running the same admitted transition a second time changes nothing.
    #[test]
    fn prop_second_application_is_noop(
        prior in arb_status(),
        requested in arb_status(),
        role in arb_role(),
        stamps in arb_stamps(),
        reason in arb_reason(),
        override_at in proptest::option::of(arb_time()),
        now in arb_time(),
    ) {
        let table = standard_table();
        let target = resolve_effective_target(requested, role);
        prop_assume!(validate(table, prior, target, role).is_admitted());

        let first = StatusChange::new(prior, target, "Editor", now)
            .with_rejection_reason(reason.as_deref())
            .with_published_at(override_at);
        let Ok(once) = apply_side_effects(&stamps, &first) else {
            return Ok(());
        };

        prop_assert!(validate(table, target, target, role).is_admitted());
        let later = now + Duration::minutes(5);
        let second = StatusChange::new(target, target, "Someone Else", later)
            .with_rejection_reason(reason.as_deref())
            .with_published_at(override_at);
        let twice = apply_side_effects(&once.stamps, &second);
        prop_assert!(twice.is_ok());
        prop_assert_eq!(twice.unwrap().stamps, once.stamps);
    }

    /// Missing reasons fail before any stamping, whatever the prior stamps.
    #[test]
    fn prop_rejection_without_reason_never_stamps(
        prior in arb_status(),
        stamps in arb_stamps(),
        blank in "[ \t]{0,4}",
        now in arb_time(),
    ) {
        prop_assume!(prior != ArticleStatus::Rejected);
        let reason = if blank.is_empty() { None } else { Some(blank.as_str()) };
        let change = StatusChange::new(prior, ArticleStatus::Rejected, "Editor", now)
            .with_rejection_reason(reason);
        let result = apply_side_effects(&stamps, &change);
        prop_assert!(matches!(result, Err(Error::RejectionReasonRequired)));
    }

    /// Writers never cause a publication stamp.
    #[test]
    fn prop_writer_never_stamps_publication(
        prior in arb_status(),
        requested in arb_status(),
        stamps in arb_stamps(),
        now in arb_time(),
    ) {
        let role = ActorRole::Writer;
        let target = resolve_effective_target(requested, role);
        prop_assert_ne!(target, ArticleStatus::Published);
        prop_assume!(validate(standard_table(), prior, target, role).is_admitted());

        let change = StatusChange::new(prior, target, "Writer", now);
        if let Ok(outcome) = apply_side_effects(&stamps, &change) {
            prop_assert_eq!(outcome.stamps.published_at, stamps.published_at);
            prop_assert!(!outcome.applied.contains(&"stamp_publication"));
        }
    }

    /// Leaving `rejected` for draft or review always clears the note.
    #[test]
    fn prop_leaving_rejection_clears_note(
        to_review in any::<bool>(),
        stamps in arb_stamps(),
        now in arb_time(),
    ) {
        let target = if to_review { ArticleStatus::PendingReview } else { ArticleStatus::Draft };
        let change = StatusChange::new(ArticleStatus::Rejected, target, "Editor", now);
        let outcome = apply_side_effects(&stamps, &change).unwrap();
        prop_assert_eq!(outcome.stamps.rejection_note, None);
        prop_assert_eq!(outcome.stamps.reviewed_by, stamps.reviewed_by);
        prop_assert_eq!(outcome.stamps.reviewed_at, stamps.reviewed_at);
    }
}
