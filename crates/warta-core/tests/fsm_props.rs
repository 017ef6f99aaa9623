// Rust guideline compliant 2026-02-06

//! Property-based tests for the transition validator.
//!
//! These tests validate properties that hold for every status pair and
//! role under the standard table.

use proptest::prelude::*;
use warta_core::{standard_table, validate, ActorRole, ArticleStatus, Denial};

/// Generates arbitrary ArticleStatus values.
fn arb_status() -> impl Strategy<Value = ArticleStatus> {
    prop::sample::select(ArticleStatus::ALL.to_vec())
}

/// Generates arbitrary ActorRole values.
fn arb_role() -> impl Strategy<Value = ActorRole> {
    prop::sample::select(ActorRole::ALL.to_vec())
}

fn in_table(from: ArticleStatus, to: ArticleStatus) -> bool {
    standard_table().rule_for(from, to).is_some()
}

proptest! {
    /// Self-transition is always legal, for every role.
    #[test]
    fn prop_self_transition_always_admitted(status in arb_status(), role in arb_role()) {
        prop_assert!(validate(standard_table(), status, status, role).is_admitted());
    }

    /// Privilege never bypasses path existence.
    #[test]
    fn prop_missing_path_denied_even_for_admin(from in arb_status(), to in arb_status()) {
        prop_assume!(from != to && !in_table(from, to));
        let decision = validate(standard_table(), from, to, ActorRole::Admin);
        let is_no_such_path = matches!(decision.denial(), Some(Denial::NoSuchPath { .. }));
        prop_assert!(is_no_such_path, "expected no-such-path for {} -> {}, got {:?}", from, to, decision);
    }

    /// For pairs in the table, the decision depends only on role membership.
    #[test]
    fn prop_existing_path_gated_by_role(from in arb_status(), to in arb_status(), role in arb_role()) {
        prop_assume!(from != to);
        let rule = standard_table().rule_for(from, to);
        prop_assume!(rule.is_some());
        let permitted = rule.map_or(false, |rule| rule.permits(role));

        let decision = validate(standard_table(), from, to, role);
        if permitted {
            prop_assert!(decision.is_admitted());
        } else {
            let is_role_denial = matches!(decision.denial(), Some(Denial::RoleNotPermitted { .. }));
            prop_assert!(is_role_denial, "expected role denial for {} -> {} as {}", from, to, role);
        }
    }

    /// READER can only ever make the no-op move.
    #[test]
    fn prop_reader_never_moves(from in arb_status(), to in arb_status()) {
        let admitted = validate(standard_table(), from, to, ActorRole::Reader).is_admitted();
        prop_assert_eq!(admitted, from == to);
    }

    /// Anything a writer may do, an admin may do too.
    #[test]
    fn prop_admin_dominates_writer(from in arb_status(), to in arb_status()) {
        if validate(standard_table(), from, to, ActorRole::Writer).is_admitted() {
            prop_assert!(validate(standard_table(), from, to, ActorRole::Admin).is_admitted());
        }
    }

    /// Denials always carry a non-empty reason; admissions never do.
    #[test]
    fn prop_reason_present_iff_denied(from in arb_status(), to in arb_status(), role in arb_role()) {
        let decision = validate(standard_table(), from, to, role);
        match decision.reason() {
            Some(reason) => {
                prop_assert!(!decision.is_admitted());
                prop_assert!(!reason.is_empty());
            }
            None => prop_assert!(decision.is_admitted()),
        }
    }
}
