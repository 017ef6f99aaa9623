// Rust guideline compliant 2026-02-06

//! Transition table for the article publication workflow.
//!
//! The table declares which destinations are reachable from each source
//! status and which roles may make each move. It is plain immutable data:
//! the validator takes it by reference, so tests can build alternate tables
//! with [`TransitionTable::builder`] without touching shared state.
//!
//! The standard table:
//!
//! | From | To | Roles |
//! |---|---|---|
//! | draft | pending_review | WRITER, ADMIN |
//! | draft | published | ADMIN |
//! | pending_review | published | ADMIN |
//! | pending_review | rejected | ADMIN |
//! | pending_review | draft | ADMIN |
//! | rejected | draft | WRITER, ADMIN |
//! | rejected | pending_review | WRITER, ADMIN |
//! | published | archived | WRITER, ADMIN |
//! | published | draft | ADMIN |
//! | archived | draft | ADMIN |
//! | scheduled | draft | WRITER, ADMIN |
//! | scheduled | published | ADMIN |

use crate::models::{ActorRole, ArticleStatus};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::OnceLock;

use ActorRole::{Admin, Writer};
use ArticleStatus::{Archived, Draft, PendingReview, Published, Rejected, Scheduled};

/// A group of destinations sharing the same allowed roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionRule {
    destinations: BTreeSet<ArticleStatus>,
    allowed_roles: BTreeSet<ActorRole>,
}

impl TransitionRule {
    /// Creates a rule from destination and role lists.
    pub fn new(destinations: &[ArticleStatus], allowed_roles: &[ActorRole]) -> Self {
        Self {
            destinations: destinations.iter().copied().collect(),
            allowed_roles: allowed_roles.iter().copied().collect(),
        }
    }

    /// Returns true if `status` is one of this rule's destinations.
    #[must_use]
    pub fn leads_to(&self, status: ArticleStatus) -> bool {
        self.destinations.contains(&status)
    }

    /// Returns true if `role` may take this rule's moves.
    #[must_use]
    pub fn permits(&self, role: ActorRole) -> bool {
        self.allowed_roles.contains(&role)
    }

    /// Destinations covered by this rule.
    pub fn destinations(&self) -> impl Iterator<Item = ArticleStatus> + '_ {
        self.destinations.iter().copied()
    }

    /// Roles allowed to take this rule's moves.
    pub fn allowed_roles(&self) -> impl Iterator<Item = ActorRole> + '_ {
        self.allowed_roles.iter().copied()
    }
}

/// Immutable mapping from source status to its transition rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    rules: BTreeMap<ArticleStatus, Vec<TransitionRule>>,
}

impl TransitionTable {
    /// Builds the standard publication workflow table.
    ///
    /// Every status has an entry, so a lookup for any [`ArticleStatus`]
    /// succeeds (possibly with no rules).
    pub fn standard() -> Self {
        Self::builder()
            .rule(Draft, &[PendingReview], &[Writer, Admin])
            .rule(Draft, &[Published], &[Admin])
            .rule(PendingReview, &[Published, Rejected, Draft], &[Admin])
            .rule(Rejected, &[Draft, PendingReview], &[Writer, Admin])
            .rule(Published, &[Archived], &[Writer, Admin])
            .rule(Published, &[Draft], &[Admin])
            .rule(Archived, &[Draft], &[Admin])
            .rule(Scheduled, &[Draft], &[Writer, Admin])
            .rule(Scheduled, &[Published], &[Admin])
            .total()
            .build()
    }

    /// Starts an empty table builder.
    pub fn builder() -> TransitionTableBuilder {
        TransitionTableBuilder::default()
    }

    /// Returns the rules declared for `from`, or `None` if the table has no
    /// entry for it.
    #[must_use]
    pub fn rules_for(&self, from: ArticleStatus) -> Option<&[TransitionRule]> {
        self.rules.get(&from).map(Vec::as_slice)
    }

    /// Returns the first rule for `from` that leads to `to`.
    #[must_use]
    pub fn rule_for(&self, from: ArticleStatus, to: ArticleStatus) -> Option<&TransitionRule> {
        self.rules_for(from)?.iter().find(|rule| rule.leads_to(to))
    }

    /// Returns true if the table has an entry for every status.
    #[must_use]
    pub fn is_total(&self) -> bool {
        ArticleStatus::ALL
            .iter()
            .all(|status| self.rules.contains_key(status))
    }

    /// Returns the destinations `role` may move to from `from`.
    ///
    /// The self-transition is not listed; it is always admitted separately.
    pub fn destinations(&self, from: ArticleStatus, role: ActorRole) -> Vec<ArticleStatus> {
        let mut targets: Vec<ArticleStatus> = self
            .rules_for(from)
            .unwrap_or_default()
            .iter()
            .filter(|rule| rule.permits(role))
            .flat_map(|rule| rule.destinations())
            .filter(|to| *to != from)
            .collect();
        targets.sort();
        targets.dedup();
        targets
    }

    /// Returns every `(from, to, roles)` row of the table.
    ///
    /// Rows are ordered by source, then by declaration order of the rules.
    pub fn transition_pairs(&self) -> Vec<(ArticleStatus, ArticleStatus, Vec<ActorRole>)> {
        self.rules
            .iter()
            .flat_map(|(from, rules)| {
                rules.iter().flat_map(move |rule| {
                    rule.destinations()
                        .map(move |to| (*from, to, rule.allowed_roles().collect()))
                })
            })
            .collect()
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Incremental constructor for [`TransitionTable`].
#[derive(Debug, Default)]
pub struct TransitionTableBuilder {
    rules: BTreeMap<ArticleStatus, Vec<TransitionRule>>,
}

impl TransitionTableBuilder {
    /// Declares an entry for `from` without adding any rule.
    #[must_use]
    pub fn source(mut self, from: ArticleStatus) -> Self {
        self.rules.entry(from).or_default();
        self
    }

    /// Adds a rule for `from`.
    #[must_use]
    pub fn rule(
        mut self,
        from: ArticleStatus,
        destinations: &[ArticleStatus],
        allowed_roles: &[ActorRole],
    ) -> Self {
        self.rules
            .entry(from)
            .or_default()
            .push(TransitionRule::new(destinations, allowed_roles));
        self
    }

    /// Declares an empty entry for every status that has none yet.
    #[must_use]
    pub fn total(mut self) -> Self {
        for status in ArticleStatus::ALL {
            self.rules.entry(status).or_default();
        }
        self
    }

    /// Finishes the table.
    pub fn build(self) -> TransitionTable {
        TransitionTable { rules: self.rules }
    }
}

/// Returns the shared standard table.
pub fn standard_table() -> &'static TransitionTable {
    static TABLE: OnceLock<TransitionTable> = OnceLock::new();
    TABLE.get_or_init(TransitionTable::standard)
}
