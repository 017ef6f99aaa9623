// Rust guideline compliant 2026-02-06

//! Tests for reachability analysis over transition tables.

use warta_core::{ActorRole, ArticleStatus, TransitionGraph, TransitionTable};

use ArticleStatus::{Archived, Draft, PendingReview, Published, Rejected, Scheduled};

#[test]
fn test_graph_has_one_edge_per_row() {
    let graph = TransitionGraph::from_table(&TransitionTable::standard());
    assert_eq!(graph.edge_count(), 12);
}

#[test]
fn test_scheduled_is_only_unreachable_status() {
    let graph = TransitionGraph::from_table(&TransitionTable::standard());
    assert_eq!(graph.unreachable_statuses(), vec![Scheduled]);
}

#[test]
fn test_standard_table_has_no_terminal_status() {
    let graph = TransitionGraph::from_table(&TransitionTable::standard());
    assert!(graph.terminal_statuses().is_empty());
}

#[test]
fn test_everything_but_scheduled_reachable_from_draft() {
    let graph = TransitionGraph::from_table(&TransitionTable::standard());
    assert_eq!(
        graph.reachable_from(Draft),
        vec![Draft, PendingReview, Published, Rejected, Archived]
    );
}

#[test]
fn test_scheduled_can_reach_whole_cycle() {
    let graph = TransitionGraph::from_table(&TransitionTable::standard());
    let reached = graph.reachable_from(Scheduled);
    assert!(!reached.contains(&Scheduled));
    assert!(reached.contains(&Archived));
}

#[test]
fn test_writer_reachability_from_draft() {
    let graph = TransitionGraph::from_table(&TransitionTable::standard());
    // Writers can submit but never approve, so nothing beyond review.
    assert_eq!(graph.reachable_by(Draft, ActorRole::Writer), vec![PendingReview]);
}

#[test]
fn test_writer_reachability_from_rejected() {
    let graph = TransitionGraph::from_table(&TransitionTable::standard());
    // Resubmission is possible, but nothing leads back into `rejected`.
    assert_eq!(
        graph.reachable_by(Rejected, ActorRole::Writer),
        vec![Draft, PendingReview]
    );
}

#[test]
fn test_reader_reaches_nothing() {
    let graph = TransitionGraph::from_table(&TransitionTable::standard());
    for status in ArticleStatus::ALL {
        assert!(graph.reachable_by(status, ActorRole::Reader).is_empty());
    }
}

#[test]
fn test_empty_table_leaves_every_status_unreachable_and_terminal() {
    let graph = TransitionGraph::from_table(&TransitionTable::builder().total().build());
    assert_eq!(graph.unreachable_statuses().len(), ArticleStatus::ALL.len());
    assert_eq!(graph.terminal_statuses().len(), ArticleStatus::ALL.len());
    assert_eq!(graph.edge_count(), 0);
}
