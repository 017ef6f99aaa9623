// Rust guideline compliant 2026-02-06

//! Graph view of a transition table.
//!
//! Builds a directed graph with one node per status and one edge per
//! declared move, for questions the table alone answers awkwardly: which
//! statuses an article can eventually reach, and which statuses no
//! transition ever leads into.

use crate::models::{ActorRole, ArticleStatus};
use crate::table::TransitionTable;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Dfs, EdgeRef};
use petgraph::Direction;
use std::collections::HashMap;

/// Directed graph of statuses, with the allowed roles on each edge.
pub struct TransitionGraph {
    graph: DiGraph<ArticleStatus, Vec<ActorRole>>,
    nodes: HashMap<ArticleStatus, NodeIndex>,
}

impl TransitionGraph {
    /// Builds the graph for a table.
    ///
    /// Every status gets a node, whether or not the table mentions it.
    pub fn from_table(table: &TransitionTable) -> Self {
        let mut graph = DiGraph::new();
        let mut nodes = HashMap::new();

        for status in ArticleStatus::ALL {
            nodes.insert(status, graph.add_node(status));
        }

        for (from, to, roles) in table.transition_pairs() {
            if from == to {
                continue;
            }
            graph.add_edge(nodes[&from], nodes[&to], roles);
        }

        Self { graph, nodes }
    }

    /// Returns the statuses reachable from `from` through one or more moves,
    /// in ascending order. `from` itself is included only if a cycle leads
    /// back to it.
    pub fn reachable_from(&self, from: ArticleStatus) -> Vec<ArticleStatus> {
        self.reachable_with(from, |_| true)
    }

    /// Like [`reachable_from`](Self::reachable_from), but only follows moves
    /// `role` is allowed to make.
    pub fn reachable_by(&self, from: ArticleStatus, role: ActorRole) -> Vec<ArticleStatus> {
        self.reachable_with(from, |roles| roles.contains(&role))
    }

    fn reachable_with<F>(&self, from: ArticleStatus, allowed: F) -> Vec<ArticleStatus>
    where
        F: Fn(&[ActorRole]) -> bool,
    {
        let filtered = self
            .graph
            .filter_map(|_, status| Some(*status), |_, roles| {
                allowed(roles).then(|| roles.clone())
            });

        let start = self.nodes[&from];
        let mut reached = Vec::new();
        for edge in filtered.edges(start) {
            let mut dfs = Dfs::new(&filtered, edge.target());
            while let Some(node) = dfs.next(&filtered) {
                reached.push(filtered[node]);
            }
        }

        reached.sort();
        reached.dedup();
        reached
    }

    /// Returns the statuses that no move leads into.
    ///
    /// Articles can only hold these statuses by being created in them.
    pub fn unreachable_statuses(&self) -> Vec<ArticleStatus> {
        let mut statuses: Vec<ArticleStatus> = self
            .graph
            .node_indices()
            .filter(|node| {
                self.graph
                    .neighbors_directed(*node, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .map(|node| self.graph[node])
            .collect();
        statuses.sort();
        statuses
    }

    /// Returns the statuses with no outgoing move.
    pub fn terminal_statuses(&self) -> Vec<ArticleStatus> {
        let mut statuses: Vec<ArticleStatus> = self
            .graph
            .node_indices()
            .filter(|node| {
                self.graph
                    .neighbors_directed(*node, Direction::Outgoing)
                    .next()
                    .is_none()
            })
            .map(|node| self.graph[node])
            .collect();
        statuses.sort();
        statuses
    }

    /// Number of declared moves.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }
}
