// Rust guideline compliant 2026-02-06

//! Warta Core Library
//!
//! This crate provides the foundational components for the Warta article
//! publication workflow:
//! - Data models (Article, ArticleStatus, ActorRole, ReviewStamps)
//! - Transition table and validator (which moves exist, who may make them)
//! - Side-effect policy (reviewer, timestamps, rejection notes)
//! - Reachability analysis over the transition table
//! - JSONL article storage with compare-and-swap writes
//! - Configuration, hash ID generation and error types

pub mod config;
pub mod error;
pub mod fsm;
pub mod graph;
pub mod identity;
pub mod models;
pub mod policy;
pub mod storage;
pub mod table;

pub use config::{Config, OutputFormat};
pub use error::{Error, Result};
pub use fsm::{validate, validate_raw, Denial, TransitionDecision};
pub use graph::TransitionGraph;
pub use models::{ActorRole, Article, ArticleStatus, ReviewStamps};
pub use policy::{apply_side_effects, resolve_effective_target, StampOutcome, StatusChange};
pub use storage::{ArticleStore, MemoryStore, Storage};
pub use table::{standard_table, TransitionRule, TransitionTable, TransitionTableBuilder};
