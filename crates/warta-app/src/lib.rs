// Rust guideline compliant 2026-02-09

//! Application services for Warta.
//!
//! This crate sits between the pure workflow rules in `warta-core` and the
//! CLI. It runs the article update handler (escalation, validation, stamping
//! and a compare-and-swap commit with retry), maps failures to stable error
//! codes, and provides repository discovery, listing and response envelopes.

pub mod create;
pub mod error;
pub mod fsm;
pub mod ids;
pub mod list;
pub mod repo;
pub mod response;
pub mod time;
pub mod workflow;

pub use create::{create_article, derive_excerpt, NewArticle};
pub use error::{AppError, ErrorCode, Result};
pub use fsm::{check_transition, parse_role};
pub use ids::resolve_article_id;
pub use list::{list_articles, parse_sort_field, parse_status, ListOptions};
pub use repo::RepoContext;
pub use response::{ErrorEnvelope, SuccessEnvelope};
pub use time::{format_timestamp, parse_timestamp};
pub use workflow::{plan_transition, Actor, TransitionPlan, TransitionRequest, TransitionService};
