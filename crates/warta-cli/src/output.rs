// Rust guideline compliant 2026-02-06

//! Output formatting module for the Warta CLI.
//!
//! This module provides functionality for formatting articles, transition
//! results and workflow tables in various output formats (JSON, table, plain
//! text).

use serde::Serialize;
use serde_json::json;
use tabled::{builder::Builder, settings::Style};
use warta_app::{format_timestamp, AppError, ErrorEnvelope, TransitionPlan};
use warta_core::{
    ActorRole, Article, ArticleStatus, OutputFormat, TransitionDecision, TransitionTable,
};

/// Reachability summary printed by `warta graph`.
#[derive(Debug, Clone, Serialize)]
pub struct GraphReport {
    /// Start status, when one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<ArticleStatus>,
    /// Role the reachability was restricted to, when one was given.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ActorRole>,
    /// Statuses reachable from `from` (empty when no start was given).
    pub reachable: Vec<ArticleStatus>,
    /// Statuses that are never the destination of any transition.
    pub unreachable: Vec<ArticleStatus>,
    /// Statuses with no outgoing transitions.
    pub terminal: Vec<ArticleStatus>,
}

/// Output formatter trait.
///
/// Defines the interface for formatting Warta data in different output formats.
pub trait OutputFormatter {
    /// Formats a single article for display.
    fn format_article(&self, article: &Article) -> String;

    /// Formats a list of articles for display.
    fn format_list(&self, articles: &[Article]) -> String;

    /// Formats a committed status change.
    fn format_transition(&self, plan: &TransitionPlan) -> String;

    /// Formats a dry-run validator decision.
    fn format_decision(
        &self,
        from: &str,
        to: &str,
        role: ActorRole,
        decision: &TransitionDecision,
    ) -> String;

    /// Formats the transition table.
    fn format_table(&self, table: &TransitionTable) -> String;

    /// Formats a reachability report.
    fn format_graph(&self, report: &GraphReport) -> String;

    /// Formats a short confirmation message.
    fn format_message(&self, message: &str) -> String;

    /// Formats an error for display.
    fn format_error(&self, error: &anyhow::Error) -> String;
}

fn roles_text(roles: &[ActorRole]) -> String {
    roles
        .iter()
        .map(ActorRole::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn statuses_text(statuses: &[ArticleStatus]) -> String {
    if statuses.is_empty() {
        return "-".to_string();
    }
    statuses
        .iter()
        .map(ArticleStatus::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

fn optional_time(value: Option<&chrono::DateTime<chrono::Utc>>) -> String {
    value.map_or_else(|| "-".to_string(), format_timestamp)
}

/// JSON output formatter.
///
/// Formats output as valid JSON for machine consumption.
pub struct JsonFormatter;

impl JsonFormatter {
    fn render(value: &serde_json::Value) -> String {
        serde_json::to_string_pretty(value)
            .unwrap_or_else(|_| json!({ "error": "Failed to serialize output" }).to_string())
    }

    fn envelope(error: &anyhow::Error) -> Option<ErrorEnvelope> {
        error.downcast_ref::<AppError>().map(ErrorEnvelope::from_error)
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_article(&self, article: &Article) -> String {
        Self::render(&json!(article))
    }

    fn format_list(&self, articles: &[Article]) -> String {
        Self::render(&json!({
            "articles": articles,
            "total": articles.len(),
        }))
    }

    fn format_transition(&self, plan: &TransitionPlan) -> String {
        Self::render(&json!({
            "article": plan.article,
            "prior": plan.prior,
            "requested": plan.requested,
            "effective": plan.effective,
            "escalated": plan.was_escalated(),
            "applied_rules": plan.applied_rules,
        }))
    }

    fn format_decision(
        &self,
        from: &str,
        to: &str,
        role: ActorRole,
        decision: &TransitionDecision,
    ) -> String {
        let mut value = json!({
            "from": from,
            "to": to,
            "role": role,
            "admitted": decision.is_admitted(),
        });
        if let Some(denial) = decision.denial() {
            value["denial"] = json!(denial);
            value["message"] = json!(denial.to_string());
        }
        Self::render(&value)
    }

    fn format_table(&self, table: &TransitionTable) -> String {
        let rows: Vec<_> = table
            .transition_pairs()
            .into_iter()
            .map(|(from, to, roles)| json!({ "from": from, "to": to, "roles": roles }))
            .collect();
        Self::render(&json!({ "transitions": rows, "total": rows.len() }))
    }

    fn format_graph(&self, report: &GraphReport) -> String {
        Self::render(&json!(report))
    }

    fn format_message(&self, message: &str) -> String {
        Self::render(&json!({ "status": "ok", "message": message }))
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        match Self::envelope(error) {
            Some(envelope) => Self::render(&json!({ "error": envelope })),
            None => Self::render(&json!({ "error": { "message": error.to_string() } })),
        }
    }
}

/// Table output formatter.
///
/// Formats output as human-readable tables.
pub struct TableFormatter;

impl OutputFormatter for TableFormatter {
    fn format_article(&self, article: &Article) -> String {
        let mut output = String::new();

        output.push_str(&format!("ID:          {}\n", article.id));
        output.push_str(&format!("Title:       {}\n", article.title));
        output.push_str(&format!("Slug:        {}\n", article.slug));
        output.push_str(&format!("Status:      {}\n", article.status));
        output.push_str(&format!("Author:      {}\n", article.author));
        output.push_str(&format!("Created:     {}\n", format_timestamp(&article.created_at)));
        output.push_str(&format!("Updated:     {}\n", format_timestamp(&article.updated_at)));
        output.push_str(&format!("Version:     {}\n", article.version));

        let review = &article.review;
        if let Some(reviewer) = &review.reviewed_by {
            output.push_str(&format!(
                "Reviewed:    {} at {}\n",
                reviewer,
                optional_time(review.reviewed_at.as_ref())
            ));
        }
        if let Some(published_at) = &review.published_at {
            let label = if article.status == ArticleStatus::Scheduled {
                "Scheduled:  "
            } else {
                "Published:  "
            };
            output.push_str(&format!("{} {}\n", label, format_timestamp(published_at)));
        }
        if let Some(note) = &review.rejection_note {
            output.push_str(&format!("Rejection:   {}\n", note));
        }
        if !article.excerpt.is_empty() {
            output.push_str(&format!("Excerpt:     {}\n", article.excerpt));
        }

        output
    }

    fn format_list(&self, articles: &[Article]) -> String {
        if articles.is_empty() {
            return "No articles found.".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(vec!["ID", "Status", "Title", "Author", "Updated"]);

        for article in articles {
            builder.push_record(vec![
                article.id.clone(),
                article.status.to_string(),
                article.title.clone(),
                article.author.clone(),
                format_timestamp(&article.updated_at),
            ]);
        }

        let mut table = builder.build();
        table.with(Style::modern());

        table.to_string()
    }

    fn format_transition(&self, plan: &TransitionPlan) -> String {
        let mut output = format!(
            "{}: {} -> {} (version {})\n",
            plan.article.id, plan.prior, plan.effective, plan.article.version
        );
        if plan.was_escalated() {
            output.push_str(&format!(
                "Requested {} was submitted for review instead.\n",
                plan.requested
            ));
        }
        if !plan.applied_rules.is_empty() {
            output.push_str(&format!("Applied: {}\n", plan.applied_rules.join(", ")));
        }
        output
    }

    fn format_decision(
        &self,
        from: &str,
        to: &str,
        role: ActorRole,
        decision: &TransitionDecision,
    ) -> String {
        match decision.reason() {
            None => format!("ADMITTED  {} -> {} as {}", from, to, role),
            Some(reason) => format!("DENIED    {} -> {} as {}: {}", from, to, role, reason),
        }
    }

    fn format_table(&self, table: &TransitionTable) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["From", "To", "Roles"]);

        for (from, to, roles) in table.transition_pairs() {
            builder.push_record(vec![from.to_string(), to.to_string(), roles_text(&roles)]);
        }

        let mut rendered = builder.build();
        rendered.with(Style::modern());
        rendered.to_string()
    }

    fn format_graph(&self, report: &GraphReport) -> String {
        let mut builder = Builder::default();
        builder.push_record(vec!["Property", "Statuses"]);
        if let Some(from) = report.from {
            let label = match report.role {
                Some(role) => format!("Reachable from {} as {}", from, role),
                None => format!("Reachable from {}", from),
            };
            builder.push_record(vec![label, statuses_text(&report.reachable)]);
        }
        builder.push_record(vec![
            "Never a destination".to_string(),
            statuses_text(&report.unreachable),
        ]);
        builder.push_record(vec![
            "No way out".to_string(),
            statuses_text(&report.terminal),
        ]);

        let mut rendered = builder.build();
        rendered.with(Style::modern());
        rendered.to_string()
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {}", error)
    }
}

/// Plain text output formatter.
///
/// Formats output as simple plain text, one record per line.
pub struct PlainFormatter;

impl OutputFormatter for PlainFormatter {
    fn format_article(&self, article: &Article) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", article.id));
        output.push_str(&format!("{}\n", article.title));
        output.push_str(&format!("{}\n", article.status));
        output.push_str(&format!("{}\n", article.author));

        if !article.content.is_empty() {
            output.push_str(&format!("{}\n", article.content));
        }

        output
    }

    fn format_list(&self, articles: &[Article]) -> String {
        if articles.is_empty() {
            return "No articles found.".to_string();
        }

        let mut output = String::new();
        for article in articles {
            output.push_str(&format!(
                "{} {} {}\n",
                article.id, article.status, article.title
            ));
        }
        output
    }

    fn format_transition(&self, plan: &TransitionPlan) -> String {
        format!("{} {} {}\n", plan.article.id, plan.prior, plan.effective)
    }

    fn format_decision(
        &self,
        _from: &str,
        _to: &str,
        _role: ActorRole,
        decision: &TransitionDecision,
    ) -> String {
        decision
            .reason()
            .map_or_else(|| "admitted".to_string(), |reason| format!("denied: {}", reason))
    }

    fn format_table(&self, table: &TransitionTable) -> String {
        let mut output = String::new();
        for (from, to, roles) in table.transition_pairs() {
            output.push_str(&format!("{} {} {}\n", from, to, roles_text(&roles)));
        }
        output
    }

    fn format_graph(&self, report: &GraphReport) -> String {
        let mut output = String::new();
        if report.from.is_some() {
            output.push_str(&format!("reachable {}\n", statuses_text(&report.reachable)));
        }
        output.push_str(&format!("unreachable {}\n", statuses_text(&report.unreachable)));
        output.push_str(&format!("terminal {}\n", statuses_text(&report.terminal)));
        output
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }

    fn format_error(&self, error: &anyhow::Error) -> String {
        format!("Error: {}", error)
    }
}

/// Factory function to create an appropriate formatter.
///
/// # Arguments
/// * `format` - The desired output format
///
/// # Returns
/// A boxed OutputFormatter instance
pub fn create_formatter(format: OutputFormat) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Plain => Box::new(PlainFormatter),
    }
}
