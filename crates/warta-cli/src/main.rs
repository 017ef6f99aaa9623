// Rust guideline compliant 2026-02-06

//! Warta CLI Application
//!
//! Command-line interface for the Warta article publication workflow.

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;
use warta_app::RepoContext;
use warta_cli::commands::{self, transition::TransitionArgs};
use warta_cli::output_mode::resolve_format;
use warta_cli::{create_formatter, logging};
use warta_core::OutputFormat as ConfigFormat;

#[derive(Parser, Debug)]
#[command(
    name = "warta",
    version,
    about = "Warta: article publication workflow",
    long_about = "Warta manages the editorial lifecycle of news articles: drafting, review, publication, rejection, scheduling and archival, gated by actor role.",
    after_help = "Examples:\n  warta init\n  warta create \"Banjir di Jakarta\" --author Rina\n  warta transition art-abc123 published --role WRITER --actor Rina\n  warta transition abc123 rejected --role ADMIN --actor Dewi --reason \"Fakta tidak terverifikasi\"\n  warta check draft archived --role ADMIN\n  warta graph --from draft\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Log debug details to stderr (overridden by WARTA_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Repository root (defaults to the current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

impl From<OutputFormat> for ConfigFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => ConfigFormat::Json,
            OutputFormat::Table => ConfigFormat::Table,
            OutputFormat::Plain => ConfigFormat::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Initialize a new Warta repository
    Init,

    /// Create a new article
    Create {
        /// Headline of the article
        title: String,

        /// Author display name
        #[arg(long)]
        author: Option<String>,

        /// Body text
        #[arg(long)]
        content: Option<String>,

        /// Start in `scheduled` for this RFC 3339 time
        #[arg(long)]
        scheduled: Option<String>,
    },

    /// Show details of an article
    Show {
        /// Article ID (full or partial)
        id: String,
    },

    /// List articles
    List {
        /// Filter by status
        #[arg(long)]
        status: Option<String>,

        /// Filter by author
        #[arg(long)]
        author: Option<String>,

        /// Only articles visible on the public site
        #[arg(long)]
        public: bool,

        /// Sort by field
        #[arg(long)]
        sort: Option<String>,
    },

    /// Move an article to a new status
    Transition {
        /// Article ID (full or partial)
        id: String,

        /// Requested status
        status: String,

        /// Acting role (ADMIN, WRITER, READER)
        #[arg(long)]
        role: String,

        /// Acting user's display name
        #[arg(long)]
        actor: String,

        /// Rejection reason (required when rejecting)
        #[arg(long)]
        reason: Option<String>,

        /// Publication time override (RFC 3339)
        #[arg(long)]
        published_at: Option<String>,
    },

    /// Check a transition without touching any article
    Check {
        /// Source status
        from: String,

        /// Destination status
        to: String,

        /// Acting role
        #[arg(long)]
        role: String,
    },

    /// Print the transition table
    Table,

    /// Report reachability over the transition table
    Graph {
        /// Start status
        #[arg(long)]
        from: Option<String>,

        /// Restrict to moves this role may make
        #[arg(long)]
        role: Option<String>,
    },
}

/// Reads the configured output format when a repository is present.
fn configured_format(root: &Path) -> ConfigFormat {
    RepoContext::discover(Some(root))
        .and_then(|repo| repo.load_config())
        .map(|config| config.output_format)
        .unwrap_or_default()
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let root = match cli.root.clone() {
        Some(root) => root,
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(err) => {
                eprintln!("Error: cannot resolve current directory: {}", err);
                return ExitCode::FAILURE;
            }
        },
    };

    let format = resolve_format(cli.format.map(Into::into), cli.json, configured_format(&root));
    let formatter = create_formatter(format);
    debug!(?format, root = %root.display(), "starting command");

    let result: anyhow::Result<(String, bool)> = match cli.command {
        Some(Commands::Init) => commands::init::execute(&root, formatter.as_ref()).map(|out| (out, true)),
        Some(Commands::Create {
            title,
            author,
            content,
            scheduled,
        }) => commands::create::execute(&root, title, author, content, scheduled, formatter.as_ref())
            .map(|out| (out, true)),
        Some(Commands::Show { id }) => {
            commands::show::execute(&root, &id, formatter.as_ref()).map(|out| (out, true))
        }
        Some(Commands::List {
            status,
            author,
            public,
            sort,
        }) => commands::list::execute(&root, status, author, public, sort, formatter.as_ref())
            .map(|out| (out, true)),
        Some(Commands::Transition {
            id,
            status,
            role,
            actor,
            reason,
            published_at,
        }) => commands::transition::execute(
            &root,
            TransitionArgs {
                id,
                status,
                role,
                actor,
                reason,
                published_at,
            },
            formatter.as_ref(),
        )
        .map(|out| (out, true)),
        Some(Commands::Check { from, to, role }) => {
            commands::check::execute(&from, &to, &role, formatter.as_ref())
        }
        Some(Commands::Table) => Ok((commands::table::execute(formatter.as_ref()), true)),
        Some(Commands::Graph { from, role }) => {
            commands::graph::execute(from.as_deref(), role.as_deref(), formatter.as_ref())
                .map(|out| (out, true))
        }
        None => Ok(("Use --help for usage information".to_string(), true)),
    };

    match result {
        Ok((output, success)) => {
            println!("{}", output.trim_end());
            if success {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            let rendered = formatter.format_error(&err);
            if format == ConfigFormat::Json {
                println!("{}", rendered);
            } else {
                eprintln!("{}", rendered);
            }
            ExitCode::FAILURE
        }
    }
}
