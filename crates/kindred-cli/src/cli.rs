//! CLI command definitions and argument parsing.

use clap::{ArgAction, Parser, Subcommand};
use kindred_domain::PersonId;
use std::path::PathBuf;

/// Kindred - infer family relationships among memorial guestbook authors.
#[derive(Debug, Parser)]
#[command(name = "kindred")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Guestbook data file (JSON)
    #[arg(short, long, global = true, env = "KINDRED_DATA")]
    pub data: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (IDs only)
    Quiet,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Find deceased persons by name
    Search(SearchArgs),

    /// Show relationships deduced between the authors of a guestbook
    Mesh(MeshArgs),

    /// Show authors sharing a surname
    Groups(DeceasedArgs),

    /// Show the full node/edge graph of a guestbook
    Graph(DeceasedArgs),

    /// Explain the relationship deduced between two authors
    Explain(ExplainArgs),

    /// List the relation vocabulary
    Relations,

    /// List the deduction rules in precedence order
    Rules,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Text to match against first, last, or full name
    pub query: String,
}

/// Arguments for commands working on one guestbook.
#[derive(Debug, Parser)]
pub struct DeceasedArgs {
    /// Id of the deceased
    pub deceased: PersonId,
}

/// Arguments for the mesh command.
#[derive(Debug, Parser)]
pub struct MeshArgs {
    /// Id of the deceased
    pub deceased: PersonId,

    /// Hide deductions below this confidence (0.0-1.0)
    #[arg(long)]
    pub min_confidence: Option<f64>,
}

/// Arguments for the explain command.
#[derive(Debug, Parser)]
pub struct ExplainArgs {
    /// Id of the deceased
    pub deceased: PersonId,

    /// Id of the first author
    pub first: PersonId,

    /// Id of the second author
    pub second: PersonId,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}
