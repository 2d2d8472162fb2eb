use clap::{Parser, Subcommand};
use std::path::PathBuf;
use viewport_audit::output::OutputFormat;

#[derive(Parser)]
#[command(
    name = "viewport-audit",
    version,
    about = "Mobile-friendliness audits over collected page artifacts"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run audits against an artifacts JSON file or a directory of them
    Check {
        /// Path to an artifacts file or a directory containing *.json files
        path: PathBuf,

        /// Output format
        #[arg(long, short, default_value = "pretty", value_enum)]
        format: OutputFormat,

        /// Write output to file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Treat diagnostics on passing audits as failures
        #[arg(long)]
        strict: bool,

        /// Custom config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List all registered audits
    ListAudits,

    /// Show full metadata for an audit
    Explain {
        /// Audit name (e.g., "viewport")
        name: String,
    },

    /// Parse viewport meta-tag content and print the result as JSON
    Parse {
        /// Raw content attribute, e.g. "width=device-width, initial-scale=1"
        content: String,
    },
}
