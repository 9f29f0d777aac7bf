//! Command-line argument parsing for Contact Viewer
//!
//! This module defines the CLI structure using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::app::Field;
use crate::config::AppConfig;

/// Contact Viewer - browse a CSV of contact records
#[derive(Parser, Debug)]
#[command(
    name = "contact_viewer",
    version,
    about = "Fetch a CSV of contacts and browse it as a filterable table",
    long_about = "Fetches a remote CSV of contact records once, then shows a filterable table,
per-attribute summaries and single-contact detail cards. If loading fails, a
placeholder row is shown together with the reason."
)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all subcommands
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Very verbose logging (debug level)
    #[arg(long, global = true)]
    pub very_verbose: bool,

    /// Quiet mode - suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// CSV URL to fetch instead of the configured one
    #[arg(long, global = true, value_name = "URL", conflicts_with = "file")]
    pub url: Option<String>,

    /// Read contacts from a local CSV file instead of fetching
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the contact table, optionally filtered
    Show(ShowArgs),

    /// Show counts grouped by one field
    Summary(SummaryArgs),

    /// Browse interactively: type to filter, ':help' for commands
    Browse(BrowseArgs),

    /// Manage the configuration file
    Config(ConfigArgs),
}

/// Output format for `show` and `summary`
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Table,
    /// JSON on stdout
    Json,
}

/// Arguments for the show command
#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// Field to search (e.g. "state", "company_name")
    #[arg(short, long)]
    pub field: Option<Field>,

    /// Case-insensitive substring to look for in the field
    #[arg(short = 's', long)]
    pub query: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments for the summary command
#[derive(Args, Debug, Clone)]
pub struct SummaryArgs {
    /// Field to group by
    #[arg(short, long)]
    pub by: Option<Field>,

    /// Hide the percentage badges
    #[arg(long)]
    pub no_badges: bool,

    /// Hide the proportion chart
    #[arg(long)]
    pub no_chart: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

/// Arguments for the browse command
#[derive(Args, Debug, Clone)]
pub struct BrowseArgs {
    /// Field to search initially
    #[arg(short, long)]
    pub field: Option<Field>,

    /// Field to group the summary by initially
    #[arg(short, long)]
    pub by: Option<Field>,
}

/// Arguments for configuration management
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Write a commented default configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Print the effective configuration
    Show,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the logging level requested by flags, if any
    pub fn log_level(&self) -> Option<tracing::Level> {
        if self.global.quiet {
            Some(tracing::Level::ERROR)
        } else if self.global.very_verbose {
            Some(tracing::Level::DEBUG)
        } else if self.global.verbose {
            Some(tracing::Level::INFO)
        } else {
            None
        }
    }
}

impl GlobalArgs {
    /// Apply command-line overrides on top of file configuration
    pub fn apply_to(&self, config: &mut AppConfig) {
        if let Some(ref url) = self.url {
            config.source.url = url.clone();
            config.source.file = None;
        }
        if let Some(ref file) = self.file {
            config.source.file = Some(file.clone());
        }
        if self.no_color {
            config.display.color = false;
        }
    }
}
