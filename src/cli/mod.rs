//! Command-line interface components
//!
//! This module contains CLI-specific code for the Contact Viewer application,
//! including argument parsing, terminal rendering and the interactive browser.

pub mod args;
pub mod browse;
pub mod commands;
pub mod progress;
pub mod render;

pub use args::{
    BrowseArgs, Cli, Commands, ConfigAction, ConfigArgs, GlobalArgs, OutputFormat, ShowArgs,
    SummaryArgs,
};
pub use browse::{parse_command, run_browser, BrowseCommand};
pub use commands::{handle_browse, handle_config, handle_show, handle_summary};
pub use progress::LoadingSpinner;
pub use render::Renderer;
