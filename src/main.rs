//! Contact Viewer CLI application
//!
//! Command-line interface for browsing a remote CSV of contact records.
//! Loads the data once, then renders filtered tables, summaries and detail cards.

use std::process;

use tracing::{info, Level};
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

use contact_viewer::cli::{
    handle_browse, handle_config, handle_show, handle_summary, Cli, Commands, GlobalArgs,
};
use contact_viewer::config::AppConfig;
use contact_viewer::errors::Result;

#[tokio::main]
async fn main() {
    let result = run().await;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Main application logic
async fn run() -> Result<()> {
    let cli = Cli::parse_args();
    let requested_level = cli.log_level();
    let Cli { global, command } = cli;

    // Config management must work even when the existing file is broken
    if let Commands::Config(args) = command {
        init_logging(&global, requested_level, None);
        return handle_config(&global, args).await;
    }

    let mut config = AppConfig::load(global.config.clone()).await?;
    global.apply_to(&mut config);
    init_logging(&global, requested_level, Some(&config.logging.level));

    info!("Contact Viewer v{} starting", env!("CARGO_PKG_VERSION"));

    match command {
        Commands::Show(args) => {
            info!("Executing show command");
            handle_show(&global, &config, args).await
        }
        Commands::Summary(args) => {
            info!("Executing summary command");
            handle_summary(&global, &config, args).await
        }
        Commands::Browse(args) => {
            info!("Executing browse command");
            handle_browse(&global, &config, args).await
        }
        Commands::Config(args) => handle_config(&global, args).await,
    }
}

/// Initialize logging from CLI flags, falling back to the configured level
fn init_logging(global: &GlobalArgs, requested: Option<Level>, configured: Option<&str>) {
    let level = match requested {
        Some(level) => level.to_string().to_lowercase(),
        None => configured.unwrap_or("warn").to_lowercase(),
    };

    let filter = EnvFilter::from_default_env();
    let filter = match format!("contact_viewer={}", level).parse() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter.add_directive(LevelFilter::WARN.into()),
    };

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(global.very_verbose)
        .init();

    if global.very_verbose {
        info!("Very verbose logging enabled");
    } else if global.verbose {
        info!("Verbose logging enabled");
    }
}
