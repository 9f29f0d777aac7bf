//! Command handlers for Contact Viewer CLI
//!
//! This module implements the command handlers that coordinate between CLI
//! arguments, configuration and the core application functionality.

use std::io::{self, Write};

use serde::Serialize;
use tracing::info;

use crate::app::{
    load, AggregateEntry, ContactClient, FilterState, LoadOutcome, Record, Session, Toggles,
};
use crate::cli::browse::run_browser;
use crate::cli::progress::LoadingSpinner;
use crate::cli::render::Renderer;
use crate::cli::{
    BrowseArgs, ConfigAction, ConfigArgs, GlobalArgs, OutputFormat, ShowArgs, SummaryArgs,
};
use crate::config::AppConfig;
use crate::errors::Result;

/// Handle the show command
pub async fn handle_show(global: &GlobalArgs, config: &AppConfig, args: ShowArgs) -> Result<()> {
    let field = args.field.unwrap_or(config.display.search_field);
    let filter = FilterState::new(field, args.query.unwrap_or_default());
    info!("Showing contacts filtered on {} = {:?}", field, filter.query);

    let session = start_session(global, config)
        .await?
        .with_settings(filter, config.display.group_by, config.toggles());

    let mut stdout = io::stdout().lock();
    match args.format {
        OutputFormat::Table => {
            let renderer = renderer(config);
            write!(stdout, "{}", renderer.render_view(&session.view()))?;
        }
        OutputFormat::Json => {
            let view = session.view();
            let output = ShowJson {
                error: view.error.clone(),
                field: view.filter.field.as_str(),
                query: &view.filter.query,
                total: session.records().len(),
                records: &view.visible,
            };
            writeln!(stdout, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }

    Ok(())
}

/// Handle the summary command
pub async fn handle_summary(
    global: &GlobalArgs,
    config: &AppConfig,
    args: SummaryArgs,
) -> Result<()> {
    let group_by = args.by.unwrap_or(config.display.group_by);
    let toggles = Toggles {
        show_summary: config.display.show_summary && !args.no_badges,
        show_chart: config.display.show_chart && !args.no_chart,
    };
    info!("Summarizing contacts by {}", group_by);

    let session = start_session(global, config)
        .await?
        .with_settings(config.filter_state(), group_by, toggles);
    let view = session.view();

    let mut stdout = io::stdout().lock();
    match args.format {
        OutputFormat::Table => {
            let renderer = renderer(config);
            if let Some(ref error) = view.error {
                writeln!(stdout, "{}", renderer.fallback_banner(error))?;
            }
            if toggles.show_chart {
                writeln!(stdout, "{}", renderer.chart(&view.aggregate))?;
            }
            if toggles.show_summary {
                writeln!(stdout, "{}", renderer.badges(&view.aggregate))?;
            }
            if !toggles.show_chart && !toggles.show_summary {
                for (value, count) in view.aggregate.iter() {
                    writeln!(stdout, "{}\t{}", value, count)?;
                }
            }
        }
        OutputFormat::Json => {
            let output = SummaryJson {
                error: view.error.clone(),
                field: group_by.as_str(),
                total: view.aggregate.total(),
                buckets: view.aggregate.entries(),
            };
            writeln!(stdout, "{}", serde_json::to_string_pretty(&output)?)?;
        }
    }

    Ok(())
}

/// Handle the browse command
pub async fn handle_browse(
    global: &GlobalArgs,
    config: &AppConfig,
    args: BrowseArgs,
) -> Result<()> {
    let field = args.field.unwrap_or(config.display.search_field);
    let group_by = args.by.unwrap_or(config.display.group_by);

    let mut session = start_session(global, config).await?.with_settings(
        FilterState::new(field, ""),
        group_by,
        config.toggles(),
    );

    if !global.quiet {
        eprintln!("Type to filter, :help for commands, :quit to exit.");
    }

    let renderer = renderer(config);
    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = io::stdout();
    run_browser(&mut session, &renderer, stdin, &mut stdout).await?;

    // Leave the shell prompt on a fresh line after EOF
    writeln!(stdout)?;
    Ok(())
}

/// Handle the config command
pub async fn handle_config(global: &GlobalArgs, args: ConfigArgs) -> Result<()> {
    match args.action {
        ConfigAction::Init { force } => {
            let path = AppConfig::initialize(global.config.clone(), force).await?;
            if !global.quiet {
                println!("Created configuration file: {}", path.display());
            }
        }
        ConfigAction::Show => {
            let mut config = AppConfig::load(global.config.clone()).await?;
            global.apply_to(&mut config);
            print!("{}", config.to_toml_string()?);
        }
    }
    Ok(())
}

/// Load the dataset once and wrap it in a session
async fn start_session(global: &GlobalArgs, config: &AppConfig) -> Result<Session> {
    let source = config.data_source()?;

    let spinner = LoadingSpinner::start(!global.quiet);
    let outcome = match ContactClient::with_config(&config.source.to_runtime_config()) {
        Ok(client) => load(&source, &client).await,
        Err(e) => LoadOutcome::fallback(e),
    };
    spinner.finish();

    Ok(Session::new(outcome))
}

fn renderer(config: &AppConfig) -> Renderer {
    let color = config.display.color && atty::is(atty::Stream::Stdout);
    Renderer::new(color, config.display.max_cell_width)
}

#[derive(Serialize)]
struct ShowJson<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    field: &'a str,
    query: &'a str,
    total: usize,
    records: &'a [Record],
}

#[derive(Serialize)]
struct SummaryJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    field: &'static str,
    total: usize,
    buckets: Vec<AggregateEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{Field, RecordSet};
    use crate::constants::messages;

    #[test]
    fn test_summary_json_shape() {
        let records = vec![
            Record::default().with(Field::State, "NV"),
            Record::default().with(Field::State, "NV"),
            Record::default().with(Field::State, ""),
            Record::default().with(Field::State, "UT"),
        ];
        let session = Session::new(LoadOutcome::Loaded(RecordSet::with_canonical_columns(
            records,
        )));
        let view = session.view();

        let output = SummaryJson {
            error: None,
            field: "state",
            total: view.aggregate.total(),
            buckets: view.aggregate.entries(),
        };
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["total"], 4);
        assert!(json.get("error").is_none());
        assert_eq!(json["buckets"][0]["value"], "NV");
        assert_eq!(json["buckets"][0]["count"], 2);
        assert_eq!(json["buckets"][1]["value"], "Unknown");
        assert_eq!(json["buckets"][2]["value"], "UT");
    }

    #[test]
    fn test_show_json_includes_fallback_error() {
        let session = Session::new(LoadOutcome::fallback(crate::errors::LoadError::NoValidData));
        let view = session.view();

        let output = ShowJson {
            error: view.error.clone(),
            field: view.filter.field.as_str(),
            query: &view.filter.query,
            total: session.records().len(),
            records: &view.visible,
        };
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["error"], messages::NO_VALID_DATA);
        assert_eq!(json["records"][0]["email"], "-");
    }
}
