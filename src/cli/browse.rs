//! Interactive line-oriented browser
//!
//! Each input line becomes one session update followed by a re-render. Plain
//! text replaces the query (an empty line clears it); lines starting with `:`
//! are commands.

use std::io::Write;

use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

use crate::app::{Field, Session, Update};
use crate::cli::render::Renderer;
use crate::errors::Result;

const HELP: &str = "\
Type text to filter on the current field; an empty line clears the filter.
Commands:
  :field <name>   search a different field
  :group <name>   group the summary by a different field
  :summary        show or hide the percentage badges
  :chart          show or hide the proportion chart
  :fields         list field names
  :help           show this help
  :quit           exit
";

/// One parsed line of browser input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    /// Change session state and re-render
    Update(Update),
    /// List the field names
    Fields,
    /// Print help
    Help,
    /// Leave the browser
    Quit,
}

/// Parse one input line
pub fn parse_command(line: &str) -> std::result::Result<BrowseCommand, String> {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(command) = line.strip_prefix(':') else {
        return Ok(BrowseCommand::Update(Update::SetQuery(line.to_string())));
    };

    let (name, argument) = match command.trim().split_once(char::is_whitespace) {
        Some((name, argument)) => (name, argument.trim()),
        None => (command.trim(), ""),
    };

    match name {
        "field" | "f" => {
            parse_field(argument).map(|f| BrowseCommand::Update(Update::SetField(f)))
        }
        "group" | "g" => {
            parse_field(argument).map(|f| BrowseCommand::Update(Update::SetGroupBy(f)))
        }
        "summary" => Ok(BrowseCommand::Update(Update::ToggleSummary)),
        "chart" => Ok(BrowseCommand::Update(Update::ToggleChart)),
        "fields" => Ok(BrowseCommand::Fields),
        "help" | "h" | "?" => Ok(BrowseCommand::Help),
        "quit" | "q" | "exit" => Ok(BrowseCommand::Quit),
        other => Err(format!("Unknown command ':{}'. Type :help for commands", other)),
    }
}

fn parse_field(argument: &str) -> std::result::Result<Field, String> {
    if argument.is_empty() {
        return Err("Missing field name. Type :fields to list them".to_string());
    }
    argument.parse()
}

/// Run the browser until `:quit` or end of input
pub async fn run_browser<R, W>(
    session: &mut Session,
    renderer: &Renderer,
    input: R,
    output: &mut W,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    write!(output, "{}", renderer.render_view(&session.view()))?;
    prompt(session, output)?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(BrowseCommand::Update(update)) => {
                session.apply(update);
                write!(output, "{}", renderer.render_view(&session.view()))?;
            }
            Ok(BrowseCommand::Fields) => {
                let names: Vec<&str> = Field::ALL.iter().map(|f| f.as_str()).collect();
                writeln!(output, "{}", names.join(", "))?;
            }
            Ok(BrowseCommand::Help) => write!(output, "{}", HELP)?,
            Ok(BrowseCommand::Quit) => break,
            Err(message) => writeln!(output, "{}", message)?,
        }
        prompt(session, output)?;
    }

    debug!("Browser finished");
    Ok(())
}

fn prompt<W: Write>(session: &Session, output: &mut W) -> Result<()> {
    let filter = session.filter();
    write!(output, "\n{} [{}]> ", filter.field.label(), filter.query)?;
    output.flush()?;
    Ok(())
}
