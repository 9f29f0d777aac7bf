//! CSV parsing for contact records
//!
//! Turns raw comma-separated text into an ordered [`RecordSet`]. The parser is
//! tolerant by construction: it never returns an error. Malformed input
//! degrades to fewer (or zero) records, and deciding what an empty result
//! means is left to the loader.
//!
//! # Format
//!
//! - Line endings `\r\n`, `\r` and `\n` are all accepted
//! - Doubled quotes (`""`) collapse to a single quote before tokenizing
//! - Blank lines are ignored
//! - The first line is the header. If it is not exactly twelve fields wide,
//!   the canonical header is used instead and mapping stays positional
//! - Fields may be quoted; quoted fields may contain commas
//! - Rows whose field count differs from the header's are skipped
//!
//! # Module Organization
//!
//! - [`tokenize`] - Line normalization and quote-aware splitting
//! - [`types`] - Parse statistics
//! - [`tests`] - Integration tests over whole documents
//!
//! # Examples
//!
//! ```rust
//! use contact_viewer::app::parser::parse_records;
//! use contact_viewer::app::models::Field;
//!
//! let text = "first_name,last_name,company_name,address,city,county,state,zip,phone1,phone2,email,web\n\
//!             James,Butt,\"Benton, John B Jr\",6649 N Blue Gum St,New Orleans,Orleans,LA,70116,504-621-8927,504-845-1427,jbutt@gmail.com,http://www.bentonjohnbjr.com";
//! let records = parse_records(text);
//! assert_eq!(records.len(), 1);
//! assert_eq!(records.records()[0].get(Field::CompanyName), "Benton, John B Jr");
//! ```

use tracing::debug;

pub mod tokenize;
pub mod types;

#[cfg(test)]
mod tests;

pub use types::ParseStats;

use crate::app::models::{canonical_columns, Record, RecordSet};
use crate::constants::schema::FIELD_COUNT;
use tokenize::{clean_token, normalize, tokenize};

/// Parse CSV text into a record set
pub fn parse_records(text: &str) -> RecordSet {
    parse_records_with_stats(text).0
}

/// Parse CSV text into a record set, also reporting what was skipped
pub fn parse_records_with_stats(text: &str) -> (RecordSet, ParseStats) {
    let mut stats = ParseStats::default();
    let cleaned = normalize(text);

    let mut lines = Vec::new();
    for line in cleaned.split('\n') {
        if line.trim().is_empty() {
            stats.blank_lines += 1;
        } else {
            lines.push(line);
        }
    }
    stats.lines_processed = lines.len();

    if lines.len() < 2 {
        debug!(
            "CSV text has {} non-blank lines; need a header and at least one row",
            lines.len()
        );
        return (RecordSet::empty(), stats);
    }

    let columns = parse_header(lines[0], &mut stats);

    let mut records = Vec::with_capacity(lines.len() - 1);
    for (offset, line) in lines[1..].iter().enumerate() {
        let tokens = tokenize(line);
        match <[String; FIELD_COUNT]>::try_from(tokens) {
            Ok(values) => {
                records.push(Record::from_values(values));
                stats.valid_rows += 1;
            }
            Err(tokens) => {
                debug!(
                    "Dropping row {}: expected {} fields, found {}",
                    offset + 2,
                    FIELD_COUNT,
                    tokens.len()
                );
                stats.dropped_rows += 1;
            }
        }
    }

    debug!(
        "Parsed {} records ({} dropped, {} blank lines)",
        stats.valid_rows, stats.dropped_rows, stats.blank_lines
    );

    (RecordSet::new(columns, records), stats)
}

/// Read column labels from the header line, falling back to the canonical set
fn parse_header(line: &str, stats: &mut ParseStats) -> Vec<String> {
    let headers: Vec<String> = line.split(',').map(clean_token).collect();
    if headers.len() == FIELD_COUNT {
        headers
    } else {
        debug!(
            "Header has {} fields instead of {}; using canonical header",
            headers.len(),
            FIELD_COUNT
        );
        stats.canonical_header = true;
        canonical_columns()
    }
}
