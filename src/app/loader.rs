//! Fetch-and-fallback orchestration
//!
//! Loading runs once per session. Every failure, whether transport, status,
//! file access or an empty parse, collapses into [`LoadOutcome::Fallback`]
//! carrying the reason and the single-record placeholder dataset, so the rest
//! of the pipeline always has at least one record to work with.

use std::fmt;
use std::path::PathBuf;

use tracing::{info, warn};
use url::Url;

use crate::app::client::ContactClient;
use crate::app::models::RecordSet;
use crate::app::parser::parse_records_with_stats;
use crate::errors::{LoadError, LoadResult};

/// Where the CSV text comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    /// Remote CSV fetched over HTTP
    Url(Url),
    /// Local CSV file
    File(PathBuf),
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Url(url) => write!(f, "{}", url),
            DataSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Result of the one-time load
#[derive(Debug)]
pub enum LoadOutcome {
    /// CSV fetched and at least one record parsed
    Loaded(RecordSet),
    /// Loading failed; the placeholder dataset stands in
    Fallback {
        reason: LoadError,
        records: RecordSet,
    },
}

impl LoadOutcome {
    /// Build the fallback outcome for `reason`
    pub fn fallback(reason: LoadError) -> Self {
        LoadOutcome::Fallback {
            reason,
            records: RecordSet::sentinel(),
        }
    }

    /// Records to display, real or placeholder
    pub fn records(&self) -> &RecordSet {
        match self {
            LoadOutcome::Loaded(records) => records,
            LoadOutcome::Fallback { records, .. } => records,
        }
    }

    /// Whether the placeholder dataset is in use
    pub fn is_fallback(&self) -> bool {
        matches!(self, LoadOutcome::Fallback { .. })
    }

    /// Human-readable failure message, if loading failed
    pub fn error_message(&self) -> Option<String> {
        match self {
            LoadOutcome::Loaded(_) => None,
            LoadOutcome::Fallback { reason, .. } => Some(reason.to_string()),
        }
    }
}

/// Load the record set from `source`, falling back on any failure
///
/// `client` is only used for [`DataSource::Url`].
pub async fn load(source: &DataSource, client: &ContactClient) -> LoadOutcome {
    info!("Loading contacts from {}", source);

    let outcome = match read_source(source, client).await {
        Ok(text) => outcome_from_text(&text),
        Err(reason) => LoadOutcome::fallback(reason),
    };

    match &outcome {
        LoadOutcome::Loaded(records) => info!("Loaded {} contact records", records.len()),
        LoadOutcome::Fallback { reason, .. } => {
            warn!("Using placeholder data: {}", reason)
        }
    }

    outcome
}

/// Parse fetched text, treating an empty result as a load failure
pub fn outcome_from_text(text: &str) -> LoadOutcome {
    let (records, stats) = parse_records_with_stats(text);
    if stats.dropped_rows > 0 {
        tracing::debug!(
            "{} of {} rows had the wrong number of fields ({:.1}% parsed)",
            stats.dropped_rows,
            stats.data_rows(),
            stats.success_rate()
        );
    }

    if records.is_empty() {
        LoadOutcome::fallback(LoadError::NoValidData)
    } else {
        LoadOutcome::Loaded(records)
    }
}

async fn read_source(source: &DataSource, client: &ContactClient) -> LoadResult<String> {
    match source {
        DataSource::Url(url) => client.fetch_csv(url).await,
        DataSource::File(path) => {
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| LoadError::File {
                    path: path.clone(),
                    source,
                })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::models::Field;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const CSV: &str = "first_name,last_name,company_name,address,city,county,state,zip,phone1,phone2,email,web\n\
                       Josephine,Darakjy,\"Chanay, Jeffrey A Esq\",4 B Blue Ridge Blvd,Brighton,Livingston,MI,48116,810-292-9388,810-374-9840,josephine_darakjy@darakjy.org,http://www.chanayjeffreyaesq.com";

    #[test]
    fn test_outcome_from_valid_text() {
        let outcome = outcome_from_text(CSV);
        assert!(!outcome.is_fallback());
        assert_eq!(outcome.records().len(), 1);
        assert_eq!(outcome.error_message(), None);
    }

    #[test]
    fn test_mismatched_header_falls_back_to_sentinel() {
        let outcome = outcome_from_text("name,city\nAlice,Reno\nBob,Provo");

        assert!(outcome.is_fallback());
        assert_eq!(
            outcome.error_message().as_deref(),
            Some("CSV parsing completed but no valid data found")
        );
        let records = outcome.records();
        assert_eq!(records.len(), 1);
        assert!(Field::ALL
            .iter()
            .all(|f| records.records()[0].get(*f) == "-"));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(CSV.as_bytes()).unwrap();
        file.flush().unwrap();

        let client = ContactClient::new().unwrap();
        let outcome = load(&DataSource::File(file.path().to_path_buf()), &client).await;

        assert!(!outcome.is_fallback());
        assert_eq!(
            outcome.records().records()[0].get(Field::CompanyName),
            "Chanay, Jeffrey A Esq"
        );
    }

    #[tokio::test]
    async fn test_missing_file_falls_back() {
        let dir = tempfile::TempDir::new().unwrap();
        let client = ContactClient::new().unwrap();
        let outcome = load(&DataSource::File(dir.path().join("missing.csv")), &client).await;

        assert!(outcome.is_fallback());
        assert!(matches!(
            outcome,
            LoadOutcome::Fallback {
                reason: LoadError::File { .. },
                ..
            }
        ));
        assert_eq!(outcome.records().len(), 1);
    }
}
