//! Prelude module for Contact Viewer Library
//!
//! Re-exports the items most integrations need with a single
//! `use contact_viewer::prelude::*;` statement.
//!
//! # Usage
//!
//! ```rust,no_run
//! use contact_viewer::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = ContactClient::new()?;
//!     let source = AppConfig::default().data_source()?;
//!
//!     let mut session = Session::new(load(&source, &client).await);
//!     session.apply(Update::SetQuery("acme".to_string()));
//!
//!     println!("{} contacts match", session.view().visible.len());
//!     Ok(())
//! }
//! ```

// Core result types
pub use crate::errors::{AppError, Result};

// Loading and session state
pub use crate::app::{
    filter_records, load, parse_records, select_detail, Aggregate, AggregateEntry, ClientConfig,
    ContactClient, DataSource, DetailView, Field, FilterState, LoadOutcome, Record, RecordSet,
    Session, SessionView, Toggles, Update,
};

pub use crate::config::AppConfig;

pub use std::path::{Path, PathBuf};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prelude_imports() {
        let _client_config = ClientConfig::default();
        let config = AppConfig::default();

        assert!(matches!(config.data_source(), Ok(DataSource::Url(_))));
        assert_eq!(config.filter_state(), FilterState::default());
    }

    #[test]
    fn test_prelude_pipeline() {
        let records = vec![
            Record::default()
                .with(Field::FirstName, "Ada")
                .with(Field::State, "NV"),
            Record::default()
                .with(Field::FirstName, "Bob")
                .with(Field::State, "UT"),
        ];
        let mut session = Session::new(LoadOutcome::Loaded(RecordSet::with_canonical_columns(
            records,
        )));
        session.apply(Update::SetField(Field::FirstName));
        session.apply(Update::SetQuery("ada".to_string()));

        let view = session.view();
        assert_eq!(view.visible.len(), 1);
        assert!(matches!(view.detail(), DetailView::Person(_)));
    }
}
