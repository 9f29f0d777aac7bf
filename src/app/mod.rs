//! Core application logic for Contact Viewer
//!
//! This module contains the HTTP client, data models, the CSV parser, the
//! filter and aggregation pipeline, and the session that ties them together.
//!
//! # Examples
//!
//! ```rust,no_run
//! use contact_viewer::app::{load, ContactClient, DataSource, Session, Update};
//! use contact_viewer::app::models::Field;
//! use url::Url;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ContactClient::new()?;
//! let source = DataSource::Url(Url::parse("https://example.com/contacts.csv")?);
//!
//! let mut session = Session::new(load(&source, &client).await);
//! session.apply(Update::SetField(Field::CompanyName));
//! session.apply(Update::SetQuery("acme".to_string()));
//!
//! let view = session.view();
//! println!("{} matching contacts", view.visible.len());
//! # Ok(())
//! # }
//! ```

pub mod aggregate;
pub mod client;
pub mod detail;
pub mod filter;
pub mod loader;
pub mod models;
pub mod parser;
pub mod session;

// Re-export main public API
pub use aggregate::{Aggregate, AggregateEntry};
pub use client::{ClientConfig, ContactClient};
pub use detail::{select_detail, DetailView};
pub use filter::{filter_records, FilterState};
pub use loader::{load, DataSource, LoadOutcome};
pub use models::{Field, Record, RecordSet};
pub use parser::{parse_records, parse_records_with_stats, ParseStats};
pub use session::{Session, SessionView, Toggles, Update};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_module_structure() {
        // Ensure public API is accessible
        let config = ClientConfig::default();
        assert!(config.tcp_nodelay);
        assert_eq!(FilterState::default().field, Field::State);
    }
}
