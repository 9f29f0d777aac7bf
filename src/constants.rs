//! Application constants for Contact Viewer
//!
//! This module centralizes all constants used throughout the application,
//! organized by functional domain.

use std::time::Duration;

/// Data source defaults
pub mod source {
    /// Sample contact CSV fetched when no URL or file is configured
    pub const DEFAULT_CSV_URL: &str =
        "https://raw.githubusercontent.com/jinchen003/Nearabl.Sample.Data/main/us-500.csv";
}

/// HTTP client configuration constants
pub mod http {
    use super::Duration;

    /// Default user agent for all HTTP requests
    pub const USER_AGENT: &str = concat!("Contact-Viewer/", env!("CARGO_PKG_VERSION"));

    /// Default HTTP request timeout
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection establishment timeout
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Cache-Control value sent with every fetch
    pub const NO_CACHE: &str = "no-cache, no-store";
}

/// CSV record schema
pub mod schema {
    /// Number of attributes every record carries
    pub const FIELD_COUNT: usize = 12;

    /// Canonical header used when the CSV header is not twelve fields wide
    pub const CANONICAL_HEADER: [&str; FIELD_COUNT] = [
        "first_name",
        "last_name",
        "company_name",
        "address",
        "city",
        "county",
        "state",
        "zip",
        "phone1",
        "phone2",
        "email",
        "web",
    ];

    /// Value every attribute of the placeholder record is set to
    pub const SENTINEL_VALUE: &str = "-";

    /// Aggregate bucket for empty attribute values
    pub const UNKNOWN_BUCKET: &str = "Unknown";
}

/// Error messages surfaced when the dataset falls back to the placeholder
pub mod messages {
    /// Parsing succeeded at the transport level but produced no rows
    pub const NO_VALID_DATA: &str = "CSV parsing completed but no valid data found";

    /// Text shown while the fetch is in flight
    pub const LOADING: &str = "Loading...";
}

/// Presentation defaults
pub mod display {
    use crossterm::style::Color;

    /// Palette cycled by bucket index for badges and chart segments
    pub const PALETTE: [Color; 6] = [
        Color::Rgb { r: 0x4e, g: 0x73, b: 0xdf },
        Color::Rgb { r: 0xe7, g: 0x4a, b: 0x3b },
        Color::Rgb { r: 0xf6, g: 0xc2, b: 0x3e },
        Color::Rgb { r: 0x1c, g: 0xc8, b: 0x8a },
        Color::Rgb { r: 0x36, g: 0xb9, b: 0xcc },
        Color::Rgb { r: 0xff, g: 0x9f, b: 0x40 },
    ];

    /// Width of the proportion chart in terminal cells
    pub const CHART_WIDTH: usize = 60;

    /// Default maximum width of a table cell
    pub const MAX_CELL_WIDTH: usize = 24;

    /// Placeholder shown for empty table cells
    pub const EMPTY_CELL: &str = "-";

    /// Placeholder shown when a record has no phone number
    pub const NO_PHONE: &str = "N/A";
}

/// Configuration file locations
pub mod config {
    /// Project-local configuration file name
    pub const LOCAL_FILE: &str = "contact-viewer.toml";

    /// Directory under the user config dir
    pub const APP_DIR: &str = "contact-viewer";

    /// File name under the user config dir
    pub const FILE_NAME: &str = "config.toml";
}
