//! Configuration management for Contact Viewer
//!
//! Settings come from, in increasing precedence: built-in defaults, a TOML
//! config file, and command-line flags (applied by the CLI layer).

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use url::Url;

use crate::app::{ClientConfig, DataSource, Field, FilterState, Toggles};
use crate::constants::{config as config_paths, display, http, source};
use crate::errors::{ConfigError, ConfigResult};

/// Unified application configuration for TOML serialization
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    /// Where the contact CSV is read from
    pub source: SourceConfig,
    /// Initial view and rendering settings
    pub display: DisplayConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Data source and HTTP settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SourceConfig {
    /// Remote CSV URL
    pub url: String,
    /// Local CSV file; takes precedence over `url` when set
    pub file: Option<PathBuf>,
    /// Request timeout (e.g. "30s")
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
    /// Connect timeout (e.g. "10s")
    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,
    /// User agent sent with the request
    pub user_agent: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: source::DEFAULT_CSV_URL.to_string(),
            file: None,
            request_timeout: http::DEFAULT_TIMEOUT,
            connect_timeout: http::CONNECT_TIMEOUT,
            user_agent: http::USER_AGENT.to_string(),
        }
    }
}

/// Initial view settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Field searched by default
    pub search_field: Field,
    /// Field the summary is grouped by
    pub group_by: Field,
    /// Show percentage badges
    pub show_summary: bool,
    /// Show the proportion chart
    pub show_chart: bool,
    /// Maximum characters per table cell
    pub max_cell_width: usize,
    /// Enable colored output when writing to a terminal
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            search_field: Field::State,
            group_by: Field::State,
            show_summary: true,
            show_chart: true,
            max_cell_width: display::MAX_CELL_WIDTH,
            color: true,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default log level when no verbosity flag is given
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from an explicit file or the standard locations
    ///
    /// Missing files in standard locations fall back to defaults; a missing
    /// explicit file is an error.
    pub async fn load(config_file_override: Option<PathBuf>) -> ConfigResult<Self> {
        let config_path = match config_file_override {
            Some(path) => {
                if !path.exists() {
                    return Err(ConfigError::NotFound { path });
                }
                Some(path)
            }
            None => Self::find_config_file(),
        };

        let config = match config_path {
            Some(path) => Self::load_from_file(&path).await?,
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Check values that the type system cannot
    pub fn validate(&self) -> ConfigResult<()> {
        if self.source.file.is_none() {
            Url::parse(&self.source.url).map_err(|e| ConfigError::InvalidValue {
                field: "source.url".to_string(),
                value: self.source.url.clone(),
                reason: e.to_string(),
            })?;
        }

        if self.display.max_cell_width < 3 {
            return Err(ConfigError::InvalidValue {
                field: "display.max_cell_width".to_string(),
                value: self.display.max_cell_width.to_string(),
                reason: "Must be at least 3".to_string(),
            });
        }

        Ok(())
    }

    /// Resolve the data source, preferring a local file over the URL
    pub fn data_source(&self) -> ConfigResult<DataSource> {
        if let Some(ref file) = self.source.file {
            return Ok(DataSource::File(file.clone()));
        }

        Url::parse(&self.source.url)
            .map(DataSource::Url)
            .map_err(|e| ConfigError::InvalidValue {
                field: "source.url".to_string(),
                value: self.source.url.clone(),
                reason: e.to_string(),
            })
    }

    /// Initial filter from display settings
    pub fn filter_state(&self) -> FilterState {
        FilterState::new(self.display.search_field, "")
    }

    /// Initial presentation switches
    pub fn toggles(&self) -> Toggles {
        Toggles {
            show_summary: self.display.show_summary,
            show_chart: self.display.show_chart,
        }
    }

    /// Write a commented default configuration file
    ///
    /// Uses `path` when given, otherwise the user config location.
    pub async fn initialize(path: Option<PathBuf>, force: bool) -> ConfigResult<PathBuf> {
        let config_path = match path {
            Some(path) => path,
            None => Self::default_config_path()?,
        };

        if config_path.exists() && !force {
            return Err(ConfigError::AlreadyExists { path: config_path });
        }

        if let Some(parent) = config_path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tokio::fs::write(&config_path, Self::generate_default_config_content()).await?;
        info!("Wrote default configuration to {}", config_path.display());

        Ok(config_path)
    }

    /// Serialize the effective configuration
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut search_paths = vec![PathBuf::from(config_paths::LOCAL_FILE)];
        if let Ok(path) = Self::default_config_path() {
            search_paths.push(path);
        }

        let found = search_paths.into_iter().find(|path| path.exists());
        match &found {
            Some(path) => debug!("Found config file: {}", path.display()),
            None => debug!("No config file found in standard locations"),
        }
        found
    }

    /// Get the default config file path for the current user
    pub fn default_config_path() -> ConfigResult<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir
            .join(config_paths::APP_DIR)
            .join(config_paths::FILE_NAME))
    }

    /// Load configuration from a TOML file
    async fn load_from_file(path: &Path) -> ConfigResult<Self> {
        let content = tokio::fs::read_to_string(path).await?;

        let config: AppConfig =
            toml::from_str(&content).map_err(|source| ConfigError::InvalidFormat {
                path: path.to_path_buf(),
                source,
            })?;

        info!("Loaded configuration from: {}", path.display());
        Ok(config)
    }

    /// Generate default configuration content with helpful comments
    fn generate_default_config_content() -> String {
        format!(
            r#"# Contact Viewer Configuration
# Command-line flags override anything set here.

[source]
# Remote CSV with a twelve-column contact header
url = "{url}"

# Read a local CSV instead of fetching (takes precedence over url)
# file = "/path/to/contacts.csv"

request_timeout = "{request_timeout}"
connect_timeout = "{connect_timeout}"
user_agent = "{user_agent}"

[display]
# Field searched by `show` and `browse` unless --field is given
search_field = "state"

# Field the summary is grouped by
group_by = "state"

show_summary = true
show_chart = true

# Longer cell values are truncated in the table
max_cell_width = {max_cell_width}

# Colors are only used when writing to a terminal
color = true

[logging]
# error, warn, info, debug, trace
level = "warn"
"#,
            url = source::DEFAULT_CSV_URL,
            request_timeout = humantime_serde::re::humantime::format_duration(http::DEFAULT_TIMEOUT),
            connect_timeout = humantime_serde::re::humantime::format_duration(http::CONNECT_TIMEOUT),
            user_agent = http::USER_AGENT,
            max_cell_width = display::MAX_CELL_WIDTH,
        )
    }
}

impl SourceConfig {
    /// Convert to runtime ClientConfig
    pub fn to_runtime_config(&self) -> ClientConfig {
        ClientConfig {
            request_timeout: self.request_timeout,
            connect_timeout: self.connect_timeout,
            user_agent: self.user_agent.clone(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();

        assert_eq!(config.source.url, source::DEFAULT_CSV_URL);
        assert_eq!(config.display.group_by, Field::State);
        assert!(config.display.show_chart);
        assert_eq!(config.logging.level, "warn");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_file_generation() {
        let content = AppConfig::generate_default_config_content();

        // Should be valid TOML that round-trips to the defaults
        let parsed: AppConfig = toml::from_str(&content).unwrap();
        assert_eq!(parsed, AppConfig::default());
        assert!(content.contains("# Contact Viewer Configuration"));
        assert!(content.contains("[display]"));
    }

    #[tokio::test]
    async fn test_config_loading_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.toml");

        let result = AppConfig::load(Some(config_path)).await;
        assert!(matches!(result, Err(ConfigError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_partial_config_keeps_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("partial.toml");

        let test_config = r#"
[source]
file = "contacts.csv"
request_timeout = "5s"

[display]
group_by = "city"
show_chart = false
"#;
        tokio::fs::write(&config_path, test_config).await.unwrap();

        let config = AppConfig::load(Some(config_path)).await.unwrap();

        assert_eq!(config.source.request_timeout, Duration::from_secs(5));
        assert_eq!(config.source.connect_timeout, http::CONNECT_TIMEOUT);
        assert_eq!(config.display.group_by, Field::City);
        assert_eq!(config.display.search_field, Field::State);
        assert!(!config.toggles().show_chart);
        assert!(config.toggles().show_summary);
        assert_eq!(
            config.data_source().unwrap(),
            DataSource::File(PathBuf::from("contacts.csv"))
        );
    }

    #[tokio::test]
    async fn test_invalid_values_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.toml");

        tokio::fs::write(&config_path, "[display]\nmax_cell_width = 1\n")
            .await
            .unwrap();
        let result = AppConfig::load(Some(config_path.clone())).await;
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

        tokio::fs::write(&config_path, "[source]\nurl = \"not a url\"\n")
            .await
            .unwrap();
        let result = AppConfig::load(Some(config_path.clone())).await;
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));

        tokio::fs::write(&config_path, "[display]\ngroup_by = \"region\"\n")
            .await
            .unwrap();
        let result = AppConfig::load(Some(config_path)).await;
        assert!(matches!(result, Err(ConfigError::InvalidFormat { .. })));
    }

    #[tokio::test]
    async fn test_initialize_writes_file_once() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let written = AppConfig::initialize(Some(config_path.clone()), false)
            .await
            .unwrap();
        assert_eq!(written, config_path);

        let loaded = AppConfig::load(Some(config_path.clone())).await.unwrap();
        assert_eq!(loaded, AppConfig::default());

        let again = AppConfig::initialize(Some(config_path.clone()), false).await;
        assert!(matches!(again, Err(ConfigError::AlreadyExists { .. })));
        assert!(AppConfig::initialize(Some(config_path), true).await.is_ok());
    }

    #[test]
    fn test_toml_string_round_trip() {
        let config = AppConfig::default();
        let text = config.to_toml_string().unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
