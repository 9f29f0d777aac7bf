//! HTTP client for fetching the contact CSV
//!
//! The module is organized into specialized components:
//! - `config`: HTTP client configuration and building
//! - `http`: the cache-disabled GET itself

use url::Url;

use crate::errors::LoadResult;

pub mod config;
pub mod http;

pub use config::ClientConfig;

use http::HttpHandler;

/// HTTP client for fetching contact data
#[derive(Debug)]
pub struct ContactClient {
    http_handler: HttpHandler,
}

impl ContactClient {
    /// Creates a client with default configuration
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Client` if the HTTP client cannot be built
    pub fn new() -> LoadResult<Self> {
        Self::with_config(&ClientConfig::default())
    }

    /// Creates a client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Client` if the HTTP client cannot be built
    pub fn with_config(config: &ClientConfig) -> LoadResult<Self> {
        let client = config.build_http_client()?;
        tracing::debug!("Created contact client (timeout {:?})", config.request_timeout);

        Ok(Self {
            http_handler: HttpHandler::new(client),
        })
    }

    /// Fetches the CSV body at `url`
    ///
    /// # Errors
    ///
    /// Returns `LoadError` on transport failure or a non-2xx status
    pub async fn fetch_csv(&self, url: &Url) -> LoadResult<String> {
        self.http_handler.get_text(url).await
    }
}
