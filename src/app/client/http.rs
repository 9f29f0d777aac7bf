//! Core HTTP operations
//!
//! A single cache-disabled GET per call. Failures are reported, never retried.

use reqwest::Client;
use url::Url;

use crate::errors::{LoadError, LoadResult};

/// HTTP operations handler
#[derive(Debug)]
pub struct HttpHandler {
    client: Client,
}

impl HttpHandler {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Fetches the body of `url` as text
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Network` if the request or body read fails, and
    /// `LoadError::Status` for any non-2xx response
    pub async fn get_text(&self, url: &Url) -> LoadResult<String> {
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Server returned {} for {}", status, url);
            return Err(LoadError::Status {
                status: status.as_u16(),
            });
        }

        let text = response.text().await?;
        tracing::debug!("Fetched {} bytes from {}", text.len(), url);
        Ok(text)
    }
}
