//! Map retrieval service client.
//!
//! Builds document request URLs from the effective configuration and
//! fetches the vector document payload.

use crate::config::MapConfig;
use crate::error::{MapError, MapResult};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Default base URL of the map retrieval service.
pub const DEFAULT_API_URL: &str = "https://thenmap-api.herokuapp.com/v2";

/// HTTP client for the map retrieval service.
#[derive(Debug, Clone)]
pub struct MapApiClient {
    base_url: String,
    client: Client,
}

impl MapApiClient {
    /// Creates a client against the default service URL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_API_URL)
    }

    /// Creates a client against a specific base URL (test servers,
    /// self-hosted deployments).
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create HTTP client");

        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the document request URL for a configuration.
    ///
    /// The fixed `svg_props` option comes first; width, height, projection
    /// and language follow in that order, each included only when set.
    #[must_use]
    pub fn document_url(&self, config: &MapConfig) -> String {
        let mut url = format!("{}/{}/svg/{}", self.base_url, config.map, config.date);

        let mut options = vec!["svg_props=name|class".to_string()];
        if let Some(width) = config.width {
            options.push(format!("svg_width={width}"));
        }
        if let Some(height) = config.height {
            options.push(format!("svg_height={height}"));
        }
        if let Some(projection) = &config.projection {
            options.push(format!("svg_proj={}", urlencoding::encode(projection)));
        }
        if let Some(language) = &config.language {
            options.push(format!("language={}", urlencoding::encode(language)));
        }

        url.push('?');
        url.push_str(&options.join("&"));
        url
    }

    /// Fetches the vector map document as text.
    pub async fn fetch_document(&self, config: &MapConfig) -> MapResult<String> {
        let url = self.document_url(config);
        debug!("Requesting map document: {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MapError::Network(format!("map request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(MapError::Service { status, message });
        }

        response
            .text()
            .await
            .map_err(|e| MapError::Network(format!("failed to read map payload: {e}")))
    }
}

impl Default for MapApiClient {
    fn default() -> Self {
        Self::new()
    }
}
