//! Spreadsheet-export data source.
//!
//! Fetches rows from a published spreadsheet JSON export. Each row is a
//! record with at least an `id` and a `color`/`colour` field; extra
//! columns are ignored.

use super::ColorDataSource;
use crate::error::{MapError, MapResult};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thenmap_types::ColorEntry;
use tracing::debug;

/// Default base URL of the spreadsheet export service.
pub const DEFAULT_SHEET_API_URL: &str = "https://opensheet.elk.sh";

/// Spreadsheet source configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetSourceConfig {
    /// Base URL of the export service.
    pub base_url: String,
}

impl Default for SheetSourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_SHEET_API_URL.to_string(),
        }
    }
}

/// Data source backed by a published spreadsheet export.
#[derive(Debug, Clone)]
pub struct SheetSource {
    config: SheetSourceConfig,
    client: Client,
}

impl SheetSource {
    /// Creates a source with the given configuration.
    #[must_use]
    pub fn new(config: SheetSourceConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("failed to create HTTP client");

        Self { config, client }
    }

    fn records_url(&self, key: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(key)
        )
    }
}

impl Default for SheetSource {
    fn default() -> Self {
        Self::new(SheetSourceConfig::default())
    }
}

#[async_trait]
impl ColorDataSource for SheetSource {
    fn source_name(&self) -> &'static str {
        "spreadsheet"
    }

    async fn fetch_colors(&self, key: &str) -> MapResult<Vec<ColorEntry>> {
        let url = self.records_url(key);
        debug!("Fetching color records from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| MapError::Network(format!("data source request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(MapError::DataSource(format!(
                "data source returned status {}",
                response.status().as_u16()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| MapError::Network(format!("failed to read data source body: {e}")))?;

        let entries = ColorEntry::parse_records(&body)
            .map_err(|e| MapError::DataSource(format!("invalid data source records: {e}")))?;

        debug!("Fetched {} color records", entries.len());
        Ok(entries)
    }
}
