//! Color data source connectors.
//!
//! When the caller configures a data key instead of inline color data,
//! the records are pulled through a [`ColorDataSource`] at load (and
//! recolor) time. The stock connector fetches rows from a published
//! spreadsheet export; anything that can produce id/color records can
//! implement the trait.

mod sheet;

use crate::error::MapResult;
use async_trait::async_trait;
use thenmap_types::ColorEntry;

pub use sheet::{DEFAULT_SHEET_API_URL, SheetSource, SheetSourceConfig};

/// An asynchronous source of color records behind an opaque key.
#[async_trait]
pub trait ColorDataSource: Send + Sync {
    /// Human-readable name of the connector.
    fn source_name(&self) -> &'static str;

    /// Fetches the color records the key refers to.
    async fn fetch_colors(&self, key: &str) -> MapResult<Vec<ColorEntry>>;
}
