//! Caller-supplied color data records.

use serde::{Deserialize, Serialize};

/// One (entity, color) pair supplied by the caller or a data source.
///
/// The `id` is the stable code of a political/geographic entity and doubles
/// as the CSS class of its shape in the map document. The color is kept raw
/// here; validation and normalization happen in the styling pipeline, which
/// never rejects an entry outright — unusable colors degrade to a fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Entity code, e.g. `"se"`.
    pub id: String,
    /// Raw color expression, if any. Entries without one are skipped by
    /// aggregation. Spreadsheet exports use either spelling of the field.
    #[serde(default, alias = "colour")]
    pub color: Option<String>,
}

impl ColorEntry {
    /// Creates an entry with a color.
    #[must_use]
    pub fn new(id: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            color: Some(color.into()),
        }
    }

    /// Creates an entry without a color.
    #[must_use]
    pub fn uncolored(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            color: None,
        }
    }

    /// Parses a JSON array of records into entries.
    ///
    /// Records may carry extra fields (spreadsheet rows usually do); only
    /// `id` and `color`/`colour` are read.
    pub fn parse_records(json: &str) -> crate::Result<Vec<ColorEntry>> {
        Ok(serde_json::from_str(json)?)
    }
}
