//! Caller options and the effective run configuration.

use crate::error::MapError;
use chrono::{SecondsFormat, Utc};
use std::fmt;
use thenmap_types::ColorEntry;
use tracing::warn;

/// Dataset identifier used when the caller does not pick one.
pub const DEFAULT_MAP: &str = "world-2";

/// Container width applied when the caller does not pick one.
pub const DEFAULT_WIDTH: u32 = 800;

/// Invoked once after the load sequence reaches the ready phase.
///
/// Receives `None` on success. The callback never fires on a configuration
/// error or a retrieval failure.
pub type ReadyCallback = Box<dyn FnOnce(Option<&MapError>) + Send>;

/// Options accepted by the load entry point. All fields are optional;
/// unset fields fall back to the defaults in [`MapConfig`].
#[derive(Default)]
pub struct MapOptions {
    /// Container and rendered-document width in pixels.
    pub width: Option<u32>,
    /// Container and rendered-document height in pixels.
    pub height: Option<u32>,
    /// Locale code for entity labels.
    pub language: Option<String>,
    /// Projection identifier passed through to the map service.
    pub projection: Option<String>,
    /// Dataset identifier, e.g. `"world-2"`.
    pub map: Option<String>,
    /// Deprecated spelling of `map`. Honored with a warning; wins over
    /// `map` when both are given, matching the historical behavior.
    pub dataset: Option<String>,
    /// As-of date (RFC 3339). Defaults to the current time.
    pub date: Option<String>,
    /// Inline color data applied once the map is ready.
    pub data: Option<Vec<ColorEntry>>,
    /// Opaque key into the configured data source, used when no inline
    /// data is given.
    pub data_key: Option<String>,
    /// Completion callback, see [`ReadyCallback`].
    pub on_ready: Option<ReadyCallback>,
}

impl fmt::Debug for MapOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MapOptions")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("language", &self.language)
            .field("projection", &self.projection)
            .field("map", &self.map)
            .field("dataset", &self.dataset)
            .field("date", &self.date)
            .field("data", &self.data)
            .field("data_key", &self.data_key)
            .field("on_ready", &self.on_ready.is_some())
            .finish()
    }
}

/// Effective run configuration: caller options overlaid on defaults.
/// Immutable once merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapConfig {
    /// Width in pixels, if sized.
    pub width: Option<u32>,
    /// Height in pixels, if sized.
    pub height: Option<u32>,
    /// Label locale.
    pub language: Option<String>,
    /// Projection identifier.
    pub projection: Option<String>,
    /// Dataset identifier.
    pub map: String,
    /// As-of date (RFC 3339).
    pub date: String,
    /// Inline color data.
    pub data: Option<Vec<ColorEntry>>,
    /// Data source key.
    pub data_key: Option<String>,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: Some(DEFAULT_WIDTH),
            height: None,
            language: None,
            projection: None,
            map: DEFAULT_MAP.to_string(),
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            data: None,
            data_key: None,
        }
    }
}

impl MapConfig {
    /// Produces the effective configuration by overlaying `options` on the
    /// defaults. Any completion callback left in the options is not part
    /// of the configuration and is dropped here.
    #[must_use]
    pub fn merged(options: MapOptions) -> Self {
        let mut config = Self::default();

        if options.width.is_some() {
            config.width = options.width;
        }
        if options.height.is_some() {
            config.height = options.height;
        }
        if options.language.is_some() {
            config.language = options.language;
        }
        if options.projection.is_some() {
            config.projection = options.projection;
        }
        if let Some(map) = options.map {
            config.map = map;
        }
        if let Some(dataset) = options.dataset {
            warn!("the \"dataset\" option has been renamed \"map\" and will stop working in a future version");
            config.map = dataset;
        }
        if let Some(date) = options.date {
            config.date = date;
        }
        config.data = options.data;
        config.data_key = options.data_key;

        config
    }
}
