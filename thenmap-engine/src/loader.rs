//! The map load orchestrator.
//!
//! Drives the load sequence for one container: request the map document,
//! annotate it, attach it, apply the initial colorization. One loader owns
//! one container's state — its effective configuration, its style buffer
//! and its phase — so several maps can live on one page without sharing
//! anything.

use crate::api::MapApiClient;
use crate::config::{MapConfig, MapOptions, ReadyCallback};
use crate::document;
use crate::error::{MapError, MapResult};
use crate::host::{ContainerHandle, ContainerRef, MapHost};
use crate::source::{ColorDataSource, SheetSource};
use std::sync::Arc;
use thenmap_style::{BASE_RULES, StyleAggregator, StyleSheet, render_rules};
use thenmap_types::ColorEntry;
use tracing::{debug, info, warn};

/// Phase of the load sequence.
///
/// Advances strictly forward; `Ready` is terminal. A retrieval failure
/// leaves the loader in `Requesting` — there is no retry policy here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// No load has been started.
    Uninitialized,
    /// The document request has been issued.
    Requesting,
    /// The payload arrived and is being annotated and attached.
    Annotating,
    /// The document is attached; recoloring is available.
    Ready,
}

/// Loads a map into one container and keeps it colorized.
pub struct MapLoader {
    host: Arc<dyn MapHost>,
    api: MapApiClient,
    source: Arc<dyn ColorDataSource>,
    aggregator: StyleAggregator,
    stylesheet: StyleSheet,
    phase: LoadPhase,
    config: Option<MapConfig>,
    container: Option<ContainerHandle>,
}

impl MapLoader {
    /// Creates a loader with the default service client and the stock
    /// spreadsheet data source.
    #[must_use]
    pub fn new(host: Arc<dyn MapHost>) -> Self {
        Self::with_api_client(host, MapApiClient::new())
    }

    /// Creates a loader with a custom service client.
    #[must_use]
    pub fn with_api_client(host: Arc<dyn MapHost>, api: MapApiClient) -> Self {
        Self {
            host,
            api,
            source: Arc::new(SheetSource::default()),
            aggregator: StyleAggregator::new(),
            stylesheet: StyleSheet::new(),
            phase: LoadPhase::Uninitialized,
            config: None,
            container: None,
        }
    }

    /// Replaces the data source used for key-driven colorization.
    pub fn set_data_source(&mut self, source: Arc<dyn ColorDataSource>) {
        self.source = source;
    }

    /// Current phase of the load sequence.
    #[must_use]
    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    /// The effective configuration, once a load has been started.
    #[must_use]
    pub fn config(&self) -> Option<&MapConfig> {
        self.config.as_ref()
    }

    /// Loads the map into `container`.
    ///
    /// Resolves the container, merges the options, installs the base
    /// styles, fetches and annotates the document, attaches it and applies
    /// the initial colorization. The completion callback fires once, after
    /// everything above succeeded; on any failure it does not fire and the
    /// error is returned instead.
    ///
    /// Only one load per loader: a second call is rejected with
    /// [`MapError::AlreadyLoading`].
    pub async fn load(&mut self, container: ContainerRef, mut options: MapOptions) -> MapResult<()> {
        if self.phase != LoadPhase::Uninitialized {
            return Err(MapError::AlreadyLoading);
        }

        let on_ready = options.on_ready.take();
        let config = MapConfig::merged(options);

        let handle = match container {
            ContainerRef::ById(id) => {
                let id = id.strip_prefix('#').unwrap_or(&id).to_string();
                match self.host.container_by_id(&id) {
                    Some(handle) => handle,
                    None => {
                        warn!("{} is not a valid id name or container handle", id);
                        return Err(MapError::Container(id));
                    }
                }
            }
            ContainerRef::ByHandle(handle) => handle,
        };

        self.host
            .set_container_size(handle, config.width, config.height);

        // Base presentation rules go in before anything is fetched, so the
        // document renders styled the moment it is attached.
        self.stylesheet.reset(BASE_RULES);
        self.host.install_styles(&self.stylesheet.content());

        self.container = Some(handle);
        self.config = Some(config.clone());
        self.phase = LoadPhase::Requesting;

        let payload = self.api.fetch_document(&config).await?;

        self.phase = LoadPhase::Annotating;
        let annotated = document::annotate(&payload)?;
        debug!("Annotated {} region shapes", annotated.regions.len());
        self.host.attach_document(handle, &annotated.svg);

        self.phase = LoadPhase::Ready;
        info!("Map {} attached and ready", config.map);

        self.apply_configured_colors().await?;

        if let Some(on_ready) = on_ready {
            on_ready(None);
        }
        Ok(())
    }

    /// Recolors an already-loaded map.
    ///
    /// With `Some(entries)` the given data set is applied; with `None` the
    /// configured `data`/`data_key` is reused. Each call renders the
    /// colorization rules from scratch, so repeating a data set yields
    /// byte-identical style content — never a superposition of passes.
    pub async fn recolor(&mut self, data: Option<Vec<ColorEntry>>) -> MapResult<()> {
        if self.phase != LoadPhase::Ready {
            return Err(MapError::NotReady);
        }

        match data {
            Some(entries) => {
                self.apply_colors(&entries);
                Ok(())
            }
            None => self.apply_configured_colors().await,
        }
    }

    /// Applies the colorization configured at load time: inline data when
    /// present, else the data key through the data source, else a clean
    /// (empty) colorization segment.
    async fn apply_configured_colors(&mut self) -> MapResult<()> {
        let config = self.config.as_ref().ok_or(MapError::NotReady)?;

        if let Some(entries) = config.data.clone() {
            self.apply_colors(&entries);
            return Ok(());
        }

        if let Some(key) = config.data_key.clone() {
            return self.colorize_from_source(&key).await;
        }

        self.apply_colors(&[]);
        Ok(())
    }

    /// Fetches records for `key` and applies them, keeping the container's
    /// loading marker set while the fetch is in flight.
    async fn colorize_from_source(&mut self, key: &str) -> MapResult<()> {
        let container = self.container.ok_or(MapError::NotReady)?;
        let source = Arc::clone(&self.source);

        self.host.set_loading(container, true);
        let fetched = source.fetch_colors(key).await;
        self.host.set_loading(container, false);

        let entries = fetched?;
        self.apply_colors(&entries);
        Ok(())
    }

    /// One colorization pass: aggregate, re-render the colorization
    /// segment from scratch, push the buffer to the host.
    fn apply_colors(&mut self, entries: &[ColorEntry]) {
        let groups = self.aggregator.aggregate(entries);
        let rules = render_rules(&groups);

        self.stylesheet.clear_appended();
        self.stylesheet.append(&rules);
        self.host.install_styles(&self.stylesheet.content());

        debug!(
            "Applied {} colorization rules for {} entries",
            groups.len(),
            entries.len()
        );
    }
}
