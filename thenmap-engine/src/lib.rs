//! Map retrieval and load orchestration for thenmap choropleth maps.
//!
//! Fetches a vector map document from the map service, annotates its
//! shapes, attaches it to a host container and colors political entities
//! from caller-supplied data.
//!
//! # Architecture
//!
//! ## Components
//!
//! - **Config**: merges caller options over defaults into the effective
//!   run configuration
//! - **Api**: builds the retrieval request and fetches the document
//! - **Document**: parses the payload and annotates every region shape
//! - **Host**: the rendering-surface seam (container lookup, attachment,
//!   style installation)
//! - **Source**: pulls color records behind an opaque key when no inline
//!   data is configured
//! - **Loader**: orchestrates the whole sequence and keeps it recolorable
//!
//! ## Load sequence
//!
//! 1. Resolve the container and merge the configuration
//! 2. Install the base presentation rules
//! 3. Fetch the document from the map service
//! 4. Annotate shapes (labels, classes, hover filter) and attach
//! 5. Apply the initial colorization, inline or through the data source
//!
//! Annotation always completes before colorization runs — the generated
//! selectors target the classes assigned during annotation. Recoloring
//! re-renders the colorization rules from scratch on every pass, so it is
//! idempotent.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use thenmap_engine::host::mock::MockHost;
//! use thenmap_engine::{ContainerRef, MapLoader, MapOptions};
//! use thenmap_types::ColorEntry;
//!
//! # async fn run() -> thenmap_engine::MapResult<()> {
//! let host = Arc::new(MockHost::new().with_container("map", 1));
//! let mut loader = MapLoader::new(host);
//!
//! let options = MapOptions {
//!     data: Some(vec![ColorEntry::new("se", "#ff0000")]),
//!     ..Default::default()
//! };
//! loader.load(ContainerRef::ById("map".into()), options).await?;
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod config;
pub mod document;
mod error;
pub mod host;
mod loader;
pub mod source;

pub use api::{DEFAULT_API_URL, MapApiClient};
pub use config::{DEFAULT_MAP, DEFAULT_WIDTH, MapConfig, MapOptions, ReadyCallback};
pub use document::{AnnotatedDocument, HOVER_FILTER_ID, RegionShape, annotate};
pub use error::{MapError, MapResult};
pub use host::{ContainerHandle, ContainerRef, MapHost};
pub use loader::{LoadPhase, MapLoader};
pub use source::{ColorDataSource, SheetSource, SheetSourceConfig};
