//! Error types for the map engine.

use thiserror::Error;

/// Result type for map engine operations.
pub type MapResult<T> = Result<T, MapError>;

/// Errors that can occur while loading or recoloring a map.
#[derive(Debug, Error)]
pub enum MapError {
    /// The container reference did not resolve to an element.
    #[error("{0} is not a valid id name or container handle")]
    Container(String),

    /// Network error talking to the map service or a data source.
    #[error("network error: {0}")]
    Network(String),

    /// The map service answered with a non-success status.
    #[error("map service returned status {status}: {message}")]
    Service { status: u16, message: String },

    /// The map document payload could not be parsed or annotated.
    #[error("document error: {0}")]
    Document(String),

    /// A color data source failed or returned unusable records.
    #[error("data source error: {0}")]
    DataSource(String),

    /// A load has already been started on this loader.
    #[error("a map load has already been started for this container")]
    AlreadyLoading,

    /// Recoloring was requested before the map reached the ready phase.
    #[error("map is not ready for recoloring")]
    NotReady,
}
