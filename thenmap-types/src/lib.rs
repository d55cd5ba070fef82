//! Core type definitions for the thenmap engine.
//!
//! This crate defines the fundamental types shared by the styling pipeline
//! and the map loader:
//! - Color entries (caller- or source-supplied id/color pairs)
//! - Resolved colors (normalized, renderer-safe color expressions)
//! - Color groups (entities bucketed under one shared color)
//!
//! Anything that performs I/O or owns mutable rendering state belongs in
//! `thenmap-style` or `thenmap-engine`, not here.

mod color;
mod entry;

pub use color::{ColorGroup, ResolvedColor};
pub use entry::ColorEntry;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in type operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
