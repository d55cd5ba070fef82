//! Styling pipeline for the thenmap engine.
//!
//! Turns caller-supplied color data into the minimal set of style rules a
//! rendering surface needs:
//!
//! - **Resolver**: validates/normalizes a single raw color expression,
//!   degrading to a fallback instead of failing
//! - **Aggregator**: groups (entity, color) pairs under shared resolved
//!   colors and serializes them into rules
//! - **StyleSheet**: the mutable style buffer, split into a base segment
//!   (fixed presentation rules) and a colorization segment that is
//!   re-rendered from scratch on every pass
//!
//! The pipeline is pure — no I/O, no async. Pushing the buffer content to
//! an actual rendering surface is the loader's job.

mod aggregator;
mod base;
mod resolver;
mod stylesheet;

pub use aggregator::{StyleAggregator, render_rules};
pub use base::BASE_RULES;
pub use resolver::{ColorResolver, DEFAULT_COLOR};
pub use stylesheet::StyleSheet;
