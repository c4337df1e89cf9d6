//! Services layer (ports + adapters).
//!
//! - `ports`: contracts the core depends on (chapter sources, exporters, settings).
//! - `adapters`: filesystem and in-memory implementations, caching, paths.

pub mod adapters;
pub mod ports;
