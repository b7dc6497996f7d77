//! Maintenance passes for the static site's `public/` output.

pub mod canonical;
pub mod config;
pub mod timestamps;

pub use canonical::{update_canonical_links, UpdateReport};
pub use config::{CanonicalConfig, TimestampConfig};
pub use timestamps::update_timestamps;
