//! Discovery adapters.

mod pattern;

pub use pattern::GlobDiscovery;
pub(crate) use pattern::{full_pattern, match_options};
