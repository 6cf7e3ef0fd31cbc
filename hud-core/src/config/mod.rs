//! Configuration types
//!
//! Layout constants, status styling and notification policy. Defaults are
//! compiled in; hosts with a filesystem can override them from TOML.

#[cfg(feature = "toml")]
pub mod loader;
pub mod types;

pub use types::*;
