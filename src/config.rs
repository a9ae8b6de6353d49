//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to tune the demo player
//! and helpers to locate and load configuration from disk.

mod load;
mod schema;

pub use load::default_log_path;
pub use schema::*;

#[cfg(test)]
mod tests;
