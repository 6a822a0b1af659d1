//! Configuration loading and schema definitions
//!
//! Scanning behavior is configurable through an optional TOML file.

mod loader;
mod schema;

pub use loader::Config;
pub use schema::*;
