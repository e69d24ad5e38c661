//! Configuration module for tally-cli
//!
//! This module provides configuration management:
//!
//! - `paths`: Platform-appropriate path resolution for the data directory
//! - `settings`: Persisted user preferences

pub mod paths;
pub mod settings;

pub use paths::TallyPaths;
pub use settings::Settings;
