//! Configuration module for News-Scout
//!
//! Each news source is described by one JSON file in the sources directory.
//! This module handles loading the directory, parsing each file, and
//! validating the result. A malformed source file is logged and skipped so
//! one bad entry never aborts the whole load.
//!
//! # Example
//!
//! ```no_run
//! use news_scout::config::load_all_sources;
//! use std::path::Path;
//!
//! let sources = load_all_sources(Path::new("sources")).unwrap();
//! println!("Loaded {} sources", sources.len());
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{CategoryConfig, SourceConfig};

// Re-export parser functions
pub use parser::{load_all_sources, load_source_config};

// Re-export validation
pub use validation::validate;
