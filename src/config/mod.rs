//! Configuration module for dateline
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files. Every section has built-in defaults targeting the reference
//! archive, so a config file is only needed to override them.
//!
//! # Example
//!
//! ```no_run
//! use dateline::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("dateline.toml")).unwrap();
//! println!("Scraping {}", config.source.base_url);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, FetchConfig, OutputConfig, SelectorConfig, SourceConfig, UserAgentConfig,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash};

pub use validation::validate;
