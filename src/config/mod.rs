//! Configuration module for ECFS-Scrape
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! All settings have defaults pointing at the public ECFS search.
//!
//! # Example
//!
//! ```no_run
//! use ecfs_scrape::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("ecfs.toml")).unwrap();
//! println!("Requests time out after {}s", config.client.timeout_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{ClientConfig, Config, UserAgentConfig, DEFAULT_BASE_URL};

// Re-export parser functions
pub use parser::{load_config, parse_config};
