//! ECFS-Scrape: structured access to the FCC's proceeding search
//!
//! The ECFS proceeding search exposes no machine-readable API, only rendered HTML.
//! This crate translates named search constraints into search URLs, fetches the
//! resulting pages and scrapes them back into structured records.

pub mod config;
pub mod model;
pub mod output;
pub mod query;
pub mod scrape;

use thiserror::Error;

/// Main error type for ECFS-Scrape operations
#[derive(Debug, Error)]
pub enum EcfsError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Unrecognized constraint key: {0}")]
    Validation(String),

    #[error("HTML parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Format error: {0}")]
    Format(#[from] FormatError),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("HTTP status {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    #[error("URL parse error: {0}")]
    UrlParse(#[from] ::url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Structural mismatches between a fetched page and the expected layout
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Missing expected element: {0}")]
    MissingElement(String),

    #[error("Label/value alternation broken at span {position}: {message}")]
    BrokenAlternation { position: usize, message: String },

    #[error("Unexpected page layout: {0}")]
    UnexpectedLayout(String),

    #[error("Inconsistent pagination counts: {0}")]
    InconsistentCounts(String),

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),
}

/// Numeric fields that fail to parse
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("Field `{field}` is not an integer: '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    #[error("Constraint `page_number` must be set for a results query")]
    MissingPageNumber,
}

/// Result type alias for ECFS-Scrape operations
pub type Result<T> = std::result::Result<T, EcfsError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for structural parsing operations
pub type ParseResult<T> = std::result::Result<T, ParseError>;

// Re-export commonly used types
pub use config::Config;
pub use model::{Fields, Proceeding, RawResults, ResultSet};
pub use query::{
    build_query_url, ConstraintKey, ConstraintStore, ProceedingsQuery, QueryOutcome, QueryOutput,
    QueryWarning,
};
pub use scrape::{FetchedPage, HttpFetcher, PageFetcher};
