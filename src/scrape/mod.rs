//! Page retrieval and scraping
//!
//! This module contains everything between a search URL and raw records:
//! - Fetching pages over HTTP (`PageFetcher`, `HttpFetcher`)
//! - A parsed page with explicit structural lookups (`Document`)
//! - The proceeding detail page scraper
//! - The paginated results page scraper

mod document;
mod fetcher;
mod proceeding;
mod results;

pub use document::Document;
pub use fetcher::{build_http_client, FetchedPage, HttpFetcher, PageFetcher};
pub use proceeding::{parse_proceeding_page, CONTAINER_CLASS};
pub use results::{
    parse_results_page, BANNER_PATH, BUREAU_COLUMN, DOCKET_COLUMN, LAST_LINK_TEXT,
    RESULTS_BODY_PATH, SUBJECT_COLUMN,
};
