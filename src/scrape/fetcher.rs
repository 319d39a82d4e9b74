//! HTTP fetcher implementation
//!
//! This module handles the single GET a query performs:
//! - Building the HTTP client with a proper user agent string
//! - Fetching the page body
//! - Classifying transport and status failures

use crate::config::Config;
use crate::{EcfsError, Result};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use url::Url;

/// A fetched page before parsing
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects
    pub final_url: Url,
    /// Page body content
    pub body: String,
}

/// Retrieves pages for a query
///
/// The core never talks to the network directly; it asks a `PageFetcher` for the
/// body behind a URL and parses what comes back. `HttpFetcher` is the production
/// implementation. Tests substitute canned pages.
pub trait PageFetcher {
    /// Performs one GET for `url`
    fn fetch(&self, url: &Url) -> impl Future<Output = Result<FetchedPage>> + Send;
}

/// `PageFetcher` backed by a `reqwest` client
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Builds a fetcher from the client configuration
    pub fn new(config: &Config) -> Result<Self> {
        let client = build_http_client(config).map_err(|source| EcfsError::Http {
            url: config.client.base_url.clone(),
            source,
        })?;
        Ok(Self { client })
    }

    /// Wraps an already configured client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| EcfsError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} returned HTTP {}", url, status.as_u16());
            return Err(EcfsError::HttpStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = response.url().clone();
        let body = response.text().await.map_err(|source| EcfsError::Http {
            url: url.to_string(),
            source,
        })?;

        tracing::debug!("Fetched {} bytes from {}", body.len(), final_url);
        Ok(FetchedPage { final_url, body })
    }
}

/// Builds an HTTP client with proper configuration
///
/// # Arguments
///
/// * `config` - The client and user agent configuration
///
/// # Returns
///
/// * `Ok(Client)` - Successfully built HTTP client
/// * `Err(reqwest::Error)` - Failed to build client
///
/// # Example
///
/// ```no_run
/// use ecfs_scrape::config::Config;
/// use ecfs_scrape::scrape::build_http_client;
///
/// let client = build_http_client(&Config::default()).unwrap();
/// ```
pub fn build_http_client(config: &Config) -> std::result::Result<Client, reqwest::Error> {
    let user_agent = &config.user_agent;
    // Format: Name/Version (+ContactURL; ContactEmail)
    let user_agent = format!(
        "{}/{} (+{}; {})",
        user_agent.client_name,
        user_agent.client_version,
        user_agent.contact_url,
        user_agent.contact_email
    );

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(config.client.timeout_secs))
        .connect_timeout(Duration::from_secs(config.client.connect_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}
