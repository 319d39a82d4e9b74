use serde::Deserialize;

/// Public ECFS proceeding search endpoint
pub const DEFAULT_BASE_URL: &str = "http://apps.fcc.gov/ecfs/proceeding_search/execute";

/// Main configuration structure for ECFS-Scrape
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub client: ClientConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
}

/// Search endpoint and transport configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Proceeding search endpoint queries are sent to
    #[serde(rename = "base-url", default = "default_base_url")]
    pub base_url: String,

    /// Total request timeout (seconds)
    #[serde(rename = "timeout-secs", default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Connection establishment timeout (seconds)
    #[serde(
        rename = "connect-timeout-secs",
        default = "default_connect_timeout_secs"
    )]
    pub connect_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UserAgentConfig {
    /// Name of the client
    #[serde(rename = "client-name", default = "default_client_name")]
    pub client_name: String,

    /// Version of the client
    #[serde(rename = "client-version", default = "default_client_version")]
    pub client_version: String,

    /// URL with information about the client
    #[serde(rename = "contact-url", default = "default_contact_url")]
    pub contact_url: String,

    /// Email address for client-related contact
    #[serde(rename = "contact-email", default = "default_contact_email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            client_name: default_client_name(),
            client_version: default_client_version(),
            contact_url: default_contact_url(),
            contact_email: default_contact_email(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_client_name() -> String {
    "ECFS-Scrape".to_string()
}

fn default_client_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_contact_url() -> String {
    "https://www.fcc.gov/ecfs".to_string()
}

fn default_contact_email() -> String {
    "ecfs-scrape@localhost.localdomain".to_string()
}
