use serde::Deserialize;

/// Main configuration structure for dateline
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    pub source: SourceConfig,
    pub fetch: FetchConfig,
    #[serde(rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    pub selectors: SelectorConfig,
    pub output: OutputConfig,
}

/// The archive section being scraped
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Base URL of the paginated listing section; page `n` lives at
    /// `{base-url}page/{n}/`. Must end with a slash.
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Robots.txt location. Derived from the base URL's origin when absent.
    #[serde(rename = "robots-url")]
    pub robots_url: Option<String>,
}

/// Fetch behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Maximum attempts for one logical fetch (first try + retries)
    #[serde(rename = "max-retries")]
    pub max_retries: u32,

    /// Per-request timeout in seconds
    #[serde(rename = "request-timeout-secs")]
    pub request_timeout_secs: u64,

    /// Timeout for the single robots.txt fetch, kept short because some
    /// hosts let that path hang
    #[serde(rename = "robots-timeout-secs")]
    pub robots_timeout_secs: u64,

    /// One backoff unit in milliseconds; the delay before retry `k` is
    /// `2^(k+1)` units
    #[serde(rename = "backoff-unit-ms")]
    pub backoff_unit_ms: u64,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the scraper
    #[serde(rename = "scraper-name")]
    pub scraper_name: String,

    /// Version of the scraper
    #[serde(rename = "scraper-version")]
    pub scraper_version: String,

    /// URL with information about the scraper
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for scraper-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl UserAgentConfig {
    /// Renders the User-Agent header value: `Name/Version (+url; email)`
    pub fn header_value(&self) -> String {
        format!(
            "{}/{} (+{}; {})",
            self.scraper_name, self.scraper_version, self.contact_url, self.contact_email
        )
    }
}

/// CSS selectors for the listing-page field extractor
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Pagination-control elements; numeric texts are page numbers,
    /// anything else ("Next", ellipses) is ignored
    pub pagination: String,

    /// One record-summary container per listed article
    pub record: String,

    /// Publication-date element inside a record container
    #[serde(rename = "record-date")]
    pub record_date: String,

    /// Link element inside a record container
    #[serde(rename = "record-link")]
    pub record_link: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the SQLite database file
    #[serde(rename = "database-path")]
    pub database_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            fetch: FetchConfig::default(),
            user_agent: UserAgentConfig::default(),
            selectors: SelectorConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: "https://indianexpress.com/section/business/".to_string(),
            robots_url: None,
        }
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            request_timeout_secs: 15,
            robots_timeout_secs: 2,
            backoff_unit_ms: 1000,
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            scraper_name: "Dateline".to_string(),
            scraper_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://github.com/dateline/dateline".to_string(),
            contact_email: "dateline@example.com".to_string(),
        }
    }
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            pagination: "a.page-numbers".to_string(),
            record: "div.o-opin-article".to_string(),
            record_date: "span.opinion-date".to_string(),
            record_link: "a.opinion-news-title".to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            database_path: "./dateline.db".to_string(),
        }
    }
}
