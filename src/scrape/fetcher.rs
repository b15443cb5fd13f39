//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for the scraper:
//! - Building an HTTP client with a proper user agent string
//! - GET requests with bounded retry and exponential backoff
//! - Error classification (transient vs. terminal)
//!
//! Transient failures — request timeouts, connection errors, 5xx
//! responses — are retried; the delay before retry `k` (0-indexed) is
//! `2^(k+1)` backoff units. Everything else fails immediately: retrying
//! cannot fix a 404 or a structurally broken body.

use reqwest::Client;
use std::time::Duration;

use crate::config::Config;
use crate::{DatelineError, Result};

/// Builds an HTTP client with proper configuration
///
/// The user agent is rendered `Name/Version (+url; email)` so site
/// operators can identify and reach the scraper.
pub fn build_http_client(config: &Config) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.header_value())
        .timeout(Duration::from_secs(config.fetch.request_timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Delay before retry `retry` (0-indexed): `2^(retry+1)` backoff units
pub fn backoff_delay(retry: u32, unit: Duration) -> Duration {
    unit * 2u32.pow(retry + 1)
}

/// Outcome of a single fetch attempt, before retry classification
enum FetchFailure {
    /// Worth retrying: timeout, connection error, 5xx, truncated body
    Transient(String),
    /// Not worth retrying
    Terminal(DatelineError),
}

/// Performs one logical content retrieval with bounded retry
///
/// Cloning is cheap; the underlying client is reference-counted.
#[derive(Clone)]
pub struct Fetcher {
    client: Client,
    max_retries: u32,
    backoff_unit: Duration,
}

impl Fetcher {
    pub fn new(client: Client, max_retries: u32, backoff_unit: Duration) -> Self {
        Self {
            client,
            max_retries,
            backoff_unit,
        }
    }

    /// Builds the client and fetcher straight from configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = build_http_client(config)?;
        Ok(Self::new(
            client,
            config.fetch.max_retries,
            Duration::from_millis(config.fetch.backoff_unit_ms),
        ))
    }

    /// The underlying client, for one-shot requests outside retry logic
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Fetches a URL's body as text, retrying transient failures
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The response body
    /// * `Err(DatelineError::FetchExhausted)` - Transient failures used up
    ///   the attempt budget
    /// * `Err(DatelineError::Fetch)` - A non-retryable failure
    pub async fn fetch_text(&self, url: &str) -> Result<String> {
        let mut failures = 0;
        loop {
            tracing::info!(
                "Fetching {} (attempt {}/{})",
                url,
                failures + 1,
                self.max_retries
            );
            match self.try_fetch(url).await {
                Ok(body) => return Ok(body),
                Err(FetchFailure::Transient(reason)) => {
                    failures += 1;
                    if failures >= self.max_retries {
                        tracing::error!("Giving up on {} after {} attempts", url, failures);
                        return Err(DatelineError::FetchExhausted {
                            url: url.to_string(),
                            attempts: failures,
                            reason,
                        });
                    }
                    let delay = backoff_delay(failures - 1, self.backoff_unit);
                    tracing::info!(
                        "Request failed: {}. Retry {} in {:?}.",
                        reason,
                        failures,
                        delay
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(FetchFailure::Terminal(error)) => {
                    tracing::error!("Unretryable failure for {}: {}", url, error);
                    return Err(error);
                }
            }
        }
    }

    async fn try_fetch(&self, url: &str) -> std::result::Result<String, FetchFailure> {
        let response = match self.client.get(url).send().await {
            Ok(response) => response,
            Err(e) => {
                if e.is_timeout() || e.is_connect() {
                    return Err(FetchFailure::Transient(e.to_string()));
                }
                return Err(FetchFailure::Terminal(DatelineError::Fetch {
                    url: url.to_string(),
                    source: e,
                }));
            }
        };

        let status = response.status();
        if status.is_server_error() {
            return Err(FetchFailure::Transient(format!("HTTP {}", status)));
        }

        let response = match response.error_for_status() {
            Ok(response) => response,
            Err(e) => {
                return Err(FetchFailure::Terminal(DatelineError::Fetch {
                    url: url.to_string(),
                    source: e,
                }))
            }
        };

        match response.text().await {
            Ok(body) => Ok(body),
            // A body cut off mid-transfer is a network condition like any
            // other and gets the same retry treatment.
            Err(e) => Err(FetchFailure::Transient(e.to_string())),
        }
    }
}
