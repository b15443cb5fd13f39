//! Exclusion-policy gate
//!
//! The policy is consulted exactly once, before any content fetch. A fetch
//! or parse failure fails open: scraping proceeds by default rather than
//! blocking on an ancillary failure, and the fact is logged.

mod parser;

pub use parser::ParsedRobots;

use reqwest::Client;
use std::time::Duration;
use url::Url;

use crate::ConfigResult;

/// Derives the conventional robots.txt location from a listing base URL
pub fn derive_robots_url(base_url: &str) -> ConfigResult<String> {
    let url = Url::parse(base_url)
        .map_err(|e| crate::ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;
    Ok(format!("{}/robots.txt", url.origin().ascii_serialization()))
}

/// Fetches and parses the exclusion policy, failing open
///
/// One GET with a short timeout and no retries. Any failure along the way
/// (network error, non-success status, undecodable body) yields an
/// allow-all policy.
///
/// # Arguments
///
/// * `client` - The HTTP client to use
/// * `robots_url` - Where the policy document lives
/// * `timeout` - Per-request timeout for this single fetch
pub async fn fetch_policy(client: &Client, robots_url: &str, timeout: Duration) -> ParsedRobots {
    let response = match client.get(robots_url).timeout(timeout).send().await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!("Could not fetch {}: {}. Proceeding by default.", robots_url, e);
            return ParsedRobots::allow_all();
        }
    };

    if !response.status().is_success() {
        tracing::warn!(
            "Robots fetch returned {} for {}. Proceeding by default.",
            response.status(),
            robots_url
        );
        return ParsedRobots::allow_all();
    }

    match response.text().await {
        Ok(content) => ParsedRobots::from_content(&content),
        Err(e) => {
            tracing::warn!(
                "Could not read robots body from {}: {}. Proceeding by default.",
                robots_url,
                e
            );
            ParsedRobots::allow_all()
        }
    }
}

/// Checks if a URL is allowed by the parsed policy
pub fn is_allowed(robots: &ParsedRobots, url: &str, user_agent: &str) -> bool {
    robots.is_allowed(url, user_agent)
}
