//! Scraping module - HTTP fetching, extraction, and orchestration
//!
//! This module contains everything that touches the remote archive:
//! - HTTP fetching with retry and exponential backoff
//! - Listing-page field extraction (pagination tokens, record summaries)
//! - Article detail extraction from JSON-LD structured data
//! - Overall scrape coordination

mod article;
mod coordinator;
mod fetcher;
mod listing;

pub use article::{extract_article, Article};
pub use coordinator::{run_scrape, Coordinator, ScrapeSummary};
pub use fetcher::{backoff_delay, build_http_client, Fetcher};
pub use listing::{
    extract_pagination_tokens, extract_record_dates, extract_records, HttpListing,
    ListingSelectors,
};
