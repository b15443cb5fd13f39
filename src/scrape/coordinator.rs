//! Scrape coordinator - main orchestration logic
//!
//! One run is a straight line: consult the exclusion policy, discover how
//! many listing pages exist, binary-search for the page holding the target
//! date, collect the day's record links (including spillover onto later
//! pages), resolve each link to an article, and store the lot. Every fatal
//! condition bubbles out of here untouched; there is no partial-success
//! path.

use std::path::Path;
use std::time::Duration;

use chrono::NaiveDate;

use crate::config::Config;
use crate::robots;
use crate::scrape::article::{extract_article, Article};
use crate::scrape::fetcher::Fetcher;
use crate::scrape::listing::{HttpListing, ListingSelectors};
use crate::search::{collect_links, discover_page_count, locate_page};
use crate::storage::{ArticleStore, SqliteStorage};
use crate::{DatelineError, Result};

/// What a completed run produced
#[derive(Debug, Clone, Copy)]
pub struct ScrapeSummary {
    /// The target date
    pub date: NaiveDate,
    /// Unique record links collected from the listings
    pub located: usize,
    /// Links that resolved to an accessible article
    pub resolved: usize,
    /// Rows actually inserted (duplicates collapse in the store)
    pub stored: usize,
}

/// Main scrape coordinator
pub struct Coordinator {
    config: Config,
    fetcher: Fetcher,
}

impl Coordinator {
    /// Creates a coordinator, building the HTTP client from configuration
    pub fn new(config: Config) -> Result<Self> {
        let fetcher = Fetcher::from_config(&config)?;
        Ok(Self { config, fetcher })
    }

    /// Runs the full scrape for one target date
    pub async fn run(&self, target: NaiveDate) -> Result<ScrapeSummary> {
        // The policy is consulted exactly once, before any content fetch.
        self.check_policy().await?;

        let selectors = ListingSelectors::from_config(&self.config.selectors)?;
        let listing = HttpListing::new(
            self.fetcher.clone(),
            self.config.source.base_url.clone(),
            selectors,
        );

        let total_pages = discover_page_count(&listing, 1).await?;
        let start_page = locate_page(&listing, 1, total_pages, target).await?;
        let links = collect_links(&listing, start_page, target, total_pages).await?;
        let located = links.len();

        let articles = self.resolve_articles(&links).await?;
        if articles.is_empty() {
            return Err(DatelineError::AllUnavailable {
                date: target,
                total: located,
            });
        }
        let resolved = articles.len();

        let stored = self.store_articles(&articles)?;

        Ok(ScrapeSummary {
            date: target,
            located,
            resolved,
            stored,
        })
    }

    /// Fetches the exclusion policy (fail-open) and aborts on denial
    async fn check_policy(&self) -> Result<()> {
        let robots_url = match &self.config.source.robots_url {
            Some(url) => url.clone(),
            None => robots::derive_robots_url(&self.config.source.base_url)?,
        };
        let agent = self.config.user_agent.header_value();
        let timeout = Duration::from_secs(self.config.fetch.robots_timeout_secs);

        let policy = robots::fetch_policy(self.fetcher.client(), &robots_url, timeout).await;
        if !robots::is_allowed(&policy, &self.config.source.base_url, &agent) {
            return Err(DatelineError::PolicyDenied {
                url: self.config.source.base_url.clone(),
            });
        }
        Ok(())
    }

    /// Resolves each collected link to an article, skipping inaccessible
    /// records
    async fn resolve_articles(
        &self,
        links: &std::collections::BTreeSet<String>,
    ) -> Result<Vec<Article>> {
        let mut articles = Vec::new();
        for link in links {
            let body = self.fetcher.fetch_text(link).await?;
            match extract_article(&body, link)? {
                Some(article) => articles.push(article),
                None => tracing::info!("No accessible article block at {}, skipping", link),
            }
        }
        Ok(articles)
    }

    /// Inserts the resolved articles, logging row counts around the write
    fn store_articles(&self, articles: &[Article]) -> Result<usize> {
        let mut storage = SqliteStorage::new(Path::new(&self.config.output.database_path))?;

        let before = storage.count_articles()?;
        tracing::info!("Articles table holds {} rows before insert", before);

        let stored = storage.insert_articles(articles)?;

        let after = storage.count_articles()?;
        tracing::info!(
            "Inserted {} of {} articles ({} rows after insert)",
            stored,
            articles.len(),
            after
        );

        Ok(stored)
    }
}

/// Runs the full scrape operation for one target date
///
/// This is the main entry point. It will:
/// 1. Consult the exclusion policy (fail-open on fetch failure)
/// 2. Discover the total listing page count
/// 3. Locate the page where the target date's records begin
/// 4. Collect every record link for the date, following spillover
/// 5. Resolve each link to an article, skipping inaccessible ones
/// 6. Store the articles, collapsing duplicate titles
pub async fn run_scrape(config: Config, target: NaiveDate) -> Result<ScrapeSummary> {
    Coordinator::new(config)?.run(target).await
}
