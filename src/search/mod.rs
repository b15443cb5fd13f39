//! The date-location core
//!
//! Everything in this module reasons about one remote archive exposed as
//! numbered listing pages, newest first. The three operations — page-count
//! discovery, binary page location, and spillover collection — only talk
//! to the archive through the [`ListingSource`] trait, so the algorithms
//! are exercised against in-memory fixtures in tests and against HTTP in
//! production.

mod discovery;
mod locator;
mod spillover;

pub use discovery::discover_page_count;
pub use locator::locate_page;
pub use spillover::collect_links;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::Result;

/// The minimum and maximum record publication dates observed on one page
///
/// The search assumes ranges are non-increasing as page number increases;
/// adjacent pages may share boundary dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub min: NaiveDate,
    pub max: NaiveDate,
}

impl DateRange {
    pub fn new(min: NaiveDate, max: NaiveDate) -> Self {
        Self { min, max }
    }

    /// Date-only containment check
    pub fn contains(&self, target: NaiveDate) -> bool {
        self.min <= target && target <= self.max
    }
}

/// One record summary on a listing page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRecord {
    /// Publication date, date-only
    pub date: NaiveDate,
    /// Link to the record's detail page
    pub url: String,
}

/// A paginated archive, seen one listing page at a time
///
/// Implementations fail with `NoData` when a page yields nothing the
/// caller can reason about: `date_range` with zero parseable dates,
/// `pagination_tokens` implementations may also surface transient
/// conditions as fetch errors. Results are never cached across calls.
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Every numeric token in the page's pagination control
    async fn pagination_tokens(&self, page: u32) -> Result<Vec<u32>>;

    /// Minimum and maximum record publication dates on the page
    async fn date_range(&self, page: u32) -> Result<DateRange>;

    /// All record summaries on the page, in listing order
    async fn records(&self, page: u32) -> Result<Vec<ListingRecord>>;
}


#[cfg(test)]
mod tests {
    use super::fixtures::date;
    use super::*;

    #[test]
    fn test_date_range_contains() {
        let range = DateRange::new(date(2026, 1, 9), date(2026, 1, 11));
        assert!(range.contains(date(2026, 1, 9)));
        assert!(range.contains(date(2026, 1, 10)));
        assert!(range.contains(date(2026, 1, 11)));
        assert!(!range.contains(date(2026, 1, 8)));
        assert!(!range.contains(date(2026, 1, 12)));
    }
}
