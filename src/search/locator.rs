//! Binary page location
//!
//! Listing pages are sorted newest-first, so per-page date ranges are
//! non-increasing in the page number and a binary search converges even
//! though adjacent pages may share boundary dates. The comparator is
//! range containment rather than equality.

use chrono::NaiveDate;

use crate::search::ListingSource;
use crate::Result;

/// Binary-searches `[lo, hi]` for a page whose date range contains `target`
///
/// A containing page is recorded and the search continues toward
/// lower-numbered (newer) pages: boundary overlap means the day's records
/// may begin on an even newer page than the first containing page found,
/// so the first hit is deliberately not trusted to be the earliest one.
///
/// Pages are 1-based; callers pass `lo >= 1`.
///
/// # Returns
///
/// The last recorded containing page, or — when no range contains the
/// target — the insertion point `lo` at termination. The fallback page is
/// not validated here; the collector decides whether it actually holds
/// relevant records.
pub async fn locate_page<S>(source: &S, lo: u32, hi: u32, target: NaiveDate) -> Result<u32>
where
    S: ListingSource + ?Sized,
{
    let (mut lo, mut hi) = (lo, hi);
    let mut candidate = None;

    while lo <= hi {
        let mid = lo + (hi - lo) / 2;
        let range = source.date_range(mid).await?;
        tracing::debug!(
            "Page {} spans {}..={} (window {}..={})",
            mid,
            range.min,
            range.max,
            lo,
            hi
        );

        if range.contains(target) {
            candidate = Some(mid);
            hi = mid - 1;
        } else if target < range.min {
            // Target is strictly older than this page; older records live
            // on higher-numbered pages.
            lo = mid + 1;
        } else {
            hi = mid - 1;
        }
    }

    let located = candidate.unwrap_or(lo);
    tracing::info!("Located page {} for {}", located, target);
    Ok(located)
}
