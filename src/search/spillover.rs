//! Spillover collection
//!
//! A day's records rarely align with page boundaries: they can start
//! partway down the located page and run onto one or more following
//! pages. The collector walks forward from the located page, gathering
//! every record dated exactly on the target, and stops at the first older
//! record or at the last available page.

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::search::ListingSource;
use crate::{DatelineError, Result};

/// What the walk has seen so far on the current page
///
/// Transitioned only by record-date comparisons; `Collecting` on page
/// exit is the sole signal to advance to the next page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PagePhase {
    /// Only records newer than the target (or none at all) seen yet
    Seeking,
    /// At least one target-date record found on this page
    Collecting,
}

/// Collects every record link matching `target`, starting at `start_page`
///
/// The locator already biases toward the earliest qualifying page, so the
/// walk only ever moves forward. Per page, records are compared to the
/// target date:
/// - newer: skipped, the window starts further down the page;
/// - equal: collected;
/// - older: the window is over — the set is returned, or the run fails
///   with `NoMatch` if nothing was ever collected.
///
/// A page that yields no target-date record ends the walk; a page that
/// does may spill onto the next one, up to `total_pages`.
pub async fn collect_links<S>(
    source: &S,
    start_page: u32,
    target: NaiveDate,
    total_pages: u32,
) -> Result<BTreeSet<String>>
where
    S: ListingSource + ?Sized,
{
    let mut links = BTreeSet::new();
    let mut page = start_page;

    loop {
        let records = source.records(page).await?;
        let mut phase = PagePhase::Seeking;

        for record in records {
            if record.date > target {
                continue;
            }
            if record.date == target {
                phase = PagePhase::Collecting;
                links.insert(record.url);
                continue;
            }
            // First older record: everything after it is outside the window.
            tracing::debug!("Reached {} on page {}, window closed", record.date, page);
            return finish(links, target);
        }

        if page >= total_pages {
            tracing::debug!("Reached last page {} while collecting", page);
            return finish(links, target);
        }

        match phase {
            PagePhase::Collecting => {
                tracing::debug!("Page {} ended inside the target window, advancing", page);
                page += 1;
            }
            PagePhase::Seeking => return finish(links, target),
        }
    }
}

fn finish(links: BTreeSet<String>, target: NaiveDate) -> Result<BTreeSet<String>> {
    if links.is_empty() {
        Err(DatelineError::NoMatch { date: target })
    } else {
        tracing::info!("Collected {} record links for {}", links.len(), target);
        Ok(links)
    }
}
