//! Page-count discovery
//!
//! The archive never states how many listing pages exist. The pagination
//! control on any page names a handful of page numbers, and crucially it
//! names the true final page once that page itself is probed. Jumping to
//! the highest number seen so far therefore converges in a few fetches
//! instead of walking every page.

use crate::search::ListingSource;
use crate::{DatelineError, Result};

/// Finds the highest valid page number by elastic search
///
/// Keeps a single scalar best-known maximum. Each iteration reads the
/// pagination control at the current probe page, takes the maximum numeric
/// token, and either terminates (the maximum stopped moving) or jumps the
/// probe to it.
///
/// # Arguments
///
/// * `source` - The archive to probe
/// * `start_page` - Where to begin, normally 1
///
/// # Returns
///
/// * `Ok(u32)` - The total page count
/// * `Err(DatelineError::NoData)` - A probed page had no numeric tokens
pub async fn discover_page_count<S>(source: &S, start_page: u32) -> Result<u32>
where
    S: ListingSource + ?Sized,
{
    let mut best_known: u32 = 0;
    let mut page = start_page;

    tracing::info!("Discovering total page count from page {}", start_page);
    loop {
        let tokens = source.pagination_tokens(page).await?;
        let page_max =
            tokens
                .iter()
                .copied()
                .max()
                .ok_or_else(|| DatelineError::NoData {
                    context: format!("no numeric pagination tokens on page {}", page),
                })?;

        // The control stops surfacing anything new exactly when the probe
        // sits on the final page.
        if page_max == best_known {
            tracing::info!("Total page count: {}", best_known);
            return Ok(best_known);
        }

        best_known = best_known.max(page_max);
        tracing::debug!(
            "Pagination on page {} reaches {}, jumping there",
            page,
            page_max
        );
        page = page_max;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::fixtures::{FixturePage, FixtureSource};

    /// A 25-page archive whose controls show a sliding window ending at
    /// the true last page only once probed near it.
    fn windowed_archive() -> FixtureSource {
        let mut pages: Vec<FixturePage> = (1..=25)
            .map(|n: u32| {
                let hi = (n + 2).min(25);
                let lo = n.saturating_sub(2).max(1);
                FixturePage::with_tokens((lo..=hi).collect())
            })
            .collect();
        // Early pages advertise a distant jump target, like a "... 10" link.
        pages[0] = FixturePage::with_tokens(vec![1, 2, 3, 10]);
        pages[9] = FixturePage::with_tokens(vec![8, 9, 10, 25]);
        FixtureSource::new(pages)
    }

    #[tokio::test]
    async fn test_discovery_terminates_at_true_count() {
        let source = windowed_archive();
        assert_eq!(discover_page_count(&source, 1).await.unwrap(), 25);
    }

    #[tokio::test]
    async fn test_discovery_from_any_start_page() {
        let source = windowed_archive();
        for start in [1, 5, 10, 20, 25] {
            assert_eq!(
                discover_page_count(&source, start).await.unwrap(),
                25,
                "starting from page {}",
                start
            );
        }
    }

    #[tokio::test]
    async fn test_discovery_single_page_archive() {
        let source = FixtureSource::new(vec![FixturePage::with_tokens(vec![1])]);
        assert_eq!(discover_page_count(&source, 1).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_discovery_fails_without_numeric_tokens() {
        // Non-numeric tokens ("Next") are filtered out before this layer,
        // so an all-text control arrives here as an empty list.
        let source = FixtureSource::new(vec![FixturePage::with_tokens(vec![])]);
        let err = discover_page_count(&source, 1).await.unwrap_err();
        assert!(matches!(err, DatelineError::NoData { .. }));
    }
}
