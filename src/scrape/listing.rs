//! Listing-page field extraction
//!
//! A listing page carries two things the search cares about: pagination
//! control elements (numeric texts are page numbers, "Next"-style texts
//! are noise) and record-summary containers holding a publication date and
//! a link. The selectors for all of these come from configuration;
//! [`HttpListing`] glues the extractor to the fetcher and implements
//! [`ListingSource`] over HTTP.

use async_trait::async_trait;
use chrono::NaiveDate;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::config::SelectorConfig;
use crate::dates::parse_listing_date;
use crate::scrape::fetcher::Fetcher;
use crate::search::{DateRange, ListingRecord, ListingSource};
use crate::{ConfigError, ConfigResult, DatelineError, Result};

/// Compiled CSS selectors for the listing extractor
#[derive(Debug, Clone)]
pub struct ListingSelectors {
    pagination: Selector,
    record: Selector,
    record_date: Selector,
    record_link: Selector,
}

impl ListingSelectors {
    /// Compiles the configured selector strings
    pub fn from_config(config: &SelectorConfig) -> ConfigResult<Self> {
        Ok(Self {
            pagination: compile(&config.pagination, "pagination")?,
            record: compile(&config.record, "record")?,
            record_date: compile(&config.record_date, "record-date")?,
            record_link: compile(&config.record_link, "record-link")?,
        })
    }
}

fn compile(selector: &str, name: &str) -> ConfigResult<Selector> {
    Selector::parse(selector)
        .map_err(|e| ConfigError::InvalidSelector(format!("{} = '{}': {:?}", name, selector, e)))
}

/// Extracts every numeric pagination token from the document
///
/// Non-numeric tokens ("Next", ellipses) are ignored; thousands
/// separators are stripped before parsing.
pub fn extract_pagination_tokens(document: &Html, selectors: &ListingSelectors) -> Vec<u32> {
    document
        .select(&selectors.pagination)
        .filter_map(|element| {
            let text = element_text(&element);
            text.replace(',', "").parse::<u32>().ok()
        })
        .collect()
}

/// Extracts every parseable record publication date from the document
///
/// Individual unparseable date texts are skipped; whether an empty result
/// is fatal is the caller's call.
pub fn extract_record_dates(document: &Html, selectors: &ListingSelectors) -> Vec<NaiveDate> {
    document
        .select(&selectors.record)
        .filter_map(|record| {
            record
                .select(&selectors.record_date)
                .next()
                .and_then(|e| parse_listing_date(&element_text(&e)))
        })
        .collect()
}

/// Extracts all record summaries (date + resolved link) in listing order
///
/// A record container missing its date or link element means the markup
/// no longer matches the configured selectors; that is a structural
/// failure, not something retries or skipping can paper over.
pub fn extract_records(
    document: &Html,
    selectors: &ListingSelectors,
    page_url: &str,
) -> Result<Vec<ListingRecord>> {
    let base = Url::parse(page_url)?;
    let mut records = Vec::new();

    for container in document.select(&selectors.record) {
        let date_text = container
            .select(&selectors.record_date)
            .next()
            .map(|e| element_text(&e))
            .ok_or_else(|| structural(page_url, "record without a date element"))?;

        let date = parse_listing_date(&date_text).ok_or_else(|| {
            structural(page_url, &format!("unparseable record date {:?}", date_text))
        })?;

        let href = container
            .select(&selectors.record_link)
            .next()
            .and_then(|e| e.value().attr("href"))
            .ok_or_else(|| structural(page_url, "record without a link"))?;

        let url = base.join(href)?.to_string();
        records.push(ListingRecord { date, url });
    }

    Ok(records)
}

fn element_text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn structural(url: &str, message: &str) -> DatelineError {
    DatelineError::StructuralParse {
        url: url.to_string(),
        message: message.to_string(),
    }
}

/// The HTTP-backed [`ListingSource`]
///
/// Fetches `{base}page/{n}/` through the retrying fetcher and runs the
/// extractor over the response. Nothing is cached: every probe recomputes
/// from a fresh fetch.
pub struct HttpListing {
    fetcher: Fetcher,
    base_url: String,
    selectors: ListingSelectors,
}

impl HttpListing {
    pub fn new(fetcher: Fetcher, base_url: String, selectors: ListingSelectors) -> Self {
        Self {
            fetcher,
            base_url,
            selectors,
        }
    }

    /// The URL of listing page `page`
    pub fn page_url(&self, page: u32) -> String {
        format!("{}page/{}/", self.base_url, page)
    }
}

#[async_trait]
impl ListingSource for HttpListing {
    async fn pagination_tokens(&self, page: u32) -> Result<Vec<u32>> {
        let url = self.page_url(page);
        let body = self.fetcher.fetch_text(&url).await?;
        let document = Html::parse_document(&body);
        Ok(extract_pagination_tokens(&document, &self.selectors))
    }

    async fn date_range(&self, page: u32) -> Result<DateRange> {
        let url = self.page_url(page);
        let body = self.fetcher.fetch_text(&url).await?;
        let document = Html::parse_document(&body);
        let dates = extract_record_dates(&document, &self.selectors);

        let min = dates.iter().copied().min();
        let max = dates.iter().copied().max();
        match (min, max) {
            (Some(min), Some(max)) => Ok(DateRange::new(min, max)),
            _ => Err(DatelineError::NoData {
                context: format!("no record dates extracted from {}", url),
            }),
        }
    }

    async fn records(&self, page: u32) -> Result<Vec<ListingRecord>> {
        let url = self.page_url(page);
        let body = self.fetcher.fetch_text(&url).await?;
        let document = Html::parse_document(&body);
        extract_records(&document, &self.selectors, &url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SelectorConfig;

    fn selectors() -> ListingSelectors {
        ListingSelectors::from_config(&SelectorConfig::default()).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const PAGE: &str = r##"<html><body>
        <div class="o-opin-article">
            <span class="opinion-date">January 11, 2026 09:12 IST</span>
            <h3><a class="opinion-news-title" href="/business/alpha/">Alpha</a></h3>
        </div>
        <div class="o-opin-article">
            <span class="opinion-date">January 10, 2026 21:40 IST</span>
            <h3><a class="opinion-news-title" href="https://news.example.com/business/beta/">Beta</a></h3>
        </div>
        <div class="pagination">
            <a class="page-numbers" href="#">1</a>
            <a class="page-numbers" href="#">2</a>
            <a class="page-numbers" href="#">1,024</a>
            <a class="page-numbers" href="#">Next</a>
        </div>
    </body></html>"##;

    #[test]
    fn test_pagination_tokens_numeric_only() {
        let document = Html::parse_document(PAGE);
        let tokens = extract_pagination_tokens(&document, &selectors());
        assert_eq!(tokens, vec![1, 2, 1024]);
    }

    #[test]
    fn test_record_dates() {
        let document = Html::parse_document(PAGE);
        let dates = extract_record_dates(&document, &selectors());
        assert_eq!(dates, vec![date(2026, 1, 11), date(2026, 1, 10)]);
    }

    #[test]
    fn test_records_resolve_relative_links() {
        let document = Html::parse_document(PAGE);
        let records = extract_records(
            &document,
            &selectors(),
            "https://news.example.com/section/business/page/2/",
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].url, "https://news.example.com/business/alpha/");
        assert_eq!(records[1].url, "https://news.example.com/business/beta/");
    }

    #[test]
    fn test_record_without_link_is_structural_error() {
        let html = r#"<div class="o-opin-article">
            <span class="opinion-date">January 10, 2026</span>
        </div>"#;
        let document = Html::parse_document(html);
        let err = extract_records(&document, &selectors(), "https://news.example.com/")
            .unwrap_err();
        assert!(matches!(err, DatelineError::StructuralParse { .. }));
    }

    #[test]
    fn test_unparseable_record_date_is_structural_error() {
        let html = r#"<div class="o-opin-article">
            <span class="opinion-date">three days ago</span>
            <a class="opinion-news-title" href="/x/">X</a>
        </div>"#;
        let document = Html::parse_document(html);
        let err = extract_records(&document, &selectors(), "https://news.example.com/")
            .unwrap_err();
        assert!(matches!(err, DatelineError::StructuralParse { .. }));
    }

    #[test]
    fn test_unparseable_date_skipped_by_range_extractor() {
        let html = r#"
        <div class="o-opin-article">
            <span class="opinion-date">three days ago</span>
            <a class="opinion-news-title" href="/x/">X</a>
        </div>
        <div class="o-opin-article">
            <span class="opinion-date">January 10, 2026</span>
            <a class="opinion-news-title" href="/y/">Y</a>
        </div>"#;
        let document = Html::parse_document(html);
        let dates = extract_record_dates(&document, &selectors());
        assert_eq!(dates, vec![date(2026, 1, 10)]);
    }

    #[test]
    fn test_page_url() {
        let listing = HttpListing::new(
            Fetcher::from_config(&crate::config::Config::default()).unwrap(),
            "https://news.example.com/section/business/".to_string(),
            selectors(),
        );
        assert_eq!(
            listing.page_url(7),
            "https://news.example.com/section/business/page/7/"
        );
    }
}
