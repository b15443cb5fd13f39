//! Per-record detail extraction
//!
//! Article pages embed their metadata in JSON-LD structured-data blocks
//! (`<script type="application/ld+json">`). The block describing a freely
//! accessible `NewsArticle` carries everything worth storing; pages
//! without one — paywalled or agency-republished content — are skipped
//! rather than treated as errors.

use chrono::{DateTime, FixedOffset};
use scraper::{Html, Selector};
use serde_json::Value;

use crate::{DatelineError, Result};

const LD_JSON_SELECTOR: &str = r#"script[type="application/ld+json"]"#;

/// One resolved article ready for storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    /// Headline; doubles as the store's uniqueness key
    pub title: String,
    /// Person authors joined with "; ", or None for agency content
    pub author: Option<String>,
    /// Full publication timestamp with offset
    pub published_at: DateTime<FixedOffset>,
    /// Body text with non-breaking-space artifacts stripped
    pub body: String,
}

/// Extracts the first freely-accessible NewsArticle block from a page
///
/// # Returns
///
/// * `Ok(Some(Article))` - An accessible block was found and parsed
/// * `Ok(None)` - No accessible NewsArticle block (skip this record)
/// * `Err(DatelineError::StructuralParse)` - A block exists but its JSON
///   or required fields are unusable; never retried
pub fn extract_article(html: &str, url: &str) -> Result<Option<Article>> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(LD_JSON_SELECTOR)
        .map_err(|e| structural(url, &format!("bad structured-data selector: {:?}", e)))?;

    for script in document.select(&selector) {
        let raw = script.text().collect::<String>();
        let data: Value = serde_json::from_str(raw.trim())
            .map_err(|e| structural(url, &format!("invalid structured-data JSON: {}", e)))?;

        if data.get("@type").and_then(Value::as_str) != Some("NewsArticle") {
            continue;
        }
        if !is_accessible(&data) {
            continue;
        }

        let title = required_str(&data, "headline", url)?.to_string();
        let author = join_person_authors(&data);

        let published = required_str(&data, "datePublished", url)?;
        let published_at = DateTime::parse_from_rfc3339(published)
            .map_err(|e| structural(url, &format!("bad datePublished {:?}: {}", published, e)))?;

        let body = required_str(&data, "articleBody", url)?.replace('\u{a0}', "");

        return Ok(Some(Article {
            title,
            author,
            published_at,
            body,
        }));
    }

    Ok(None)
}

/// The accessibility flag appears both as a JSON bool and as the strings
/// "True"/"true" in the wild.
fn is_accessible(data: &Value) -> bool {
    match data.get("isAccessibleForFree") {
        Some(Value::Bool(b)) => *b,
        Some(Value::String(s)) => s.eq_ignore_ascii_case("true"),
        _ => false,
    }
}

/// Joins all person-type authors with "; "
///
/// Agency-authored articles carry either no author array or only
/// organization entries; both yield None.
fn join_person_authors(data: &Value) -> Option<String> {
    let authors = data.get("author")?.as_array()?;

    let names: Vec<&str> = authors
        .iter()
        .filter(|a| a.get("@type").and_then(Value::as_str) == Some("Person"))
        .filter_map(|a| a.get("name").and_then(Value::as_str))
        .collect();

    if names.is_empty() {
        None
    } else {
        Some(names.join("; "))
    }
}

fn required_str<'a>(data: &'a Value, field: &str, url: &str) -> Result<&'a str> {
    data.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| structural(url, &format!("NewsArticle block missing {}", field)))
}

fn structural(url: &str, message: &str) -> DatelineError {
    DatelineError::StructuralParse {
        url: url.to_string(),
        message: message.to_string(),
    }
}
