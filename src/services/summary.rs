//! Summary (instant answer) service client.

use crate::error::HandlerError;
use async_trait::async_trait;
use serde::Deserialize;

/// Upper bound on related topics returned to the user.
const MAX_RELATED: usize = 5;

/// Longest abstract text we will relay, including the trailing source
/// link.
const MAX_ABSTRACT: usize = 4094;

/// A related topic attached to an answer without abstract text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedTopic {
    /// Topic title, derived from the link path.
    pub item: String,
    /// Topic link.
    pub link: String,
    /// Topic blurb with the title part removed.
    pub text: String,
}

/// An instant-answer result: either abstract text or related topics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Abstract {
    /// Name of the source the abstract came from.
    pub source: String,
    /// Abstract text with the source link folded in; empty when only
    /// related topics were found.
    pub text: String,
    /// Related topics, capped at five.
    pub related: Vec<RelatedTopic>,
}

/// Summary service boundary.
#[async_trait]
pub trait Summary: Send + Sync {
    /// Look up a term. `None` means the service had nothing at all.
    async fn summarize(&self, term: &str) -> Result<Option<Abstract>, HandlerError>;
}

#[derive(Deserialize)]
struct ApiAnswer {
    #[serde(rename = "AbstractSource", default)]
    source: String,
    #[serde(rename = "AbstractText", default)]
    text: String,
    #[serde(rename = "AbstractURL", default)]
    url: String,
    #[serde(rename = "RelatedTopics", default)]
    related: Vec<ApiRelated>,
}

#[derive(Deserialize)]
struct ApiRelated {
    #[serde(rename = "FirstURL", default)]
    first_url: Option<String>,
    #[serde(rename = "Text", default)]
    text: Option<String>,
}

/// Reqwest-backed instant-answer client.
pub struct SummaryClient {
    http: reqwest::Client,
    url: String,
}

impl SummaryClient {
    /// Create a client against the given endpoint.
    pub fn new(http: reqwest::Client, url: String) -> Self {
        Self { http, url }
    }
}

/// Normalize a source link so it survives chat rendering: parsing through
/// `Url` percent-encodes the path.
fn normalize_link(link: &str) -> String {
    match reqwest::Url::parse(link) {
        Ok(url) => url.to_string(),
        Err(_) => link.to_string(),
    }
}

/// Fold the source link into the abstract text, truncating the text so the
/// combined output stays under the relay limit.
fn fold_link(text: &str, link: &str) -> String {
    let link = normalize_link(link);
    let budget = MAX_ABSTRACT.saturating_sub(link.len());
    let text: String = text.chars().take(budget).collect();
    format!("{text}\n\n{link}")
}

/// Derive a topic title from the link path and strip it from the blurb.
fn related_topic(link: String, text: String) -> RelatedTopic {
    let item = link
        .splitn(4, '/')
        .nth(3)
        .unwrap_or("")
        .replace('_', " ");
    let text = text
        .strip_prefix(&item)
        .map(|t| t.trim_start().to_string())
        .unwrap_or(text);
    RelatedTopic { item, link, text }
}

#[async_trait]
impl Summary for SummaryClient {
    async fn summarize(&self, term: &str) -> Result<Option<Abstract>, HandlerError> {
        let answer: ApiAnswer = self
            .http
            .get(&self.url)
            .query(&[("q", term), ("format", "json")])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if answer.text.is_empty() && answer.related.is_empty() {
            return Ok(None);
        }

        if !answer.text.is_empty() {
            return Ok(Some(Abstract {
                source: answer.source,
                text: fold_link(&answer.text, &answer.url),
                related: Vec::new(),
            }));
        }

        let related: Vec<RelatedTopic> = answer
            .related
            .into_iter()
            .filter_map(|r| match (r.first_url, r.text) {
                (Some(link), Some(text)) => Some(related_topic(link, text)),
                _ => None,
            })
            .take(MAX_RELATED)
            .collect();

        if related.is_empty() {
            return Ok(None);
        }

        Ok(Some(Abstract {
            source: answer.source,
            text: String::new(),
            related,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_link_appends_source() {
        let folded = fold_link("Rust is a language.", "https://example.org/wiki/Rust (language)");
        assert!(folded.starts_with("Rust is a language."));
        // The parenthesized path segment gets percent-encoded
        assert!(folded.ends_with("https://example.org/wiki/Rust%20(language)"));
    }

    #[test]
    fn test_fold_link_truncates_long_text() {
        let text = "x".repeat(5000);
        let folded = fold_link(&text, "https://example.org/a");
        assert!(folded.len() <= MAX_ABSTRACT + 2);
    }

    #[test]
    fn test_related_topic_strips_title_from_blurb() {
        let topic = related_topic(
            "https://example.org/Rust_language".to_string(),
            "Rust language A systems programming language.".to_string(),
        );
        assert_eq!(topic.item, "Rust language");
        assert_eq!(topic.text, "A systems programming language.");
    }
}
