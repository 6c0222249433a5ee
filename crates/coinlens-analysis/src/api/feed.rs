//! Fallback headline source: the Google News search feed
//!
//! The feed is XML with per-item quirks (CDATA titles, entity escapes,
//! occasional missing sub-fields). A bad item is skipped; the rest of the
//! batch continues.

use crate::api::{Headline, HeadlineSource};
use crate::error::{AnalysisError, Result};
use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use regex::Regex;
use std::num::NonZeroU32;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

type SharedRateLimiter = Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>;

const SEARCH_FEED_URL: &str = "https://news.google.com/rss/search";
const DEFAULT_PUBLISHER: &str = "Google News";

/// Fallback implementation of [`HeadlineSource`], queried with free text
pub struct SearchFeedClient {
    http: reqwest::Client,
    rate_limiter: SharedRateLimiter,
    item_re: Regex,
    title_re: Regex,
    link_re: Regex,
    source_re: Regex,
}

impl SearchFeedClient {
    /// Create a new feed client with rate limiting
    ///
    /// # Arguments
    /// * `request_timeout` - Per-request timeout
    /// * `rate_limit` - Requests per minute allowed against the feed
    pub fn new(request_timeout: Duration, rate_limit: u32) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;

        let quota = Quota::per_minute(
            NonZeroU32::new(rate_limit).unwrap_or(NonZeroU32::new(30).unwrap_or(NonZeroU32::MIN)),
        );
        let rate_limiter = Arc::new(RateLimiter::direct(quota));

        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| AnalysisError::ConfigError(e.to_string()))
        };

        Ok(Self {
            http,
            rate_limiter,
            item_re: compile(r"(?s)<item>(.*?)</item>")?,
            title_re: compile(r"(?s)<title>(.*?)</title>")?,
            link_re: compile(r"(?s)<link>(.*?)</link>")?,
            source_re: compile(r"(?s)<source[^>]*>(.*?)</source>")?,
        })
    }

    fn tag_text(&self, block: &str, re: &Regex) -> Option<String> {
        let inner = re.captures(block)?.get(1)?.as_str().trim();
        let inner = inner
            .strip_prefix("<![CDATA[")
            .and_then(|s| s.strip_suffix("]]>"))
            .unwrap_or(inner);
        let text = unescape_entities(inner.trim());
        if text.is_empty() { None } else { Some(text) }
    }

    /// Extract up to `limit` valid headlines from the feed body
    ///
    /// Items missing a title or a parseable http(s) link are dropped one by
    /// one; the rest of the batch continues.
    fn parse_feed(&self, body: &str, limit: usize) -> Vec<Headline> {
        let mut headlines = Vec::new();

        for item in self.item_re.captures_iter(body) {
            if headlines.len() >= limit {
                break;
            }

            let Some(block) = item.get(1).map(|m| m.as_str()) else {
                continue;
            };

            let Some(title) = self.tag_text(block, &self.title_re) else {
                tracing::debug!("skipping feed item without title");
                continue;
            };

            let Some(link) = self.tag_text(block, &self.link_re) else {
                tracing::debug!("skipping feed item without link: {title}");
                continue;
            };
            let Ok(parsed) = Url::parse(&link) else {
                tracing::debug!("skipping feed item with malformed link: {link}");
                continue;
            };
            if !matches!(parsed.scheme(), "http" | "https") {
                continue;
            }

            let publisher = self
                .tag_text(block, &self.source_re)
                .unwrap_or_else(|| DEFAULT_PUBLISHER.to_string());

            headlines.push(Headline {
                title,
                publisher,
                link,
            });
        }

        headlines
    }
}

#[async_trait]
impl HeadlineSource for SearchFeedClient {
    async fn fetch(&self, query: &str, limit: usize) -> Result<Vec<Headline>> {
        self.rate_limiter.until_ready().await;

        let response = self
            .http
            .get(SEARCH_FEED_URL)
            .query(&[("q", query)])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AnalysisError::ProviderError(format!(
                "search feed returned HTTP {}",
                response.status()
            )));
        }

        let body = response.text().await?;
        Ok(self.parse_feed(&body, limit))
    }
}

fn unescape_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> SearchFeedClient {
        SearchFeedClient::new(Duration::from_secs(5), 30).unwrap()
    }

    const FEED: &str = r#"<?xml version="1.0"?>
        <rss><channel>
        <item>
            <title>Bitcoin rallies past resistance</title>
            <link>https://example.com/a</link>
            <source url="https://example.com">Example Wire</source>
        </item>
        <item>
            <title><![CDATA[ETH upgrade &amp; staking surge]]></title>
            <link>https://example.com/b</link>
        </item>
        <item>
            <title></title>
            <link>https://example.com/no-title</link>
        </item>
        <item>
            <title>Missing link item</title>
        </item>
        <item>
            <title>Bad link item</title>
            <link>not a url</link>
        </item>
        </channel></rss>"#;

    #[test]
    fn test_parse_feed_skips_malformed_items() {
        let headlines = client().parse_feed(FEED, 10);

        assert_eq!(headlines.len(), 2);
        assert_eq!(headlines[0].title, "Bitcoin rallies past resistance");
        assert_eq!(headlines[0].publisher, "Example Wire");
        assert_eq!(headlines[1].title, "ETH upgrade & staking surge");
        assert_eq!(headlines[1].publisher, DEFAULT_PUBLISHER);
    }

    #[test]
    fn test_parse_feed_respects_limit() {
        let headlines = client().parse_feed(FEED, 1);
        assert_eq!(headlines.len(), 1);
    }

    #[test]
    fn test_parse_feed_empty_body() {
        assert!(client().parse_feed("", 5).is_empty());
        assert!(client().parse_feed("<rss></rss>", 5).is_empty());
    }

    #[test]
    fn test_unescape_entities() {
        assert_eq!(unescape_entities("a &amp; b &#39;c&#39;"), "a & b 'c'");
    }

    #[tokio::test]
    #[ignore] // Requires network access
    async fn test_fetch_live() {
        let headlines = client().fetch("BTC crypto", 5).await.unwrap();
        assert!(headlines.len() <= 5);
    }
}
