//! Syndication feed fetching and parsing.
//!
//! Each configured source is one feed URL. Fetching follows a consistent
//! two-phase pattern:
//!
//! 1. **Download**: GET the feed document over HTTP
//! 2. **Parse**: read the bytes as RSS 2.0, falling back to Atom
//!
//! Parsing is pure over bytes so tests can exercise it without the network.
//! A failure in either phase is isolated to its source: the error is logged
//! and that feed contributes nothing, while the remaining feeds still run.

use futures::stream::{self, StreamExt};
use reqwest::Client;
use std::error::Error;
use tracing::{debug, error, info, instrument};

pub mod atom;
pub mod rss;

/// User-Agent sent with every feed request.
pub const USER_AGENT: &str = concat!("veille_news/", env!("CARGO_PKG_VERSION"));

/// A link attached to an entry, with its declared MIME type when the feed
/// stated one (Atom `<link type=...>`, RSS `<enclosure type=...>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryLink {
    pub href: String,
    pub mime_type: Option<String>,
}

/// One raw item from a feed, prior to filtering and shaping.
///
/// Timestamp fields are kept as the strings the document carried; nothing
/// here is parsed or normalized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedEntry {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub link: Option<String>,
    pub published: Option<String>,
    pub updated: Option<String>,
    /// `media:content` attachment URLs, in document order.
    pub media: Vec<String>,
    /// All links, in document order, with declared MIME types.
    pub links: Vec<EntryLink>,
}

/// A parsed feed document: its display title and its entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FetchedFeed {
    pub title: Option<String>,
    pub entries: Vec<FeedEntry>,
}

/// Build the HTTP client shared by all fetches.
///
/// No timeout is configured; requests run until the library's own defaults
/// return or error.
pub fn http_client() -> Client {
    Client::builder()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Parse a feed document from raw bytes.
///
/// Tries RSS 2.0 first, then Atom. Both parsers reading the document as
/// garbage is the per-source parse failure the caller recovers from.
pub fn parse_feed(data: &[u8]) -> Result<FetchedFeed, Box<dyn Error>> {
    if let Ok(channel) = ::rss::Channel::read_from(data) {
        return Ok(FetchedFeed::from(channel));
    }

    if let Ok(feed) = ::atom_syndication::Feed::read_from(data) {
        return Ok(FetchedFeed::from(feed));
    }

    Err("document is neither RSS nor Atom".into())
}

/// Download and parse a single feed.
#[instrument(level = "info", skip_all, fields(%url))]
pub async fn fetch_feed(client: &Client, url: &str) -> Result<FetchedFeed, Box<dyn Error>> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(format!("HTTP {status} when fetching {url}").into());
    }

    let body = response.bytes().await?;
    let feed = parse_feed(&body)?;
    info!(
        entries = feed.entries.len(),
        feed_title = feed.title.as_deref().unwrap_or(""),
        "Parsed feed"
    );
    Ok(feed)
}

/// Fetch every configured feed, one at a time, in listed order.
///
/// Failed sources are logged and skipped without failing the batch; the
/// result only contains the feeds that produced entries to consider.
#[instrument(level = "info", skip_all)]
pub async fn fetch_all(client: &Client, urls: &[String]) -> Vec<FetchedFeed> {
    let feeds: Vec<FetchedFeed> = stream::iter(urls.iter().cloned())
        .then(|url: String| async move {
            match fetch_feed(client, &url).await {
                Ok(feed) => {
                    debug!(%url, "Fetched feed");
                    Some(feed)
                }
                Err(e) => {
                    error!(error = %e, %url, "Feed fetch failed; skipping source");
                    None
                }
            }
        })
        .filter(|opt| std::future::ready(opt.is_some()))
        .map(|opt| opt.unwrap())
        .collect()
        .await;

    info!(
        fetched = feeds.len(),
        configured = urls.len(),
        "Fetched feed documents"
    );
    feeds
}

#[cfg(test)]
mod tests {
    use super::*;

    const RSS_DOC: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Test Feed</title>
    <link>https://example.com</link>
    <description>d</description>
    <item>
      <title>First Post</title>
      <link>https://example.com/1</link>
    </item>
  </channel>
</rss>"#;

    const ATOM_DOC: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Atom Test</title>
  <id>urn:test</id>
  <updated>2024-05-01T09:00:00Z</updated>
  <entry>
    <title>Entry One</title>
    <id>urn:test:1</id>
    <updated>2024-05-01T09:00:00Z</updated>
    <link href="https://example.com/a1"/>
  </entry>
</feed>"#;

    #[test]
    fn test_parse_feed_reads_rss() {
        let feed = parse_feed(RSS_DOC.as_bytes()).unwrap();
        assert_eq!(feed.title.as_deref(), Some("Test Feed"));
        assert_eq!(feed.entries.len(), 1);
    }

    #[test]
    fn test_parse_feed_falls_back_to_atom() {
        let feed = parse_feed(ATOM_DOC.as_bytes()).unwrap();
        assert_eq!(feed.title.as_deref(), Some("Atom Test"));
        assert_eq!(feed.entries.len(), 1);
    }

    #[test]
    fn test_parse_feed_rejects_garbage() {
        assert!(parse_feed(b"not a feed at all").is_err());
    }
}
