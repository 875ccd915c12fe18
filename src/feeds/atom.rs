//! Atom conversion into the crate's feed shape.
//!
//! `atom_syndication` hands timestamps back already parsed, so `published`
//! and `updated` are rendered to RFC 3339 before they enter the entry; for
//! compliant Atom documents that round-trips the original value. The entry
//! link prefers `rel="alternate"`, the Atom default for the article itself.

use atom_syndication::extension::ExtensionMap;
use atom_syndication::Feed;

use super::{EntryLink, FeedEntry, FetchedFeed};

impl From<Feed> for FetchedFeed {
    fn from(feed: Feed) -> Self {
        let title = feed.title().as_str().trim().to_string();
        let entries = feed
            .entries()
            .iter()
            .map(|entry| {
                let links: Vec<EntryLink> = entry
                    .links()
                    .iter()
                    .map(|link| EntryLink {
                        href: link.href().to_string(),
                        mime_type: link.mime_type().map(str::to_string),
                    })
                    .collect();

                let article_link = entry
                    .links()
                    .iter()
                    .find(|link| link.rel() == "alternate")
                    .or_else(|| entry.links().first())
                    .map(|link| link.href().to_string());

                let entry_title = entry.title().as_str().trim();

                FeedEntry {
                    title: (!entry_title.is_empty()).then(|| entry_title.to_string()),
                    summary: entry.summary().map(|text| text.as_str().to_string()),
                    link: article_link,
                    published: entry.published().map(|date| date.to_rfc3339()),
                    updated: Some(entry.updated().to_rfc3339()),
                    media: media_content_urls(entry.extensions()),
                    links,
                }
            })
            .collect();

        FetchedFeed {
            title: (!title.is_empty()).then_some(title),
            entries,
        }
    }
}

/// Collect `media:content` attachment URLs in document order.
fn media_content_urls(extensions: &ExtensionMap) -> Vec<String> {
    let Some(media) = extensions.get("media") else {
        return Vec::new();
    };
    let Some(contents) = media.get("content") else {
        return Vec::new();
    };

    contents
        .iter()
        .filter_map(|content| content.attrs().get("url").cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_conversion() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>TechCrunch</title>
  <id>urn:tc</id>
  <updated>2024-05-01T10:00:00Z</updated>
  <entry>
    <title>Docker images under scrutiny</title>
    <id>urn:tc:1</id>
    <published>2024-05-01T08:30:00Z</published>
    <updated>2024-05-01T09:00:00Z</updated>
    <summary>Supply chain worries.</summary>
    <link rel="alternate" href="https://x/a1"/>
    <link rel="enclosure" type="image/jpeg" href="https://img.example/a1.jpg"/>
  </entry>
</feed>"#;

        let feed = Feed::read_from(xml.as_bytes()).unwrap();
        let fetched = FetchedFeed::from(feed);

        assert_eq!(fetched.title.as_deref(), Some("TechCrunch"));
        assert_eq!(fetched.entries.len(), 1);

        let entry = &fetched.entries[0];
        assert_eq!(entry.title.as_deref(), Some("Docker images under scrutiny"));
        assert_eq!(entry.summary.as_deref(), Some("Supply chain worries."));
        assert_eq!(entry.link.as_deref(), Some("https://x/a1"));
        assert_eq!(entry.published.as_deref(), Some("2024-05-01T08:30:00+00:00"));
        assert_eq!(entry.updated.as_deref(), Some("2024-05-01T09:00:00+00:00"));

        assert_eq!(entry.links.len(), 2);
        assert_eq!(entry.links[1].mime_type.as_deref(), Some("image/jpeg"));
    }

    #[test]
    fn test_entry_without_published_keeps_updated() {
        let xml = r#"<?xml version="1.0" encoding="utf-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>t</title>
  <id>urn:t</id>
  <updated>2024-05-02T00:00:00Z</updated>
  <entry>
    <title>Only updated</title>
    <id>urn:t:1</id>
    <updated>2024-05-02T00:00:00Z</updated>
    <link href="https://x/a2"/>
  </entry>
</feed>"#;

        let feed = Feed::read_from(xml.as_bytes()).unwrap();
        let fetched = FetchedFeed::from(feed);
        let entry = &fetched.entries[0];

        assert!(entry.published.is_none());
        assert_eq!(entry.updated.as_deref(), Some("2024-05-02T00:00:00+00:00"));
        assert_eq!(entry.link.as_deref(), Some("https://x/a2"));
    }
}
