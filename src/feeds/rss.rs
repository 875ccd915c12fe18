//! RSS 2.0 conversion into the crate's feed shape.
//!
//! The `rss` crate surfaces `pubDate` as the raw string from the document,
//! which is exactly what the record wants: the value is carried verbatim.
//! Media attachments arrive through the `media` extension namespace, and an
//! `<enclosure>` becomes a typed link so the image resolver can inspect its
//! MIME type.

use rss::extension::ExtensionMap;
use rss::Channel;

use super::{EntryLink, FeedEntry, FetchedFeed};

impl From<Channel> for FetchedFeed {
    fn from(channel: Channel) -> Self {
        let title = channel.title().trim();
        let entries = channel
            .items()
            .iter()
            .map(|item| {
                let mut links = Vec::new();
                if let Some(href) = item.link() {
                    links.push(EntryLink {
                        href: href.to_string(),
                        mime_type: None,
                    });
                }
                if let Some(enclosure) = item.enclosure() {
                    let mime = enclosure.mime_type().trim();
                    links.push(EntryLink {
                        href: enclosure.url().to_string(),
                        mime_type: (!mime.is_empty()).then(|| mime.to_string()),
                    });
                }

                FeedEntry {
                    title: item.title().map(str::to_string),
                    summary: item.description().map(str::to_string),
                    link: item.link().map(str::to_string),
                    published: item.pub_date().map(str::to_string),
                    updated: None,
                    media: media_content_urls(item.extensions()),
                    links,
                }
            })
            .collect();

        FetchedFeed {
            title: (!title.is_empty()).then(|| title.to_string()),
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
