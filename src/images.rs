//! Representative image resolution for feed entries.
//!
//! Resolution order:
//! 1. first `media:content` attachment URL
//! 2. first link whose declared MIME type contains `image`
//! 3. a fixed placeholder
//!
//! The result is always a URL; entries without any usable image get the
//! placeholder.

use crate::feeds::FeedEntry;

/// Placeholder shown for entries that carry no image of their own.
pub const DEFAULT_IMAGE: &str =
    "https://images.unsplash.com/photo-1550751827-4bd374c3f58b?q=80&w=500&auto=format&fit=crop";

/// Pick the representative image URL for an entry.
pub fn resolve_image(entry: &FeedEntry) -> String {
    if let Some(url) = entry.media.first() {
        return url.clone();
    }

    if let Some(link) = entry
        .links
        .iter()
        .find(|link| link.mime_type.as_deref().is_some_and(|t| t.contains("image")))
    {
        return link.href.clone();
    }

    DEFAULT_IMAGE.to_string()
}
