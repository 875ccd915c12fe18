//! Keyword relevance filter.
//!
//! An entry is relevant when at least one configured keyword is a
//! case-insensitive substring of its title+summary text. No stemming, no
//! ranking; matching runs an Aho-Corasick automaton over the lowered text
//! and the first hit decides.

use aho_corasick::AhoCorasickBuilder;

use crate::feeds::FeedEntry;

/// True when any keyword is a case-insensitive substring of `text`.
///
/// An empty keyword list matches nothing.
pub fn matches(text: &str, keywords: &[String]) -> bool {
    if keywords.is_empty() {
        return false;
    }

    let haystack = text.to_lowercase();
    let needles: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();
    let ac = AhoCorasickBuilder::new().build(&needles);

    ac.find(&haystack).is_some()
}

/// The text the filter inspects: title and summary, missing fields empty.
pub fn entry_text(entry: &FeedEntry) -> String {
    format!(
        "{} {}",
        entry.title.as_deref().unwrap_or(""),
        entry.summary.as_deref().unwrap_or("")
    )
}

/// Whether an entry passes the keyword filter.
pub fn is_relevant(entry: &FeedEntry, keywords: &[String]) -> bool {
    matches(&entry_text(entry), keywords)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keywords(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_matches_is_case_insensitive() {
        let kw = keywords(&["ransomware"]);
        assert!(matches("New RANSOMWARE strain detected", &kw));
        assert!(matches("ransomware", &kw));
        assert!(!matches("benign gardening news", &kw));
    }

    #[test]
    fn test_matches_substring_not_word_boundary() {
        let kw = keywords(&["ia"]);
        // Substring semantics: "ia" hits inside "medias" too.
        assert!(matches("les medias en parlent", &kw));
    }

    #[test]
    fn test_matches_any_keyword_suffices() {
        let kw = keywords(&["kubernetes", "docker"]);
        assert!(matches("Docker images under scrutiny", &kw));
    }

    #[test]
    fn test_empty_keyword_list_matches_nothing() {
        assert!(!matches("anything at all", &[]));
        assert!(!matches("", &[]));
    }

    #[test]
    fn test_matches_accented_keywords() {
        let kw = keywords(&["cybersécurité"]);
        assert!(matches("La CYBERSÉCURITÉ en entreprise", &kw));
    }

    #[test]
    fn test_entry_text_joins_title_and_summary() {
        let entry = FeedEntry {
            title: Some("Zero".to_string()),
            summary: Some("trust".to_string()),
            ..FeedEntry::default()
        };
        assert_eq!(entry_text(&entry), "Zero trust");

        // A keyword may span the title/summary join, same as concatenation
        // in the source data.
        assert!(is_relevant(&entry, &keywords(&["zero trust"])));
    }

    #[test]
    fn test_entry_text_tolerates_missing_fields() {
        let entry = FeedEntry::default();
        assert_eq!(entry_text(&entry), " ");
        assert!(!is_relevant(&entry, &keywords(&["cloud"])));
    }

    #[test]
    fn test_is_relevant_checks_summary_only_entries() {
        let entry = FeedEntry {
            summary: Some("everything moved to the cloud".to_string()),
            ..FeedEntry::default()
        };
        assert!(is_relevant(&entry, &keywords(&["cloud"])));
    }
}
