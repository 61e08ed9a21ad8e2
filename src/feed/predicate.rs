//! Inclusion test for a single post against one criteria snapshot.

use std::sync::LazyLock;

use regex::Regex;

use super::criteria::FilterCriteria;
use crate::model::Post;

/// `#` followed by letters, combining marks (Bengali vowel signs), digits or `_`.
static HASHTAG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[\p{L}\p{M}\p{N}_]+").unwrap());

/// Extract hashtag tokens (including the leading `#`) from post text.
#[must_use]
pub fn extract_hashtags(text: &str) -> Vec<&str> {
    HASHTAG_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Whether `post` is visible under `criteria`. All active predicates are ANDed.
#[must_use]
pub fn include(post: &Post, criteria: &FilterCriteria) -> bool {
    if !criteria.community.matches(&post.community) {
        return false;
    }
    if !criteria.post_type.matches(post.post_type()) {
        return false;
    }
    match criteria.search_term() {
        Some(term) => matches_search(post, &term.to_lowercase()),
        None => true,
    }
}

/// Case-insensitive substring match against body and author name.
/// Hashtags are tokens of the body, so the body match already covers them.
/// `needle` must already be lowercased.
fn matches_search(post: &Post, needle: &str) -> bool {
    post.content.to_lowercase().contains(needle)
        || post.author.name.to_lowercase().contains(needle)
}
