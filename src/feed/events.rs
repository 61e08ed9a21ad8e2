//! Upcoming events from ward communities.

use crate::model::Post;

/// Event posts from ward communities (not `global`), in input order, at most `limit`.
#[must_use]
pub fn local_events(posts: &[Post], limit: usize) -> Vec<&Post> {
    posts
        .iter()
        .filter(|p| p.kind.event_details().is_some() && !p.community.is_global())
        .take(limit)
        .collect()
}
