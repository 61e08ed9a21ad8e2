//! Filter-then-sort composition of the visible feed.

use tracing::debug;

use super::criteria::FilterCriteria;
use super::predicate::include;
use super::ranking::RankingWeights;
use crate::model::Post;

/// Turns a post collection and a criteria snapshot into the visible feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeedComposer {
    weights: RankingWeights,
}

impl FeedComposer {
    #[must_use]
    pub fn new(weights: RankingWeights) -> Self {
        Self { weights }
    }

    #[must_use]
    pub fn weights(&self) -> &RankingWeights {
        &self.weights
    }

    /// Filter `posts` in input order, then stable-sort by the criteria's sort key.
    ///
    /// Pure: identical inputs always give the same sequence, and posts with
    /// equal scores keep their input order.
    #[must_use]
    pub fn compose<'a>(&self, posts: &'a [Post], criteria: &FilterCriteria) -> Vec<&'a Post> {
        self.compose_indices(posts, criteria)
            .into_iter()
            .map(|i| &posts[i])
            .collect()
    }

    /// Same as [`FeedComposer::compose`], returning positions into `posts`.
    #[must_use]
    pub fn compose_indices(&self, posts: &[Post], criteria: &FilterCriteria) -> Vec<usize> {
        let mut visible: Vec<usize> = (0..posts.len())
            .filter(|&i| include(&posts[i], criteria))
            .collect();
        visible.sort_by(|&a, &b| {
            self.weights
                .compare(&posts[a], &posts[b], criteria.sort_by)
        });

        debug!(
            total = posts.len(),
            visible = visible.len(),
            sort = %criteria.sort_by,
            active_filters = criteria.active_filter_count(),
            "Composed feed"
        );

        visible
    }
}

/// Compose with the default ranking weights.
#[must_use]
pub fn compose<'a>(posts: &'a [Post], criteria: &FilterCriteria) -> Vec<&'a Post> {
    FeedComposer::default().compose(posts, criteria)
}
