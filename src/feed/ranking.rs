//! Sort-key comparators over posts.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::criteria::SortKey;
use crate::model::Post;

/// Weights for the engagement scores behind `trending` and `popular`.
///
/// These are product knobs, not invariants; see `Config` for how they are
/// overridden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingWeights {
    pub trending_like: u64,
    pub trending_comment: u64,
    pub popular_like: u64,
    pub popular_comment: u64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        Self {
            trending_like: 1,
            trending_comment: 2,
            popular_like: 1,
            popular_comment: 1,
        }
    }
}

impl RankingWeights {
    #[must_use]
    pub fn trending_score(&self, post: &Post) -> u64 {
        weighted(post, self.trending_like, self.trending_comment)
    }

    #[must_use]
    pub fn popular_score(&self, post: &Post) -> u64 {
        weighted(post, self.popular_like, self.popular_comment)
    }

    /// Compare two posts under `key`. `Less` means `a` is shown first.
    ///
    /// Every key sorts descending; equal scores compare `Equal` so a stable
    /// sort keeps input order for ties.
    #[must_use]
    pub fn compare(&self, a: &Post, b: &Post, key: SortKey) -> Ordering {
        match key {
            SortKey::Recent => b.created_at.cmp(&a.created_at),
            SortKey::Trending => self.trending_score(b).cmp(&self.trending_score(a)),
            SortKey::Popular => self.popular_score(b).cmp(&self.popular_score(a)),
            SortKey::MostLiked => b.likes.cmp(&a.likes),
            SortKey::MostCommented => b.comment_count().cmp(&a.comment_count()),
        }
    }
}

fn weighted(post: &Post, like_weight: u64, comment_weight: u64) -> u64 {
    post.likes
        .saturating_mul(like_weight)
        .saturating_add(post.comment_count().saturating_mul(comment_weight))
}

/// Compare with the default weights.
#[must_use]
pub fn compare(a: &Post, b: &Post, key: SortKey) -> Ordering {
    RankingWeights::default().compare(a, b, key)
}
