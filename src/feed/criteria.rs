//! Filter criteria value object and partial updates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::{Community, PostType};

/// Ordering applied to the visible feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", from = "String")]
pub enum SortKey {
    #[default]
    Recent,
    Trending,
    Popular,
    MostLiked,
    MostCommented,
}

impl SortKey {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Recent => "recent",
            Self::Trending => "trending",
            Self::Popular => "popular",
            Self::MostLiked => "most_liked",
            Self::MostCommented => "most_commented",
        }
    }

    /// Parse a sort key. Unknown keys fall back to [`SortKey::Recent`].
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "trending" => Self::Trending,
            "popular" => Self::Popular,
            "most_liked" => Self::MostLiked,
            "most_commented" => Self::MostCommented,
            _ => Self::Recent,
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for SortKey {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

/// Community selector: `all` or one community.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CommunityFilter {
    #[default]
    All,
    Only(Community),
}

impl CommunityFilter {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            Self::All
        } else {
            Self::Only(Community::parse(s))
        }
    }

    #[must_use]
    pub fn matches(&self, community: &Community) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == community,
        }
    }
}

impl fmt::Display for CommunityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(community) => write!(f, "{community}"),
        }
    }
}

impl From<String> for CommunityFilter {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<CommunityFilter> for String {
    fn from(value: CommunityFilter) -> Self {
        value.to_string()
    }
}

/// Post type selector: `all` or one type. Unknown types select `all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PostTypeFilter {
    #[default]
    All,
    Only(PostType),
}

impl PostTypeFilter {
    #[must_use]
    pub fn parse(s: &str) -> Self {
        PostType::parse(s).map_or(Self::All, Self::Only)
    }

    #[must_use]
    pub fn matches(&self, post_type: PostType) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == post_type,
        }
    }
}

impl fmt::Display for PostTypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(post_type) => write!(f, "{post_type}"),
        }
    }
}

impl From<String> for PostTypeFilter {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}

impl From<PostTypeFilter> for String {
    fn from(value: PostTypeFilter) -> Self {
        value.to_string()
    }
}

/// The active search, filter and sort selection of one feed view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub search: String,
    pub community: CommunityFilter,
    pub post_type: PostTypeFilter,
    pub sort_by: SortKey,
}

impl FilterCriteria {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    #[must_use]
    pub fn with_community(mut self, community: CommunityFilter) -> Self {
        self.community = community;
        self
    }

    #[must_use]
    pub fn with_post_type(mut self, post_type: PostTypeFilter) -> Self {
        self.post_type = post_type;
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort_by: SortKey) -> Self {
        self.sort_by = sort_by;
        self
    }

    /// The trimmed search term, or `None` when no search is active.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        let term = self.search.trim();
        (!term.is_empty()).then_some(term)
    }

    /// Number of fields that deviate from their defaults.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        [
            self.search_term().is_some(),
            self.community != CommunityFilter::All,
            self.post_type != PostTypeFilter::All,
            self.sort_by != SortKey::Recent,
        ]
        .into_iter()
        .filter(|active| *active)
        .count()
    }

    #[must_use]
    pub fn is_default(&self) -> bool {
        self.active_filter_count() == 0
    }

    /// Merge a partial change into these criteria.
    pub fn apply(&mut self, patch: CriteriaPatch) {
        if let Some(search) = patch.search {
            self.search = search;
        }
        if let Some(community) = patch.community {
            self.community = community;
        }
        if let Some(post_type) = patch.post_type {
            self.post_type = post_type;
        }
        if let Some(sort_by) = patch.sort_by {
            self.sort_by = sort_by;
        }
    }
}

/// A partial change to [`FilterCriteria`]; `None` fields are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct CriteriaPatch {
    pub search: Option<String>,
    pub community: Option<CommunityFilter>,
    pub post_type: Option<PostTypeFilter>,
    pub sort_by: Option<SortKey>,
}

impl CriteriaPatch {
    #[must_use]
    pub fn search(search: impl Into<String>) -> Self {
        Self {
            search: Some(search.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn community(community: CommunityFilter) -> Self {
        Self {
            community: Some(community),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn post_type(post_type: PostTypeFilter) -> Self {
        Self {
            post_type: Some(post_type),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn sort_by(sort_by: SortKey) -> Self {
        Self {
            sort_by: Some(sort_by),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.community, CommunityFilter::All);
        assert_eq!(criteria.post_type, PostTypeFilter::All);
        assert_eq!(criteria.sort_by, SortKey::Recent);
        assert_eq!(criteria.active_filter_count(), 0);
        assert!(criteria.is_default());
    }

    #[test]
    fn test_active_filter_count() {
        let criteria = FilterCriteria::new()
            .with_search("ভিডিও")
            .with_community(CommunityFilter::Only(Community::Ward(1)))
            .with_sort(SortKey::Trending);
        assert_eq!(criteria.active_filter_count(), 3);

        let blank_search = FilterCriteria::new().with_search("   ");
        assert_eq!(blank_search.active_filter_count(), 0);
    }

    #[test]
    fn test_sort_key_unknown_falls_back() {
        assert_eq!(SortKey::parse("most_liked"), SortKey::MostLiked);
        assert_eq!(SortKey::parse("hottest"), SortKey::Recent);
        let key: SortKey = serde_json::from_str("\"bogus\"").unwrap();
        assert_eq!(key, SortKey::Recent);
        assert_eq!(
            serde_json::to_string(&SortKey::MostCommented).unwrap(),
            "\"most_commented\""
        );
    }

    #[test]
    fn test_filter_parsing() {
        assert_eq!(CommunityFilter::parse("all"), CommunityFilter::All);
        assert_eq!(CommunityFilter::parse(""), CommunityFilter::All);
        assert_eq!(
            CommunityFilter::parse("ward-3"),
            CommunityFilter::Only(Community::Ward(3))
        );
        assert_eq!(
            PostTypeFilter::parse("poll"),
            PostTypeFilter::Only(PostType::Poll)
        );
        assert_eq!(PostTypeFilter::parse("all"), PostTypeFilter::All);
        assert_eq!(PostTypeFilter::parse("reel"), PostTypeFilter::All);
    }

    #[test]
    fn test_apply_patch_merges_only_given_fields() {
        let mut criteria = FilterCriteria::new().with_search("bazar");
        criteria.apply(CriteriaPatch::sort_by(SortKey::Popular));
        assert_eq!(criteria.search, "bazar");
        assert_eq!(criteria.sort_by, SortKey::Popular);

        let patch: CriteriaPatch = serde_json::from_str(r#"{"community":"global"}"#).unwrap();
        criteria.apply(patch);
        assert_eq!(
            criteria.community,
            CommunityFilter::Only(Community::Global)
        );
        assert_eq!(criteria.sort_by, SortKey::Popular);
    }
}
