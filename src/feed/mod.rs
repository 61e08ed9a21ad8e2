//! Feed query composition.
//!
//! A [`FeedComposer`] turns the full post collection plus a [`FilterCriteria`]
//! snapshot into the ordered list of visible posts: the predicate in
//! [`predicate`] narrows the list, the comparators in [`ranking`] order it.
//! [`CriteriaStore`] and [`FeedView`] hold the mutable side of one feed screen.

pub mod composer;
pub mod criteria;
pub mod events;
pub mod predicate;
pub mod ranking;
pub mod store;
pub mod view;

pub use composer::{compose, FeedComposer};
pub use criteria::{CommunityFilter, CriteriaPatch, FilterCriteria, PostTypeFilter, SortKey};
pub use events::local_events;
pub use predicate::{extract_hashtags, include};
pub use ranking::RankingWeights;
pub use store::CriteriaStore;
pub use view::FeedView;
