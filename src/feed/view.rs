//! A feed screen that keeps its visible order in sync with its inputs.

use super::composer::FeedComposer;
use super::criteria::{CriteriaPatch, FilterCriteria};
use super::store::CriteriaStore;
use crate::model::Post;

/// One feed screen: the post collection, its criteria store and the visible
/// order, re-derived synchronously after every change to either input.
#[derive(Debug)]
pub struct FeedView {
    posts: Vec<Post>,
    store: CriteriaStore,
    composer: FeedComposer,
    /// Indices into `posts`, in display order.
    visible: Vec<usize>,
}

impl FeedView {
    #[must_use]
    pub fn new(posts: Vec<Post>, composer: FeedComposer) -> Self {
        let mut view = Self {
            posts,
            store: CriteriaStore::new(),
            composer,
            visible: Vec::new(),
        };
        view.recompute();
        view
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        self.store.criteria()
    }

    /// Access the store, e.g. to subscribe to criteria changes.
    pub fn store_mut(&mut self) -> &mut CriteriaStore {
        &mut self.store
    }

    #[must_use]
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn update(&mut self, patch: CriteriaPatch) {
        self.store.update(patch);
        self.recompute();
    }

    pub fn clear(&mut self) {
        self.store.clear();
        self.recompute();
    }

    /// Replace the collection, e.g. after a refetch.
    pub fn set_posts(&mut self, posts: Vec<Post>) {
        self.posts = posts;
        self.recompute();
    }

    /// Add a freshly created post at the top of the collection.
    pub fn prepend(&mut self, post: Post) {
        self.posts.insert(0, post);
        self.recompute();
    }

    #[must_use]
    pub fn visible(&self) -> Vec<&Post> {
        self.visible.iter().map(|&i| &self.posts[i]).collect()
    }

    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.store.criteria().active_filter_count()
    }

    fn recompute(&mut self) {
        self.visible = self
            .composer
            .compose_indices(&self.posts, self.store.criteria());
    }
}
