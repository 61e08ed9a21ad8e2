//! Mutable holder of the current criteria with synchronous change notification.

use std::fmt;

use tracing::debug;

use super::criteria::{CriteriaPatch, FilterCriteria};

type Listener = Box<dyn FnMut(&FilterCriteria)>;

/// Holds the criteria of one feed view.
///
/// Every mutation bumps the revision and calls each subscriber before
/// returning, so the next `compose` always sees the change.
#[derive(Default)]
pub struct CriteriaStore {
    criteria: FilterCriteria,
    revision: u64,
    listeners: Vec<Listener>,
}

impl CriteriaStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_criteria(criteria: FilterCriteria) -> Self {
        Self {
            criteria,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    /// Number of mutations applied so far.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Register a callback invoked after every update or clear.
    pub fn subscribe(&mut self, listener: impl FnMut(&FilterCriteria) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Merge `patch` into the current criteria and notify subscribers.
    pub fn update(&mut self, patch: CriteriaPatch) -> &FilterCriteria {
        self.criteria.apply(patch);
        self.changed("update");
        &self.criteria
    }

    /// Reset every field to its default and notify subscribers.
    pub fn clear(&mut self) -> &FilterCriteria {
        self.criteria = FilterCriteria::default();
        self.changed("clear");
        &self.criteria
    }

    fn changed(&mut self, action: &'static str) {
        self.revision += 1;
        debug!(
            action,
            revision = self.revision,
            active_filters = self.criteria.active_filter_count(),
            "Feed criteria changed"
        );
        for listener in &mut self.listeners {
            listener(&self.criteria);
        }
    }
}

impl fmt::Debug for CriteriaStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CriteriaStore")
            .field("criteria", &self.criteria)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
