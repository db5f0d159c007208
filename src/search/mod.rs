//! Search/browse state for the listing UI.
//!
//! This module holds the current search configuration (query, filters, sort,
//! view mode) and exposes derived "are filters active" signals for UI
//! affordances such as showing a "clear filters" control.
//!
//! # Organization
//!
//! - [`filters`]: Filter dimensions, the active-field rule, patch/update types
//! - [`state`]: The full [`SearchState`] plus sort and view-mode enums
//! - [`SearchFilterStore`]: The reactive store UI components read and mutate

pub mod filters;
pub mod state;

pub use filters::{FilterPatch, FilterUpdate, SearchFilters};
pub use state::{SearchState, SortOption, ViewMode};

use crate::reactive::Store;

/// Reactive store for the current search/browse configuration.
///
/// A process-wide singleton shared by every component that renders or mutates
/// search state: the search bar writes the query, the filter panel patches
/// filters, the toolbar switches sort and view mode, and listing components
/// subscribe to re-render. All mutations notify subscribers synchronously.
///
/// The derived signals ([`has_active_filters`](Self::has_active_filters),
/// [`active_filter_count`](Self::active_filter_count)) are recomputed from
/// the live filters on every call, so they are always consistent with the
/// latest mutation.
///
/// # Example
///
/// ```
/// use griyaku::search::{FilterUpdate, SearchFilterStore};
///
/// let store = SearchFilterStore::new();
/// store.update_filter(FilterUpdate::JenisProperti(vec!["rumah".into(), "villa".into()]));
/// store.update_filter(FilterUpdate::HargaMax(Some(500_000_000)));
/// assert_eq!(store.active_filter_count(), 2);
///
/// store.clear_filters();
/// assert!(!store.has_active_filters());
/// ```
#[derive(Debug, Clone)]
pub struct SearchFilterStore {
    state: Store<SearchState>,
}

impl Default for SearchFilterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchFilterStore {
    /// Creates a store holding the documented initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Store::new(SearchState::default()),
        }
    }

    /// Replaces the query string verbatim; no trimming, no validation.
    pub fn set_query(&self, text: impl Into<String>) {
        let text = text.into();
        tracing::debug!(query_len = text.len(), "query updated");
        self.state.update(|s| s.query = text);
    }

    /// Shallow-merges a partial filter object into the current filters.
    ///
    /// Fields the patch does not mention stay unchanged; fields explicitly
    /// patched to an empty/absent value are cleared. See [`FilterPatch`].
    pub fn set_filters(&self, patch: FilterPatch) {
        self.state.update(|s| s.filters.apply(patch));
        tracing::debug!(
            active_count = self.active_filter_count(),
            "filters merged"
        );
    }

    /// Sets exactly one named filter field, leaving all others untouched.
    pub fn update_filter(&self, update: FilterUpdate) {
        tracing::debug!(update = ?update, "single filter updated");
        self.state.update(|s| s.filters.set(update));
    }

    /// Resets filters to the fully-empty object.
    ///
    /// Query, sort, and view mode are untouched.
    pub fn clear_filters(&self) {
        tracing::debug!("filters cleared");
        self.state.update(|s| s.filters = SearchFilters::default());
    }

    /// Replaces the sort selection.
    pub fn set_sort_by(&self, option: SortOption) {
        tracing::debug!(sort_by = ?option, "sort updated");
        self.state.update(|s| s.sort_by = option);
    }

    /// Replaces the view mode.
    pub fn set_view_mode(&self, mode: ViewMode) {
        tracing::debug!(view_mode = ?mode, "view mode updated");
        self.state.update(|s| s.view_mode = mode);
    }

    /// Restores query, filters, sort, and view mode to initial values.
    ///
    /// A single update, so subscribers see one notification with the fully
    /// reset state, never an intermediate mix.
    pub fn reset_search(&self) {
        tracing::debug!("search state reset");
        self.state.set(SearchState::default());
    }

    /// Returns a clone of the full current state.
    #[must_use]
    pub fn snapshot(&self) -> SearchState {
        self.state.get()
    }

    /// Returns `true` iff at least one filter field is active.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.state.read(SearchState::has_active_filters)
    }

    /// Counts the active filter fields per the rule in [`filters`].
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.state.read(SearchState::active_filter_count)
    }

    /// Registers an observer notified synchronously after every mutation.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&SearchState) + Send + Sync + 'static,
    {
        self.state.subscribe(callback);
    }
}
