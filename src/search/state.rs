//! Search state and its fixed selection enums.
//!
//! [`SearchState`] is the full browse configuration for the listing UI:
//! free-text query, structured filters, sort selection, and view mode. The
//! documented initial state is empty query, empty filters, [`SortOption::Newest`],
//! [`ViewMode::Grid`]; [`SearchState::default`] is exactly that, and reset
//! always returns to it.

use crate::search::filters::SearchFilters;
use serde::{Deserialize, Serialize};

/// Result ordering for listing searches.
///
/// The hosted service understands exactly these orderings; the enum makes an
/// invalid sort selection unrepresentable rather than a runtime error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOption {
    /// Most recently listed first. The initial selection.
    #[default]
    Newest,
    Oldest,
    PriceAsc,
    PriceDesc,
    AreaAsc,
    AreaDesc,
    /// Most viewed first.
    Popularity,
}

/// Presentation layout for listing results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Card grid. The initial selection.
    #[default]
    Grid,
    /// Single-column rows.
    List,
    /// Pins on a map.
    Map,
}

/// The complete search/browse configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchState {
    /// Free-text query, stored verbatim (no trimming or validation).
    pub query: String,

    /// Structured filter dimensions.
    pub filters: SearchFilters,

    /// Current result ordering.
    pub sort_by: SortOption,

    /// Current presentation layout.
    pub view_mode: ViewMode,
}

impl SearchState {
    /// Returns `true` iff at least one filter field is active.
    ///
    /// Recomputed from the current filters on every call; see
    /// [`SearchFilters::active_count`] for the rule.
    #[must_use]
    pub fn has_active_filters(&self) -> bool {
        self.filters.has_active()
    }

    /// Counts the active filter fields.
    #[must_use]
    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_matches_documentation() {
        let state = SearchState::default();
        assert_eq!(state.query, "");
        assert_eq!(state.filters, SearchFilters::default());
        assert_eq!(state.sort_by, SortOption::Newest);
        assert_eq!(state.view_mode, ViewMode::Grid);
        assert!(!state.has_active_filters());
        assert_eq!(state.active_filter_count(), 0);
    }

    #[test]
    fn sort_options_serialize_snake_case() {
        assert_eq!(
            serde_json::to_string(&SortOption::PriceAsc).unwrap(),
            "\"price_asc\""
        );
        assert_eq!(
            serde_json::to_string(&ViewMode::Map).unwrap(),
            "\"map\""
        );
    }
}
