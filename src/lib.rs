//! Griyaku: client-side state core for a property listing website.
//!
//! This crate holds the two state containers behind the Griyaku listing UI,
//! plus the small amount of plumbing they need:
//! - A favorites store with device-local persistence across sessions
//! - A search/filter store with derived "active filters" signals
//! - A reactive subscribe/notify primitive shared by both
//! - Typed listing records and display helpers (prices, slugs)
//!
//! Listing data itself lives in an external hosted service; this crate only
//! holds the criteria a query layer translates into requests against it.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  UI components (out of scope)                       │  ← read + mutate
//! └─────────────────────────────────────────────────────┘
//!            │                          │
//! ┌───────────────────┐      ┌─────────────────────────┐
//! │ FavoritesStore    │      │ SearchFilterStore       │
//! │ (favorites/)      │      │ (search/)               │
//! │ - toggle/contains │      │ - query/filters         │
//! │ - persist on      │      │ - sort/view mode        │
//! │   mutation        │      │ - active-filter signals │
//! └───────────────────┘      └─────────────────────────┘
//!            │                          │
//! ┌───────────────────┐      ┌─────────────────────────┐
//! │ Storage Layer     │      │ Reactive primitive      │
//! │ (storage/)        │      │ (reactive/)             │
//! │ - backend trait   │      │ - Store<T>              │
//! │ - JSON + atomic   │      │ - subscribe/notify      │
//! │   writes          │      │                         │
//! └───────────────────┘      └─────────────────────────┘
//!            │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Storage paths (infrastructure/)                  │
//! │  - Error types (domain/error)                       │
//! │  - Listing model (domain/listing)                   │
//! │  - Display helpers (display/)                       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`favorites`]: Bookmarked listings with fire-and-forget persistence
//! - [`search`]: Query, filters, sort, view mode, and derived signals
//! - [`reactive`]: The generic [`Store`] observer container
//! - [`storage`]: Persistence backend trait and JSON implementation
//! - [`domain`]: Listing records and error types
//! - [`display`]: Price formatting and slug generation
//! - [`infrastructure`]: Storage location resolution
//!
//! # Concurrency model
//!
//! Both stores are process-wide singletons designed for a single-threaded UI
//! event loop: mutations are synchronous, subscribers are notified before the
//! mutating call returns, and persistence is a fire-and-forget side effect
//! that never rolls state back. The handles are nevertheless `Send + Sync`
//! clones over shared state, so any component can hold one.
//!
//! # Example
//!
//! ```
//! use griyaku::search::{FilterUpdate, SearchFilterStore, SortOption};
//!
//! let search = SearchFilterStore::new();
//! search.set_query("rumah dijual bandung");
//! search.update_filter(FilterUpdate::HargaMax(Some(500_000_000)));
//! search.set_sort_by(SortOption::PriceAsc);
//!
//! assert!(search.has_active_filters());
//! assert_eq!(search.active_filter_count(), 1);
//!
//! search.reset_search();
//! assert_eq!(search.active_filter_count(), 0);
//! ```

pub mod display;
pub mod domain;
pub mod favorites;
pub mod infrastructure;
pub mod reactive;
pub mod search;
pub mod storage;

pub use domain::{GriyakuError, JenisProperti, Legalitas, ListingSummary, Result, StatusListing};
pub use favorites::{FavoriteSet, FavoritesStore};
pub use reactive::Store;
pub use search::{
    FilterPatch, FilterUpdate, SearchFilterStore, SearchFilters, SearchState, SortOption, ViewMode,
};
pub use storage::{FavoritesBackend, FavoritesRecord, JsonFavorites};
