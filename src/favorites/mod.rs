//! Favorited listings, persisted across sessions.
//!
//! [`FavoritesStore`] tracks which listing ids the current user has
//! bookmarked, durably on the same device. Persistence is a fire-and-forget
//! side effect of each mutation: a failed write is logged and swallowed, and
//! the in-memory set is never rolled back, because favorites are a
//! convenience feature that must never produce a user-visible error. For the
//! same reason a missing or corrupt persisted record loads as the empty set.

use crate::reactive::Store;
use crate::storage::{FavoritesBackend, FavoritesRecord, JsonFavorites};
use std::sync::{Arc, Mutex, PoisonError};

/// An ordered set of favorited listing ids.
///
/// Ids keep the order the user added them in (a plain `HashSet` would lose
/// it) and are never duplicated. Favorites lists are small, so linear
/// membership checks are fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoriteSet {
    ids: Vec<String>,
}

impl FavoriteSet {
    /// Builds a set from persisted ids, dropping any duplicates.
    ///
    /// Well-behaved writers never persist duplicates, but the record is
    /// hand-editable JSON, so the invariant is re-established on load.
    #[must_use]
    pub fn from_ids(ids: Vec<String>) -> Self {
        let mut set = Self::default();
        for id in ids {
            if !set.contains(&id) {
                set.ids.push(id);
            }
        }
        set
    }

    /// Adds `id` if absent, removes it if present. Returns new membership.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.ids.iter().position(|existing| existing == id) {
            self.ids.remove(pos);
            false
        } else {
            self.ids.push(id.to_string());
            true
        }
    }

    /// Pure membership test.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|existing| existing == id)
    }

    /// Empties the set.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// The ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

/// Reactive store for the user's favorited listings.
///
/// A process-wide singleton: listing cards call [`toggle`](Self::toggle) and
/// read [`is_favorite`](Self::is_favorite), the favorites page subscribes to
/// re-render. Every mutation notifies subscribers synchronously and then
/// schedules a durable write to the backend.
///
/// # Example
///
/// ```no_run
/// use griyaku::favorites::FavoritesStore;
///
/// let store = FavoritesStore::open();
/// store.toggle("GP1204");
/// assert!(store.is_favorite("GP1204"));
/// store.toggle("GP1204");
/// assert!(!store.is_favorite("GP1204"));
/// ```
#[derive(Clone)]
pub struct FavoritesStore {
    state: Store<FavoriteSet>,
    backend: Arc<Mutex<Box<dyn FavoritesBackend>>>,
}

impl FavoritesStore {
    /// Creates a store over the given backend, loading persisted state.
    ///
    /// A load failure (unreadable or corrupt record) falls back to the empty
    /// set with a warn-level log; it is never surfaced to the caller.
    pub fn new(backend: Box<dyn FavoritesBackend>) -> Self {
        let record = backend.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to load favorites, starting empty");
            FavoritesRecord::default()
        });

        tracing::debug!(count = record.favorites.len(), "favorites store ready");

        Self {
            state: Store::new(FavoriteSet::from_ids(record.favorites)),
            backend: Arc::new(Mutex::new(backend)),
        }
    }

    /// Creates a store persisted at the default per-user location.
    ///
    /// Falls back to the empty set (and logs) if the location cannot even be
    /// prepared; the store then runs in-memory only for this session.
    #[must_use]
    pub fn open() -> Self {
        match JsonFavorites::at_default_location() {
            Ok(backend) => Self::new(Box::new(backend)),
            Err(e) => {
                tracing::warn!(error = %e, "favorites storage unavailable, running in-memory");
                Self {
                    state: Store::new(FavoriteSet::default()),
                    backend: Arc::new(Mutex::new(Box::new(NullBackend))),
                }
            }
        }
    }

    /// Toggles `id` in the favorites set and returns its new membership.
    ///
    /// Always succeeds. Subscribers are notified synchronously, then the new
    /// set is persisted fire-and-forget.
    pub fn toggle(&self, id: &str) -> bool {
        let mut now_favorite = false;
        self.state.update(|set| {
            now_favorite = set.toggle(id);
        });
        tracing::debug!(listing_id = %id, favorite = now_favorite, "favorite toggled");
        self.persist();
        now_favorite
    }

    /// Pure membership test; no side effects.
    #[must_use]
    pub fn is_favorite(&self, id: &str) -> bool {
        self.state.read(|set| set.contains(id))
    }

    /// Empties the set and persists the empty state.
    pub fn clear(&self) {
        self.state.update(FavoriteSet::clear);
        tracing::debug!("favorites cleared");
        self.persist();
    }

    /// Number of favorited listings.
    #[must_use]
    pub fn count(&self) -> usize {
        self.state.read(FavoriteSet::len)
    }

    /// Returns the favorited ids in insertion order.
    #[must_use]
    pub fn ids(&self) -> Vec<String> {
        self.state.read(|set| set.ids().to_vec())
    }

    /// Registers an observer notified synchronously after every mutation.
    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn(&FavoriteSet) + Send + Sync + 'static,
    {
        self.state.subscribe(callback);
    }

    /// Schedules a durable write of the current set.
    ///
    /// Fire-and-forget: a failure is logged at warn level and otherwise
    /// ignored, leaving the in-memory state authoritative for this session.
    fn persist(&self) {
        let record = FavoritesRecord::new(self.ids());
        let mut backend = self.backend.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(e) = backend.save(&record) {
            tracing::warn!(error = %e, "failed to persist favorites");
        }
    }
}

impl std::fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Backend used when no storage location is available; saves nothing.
struct NullBackend;

impl FavoritesBackend for NullBackend {
    fn load(&self) -> crate::domain::Result<FavoritesRecord> {
        Ok(FavoritesRecord::default())
    }

    fn save(&mut self, _record: &FavoritesRecord) -> crate::domain::Result<()> {
        Ok(())
    }
}
