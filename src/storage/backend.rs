//! Storage backend abstraction.
//!
//! This module defines the [`FavoritesBackend`] trait that abstracts over
//! persistence backends for the favorites store. The trait is minimal on
//! purpose: the store only ever loads once (at construction) and saves whole
//! records (on each mutation), so that is all the trait models.

use crate::domain::error::Result;
use crate::storage::models::FavoritesRecord;

/// Abstraction over device-local persistence for favorites.
///
/// Implementations decide *where* the record lives; the store decides *when*
/// to read and write it, and is responsible for swallowing failures (a
/// backend should report errors truthfully, not hide them).
///
/// # Implementations
///
/// - [`JsonFavorites`](crate::storage::JsonFavorites): JSON file with atomic
///   writes (default)
pub trait FavoritesBackend: Send {
    /// Loads the persisted record.
    ///
    /// A missing record is not an error: backends return the default (empty)
    /// record when nothing has been persisted yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the record exists but cannot be read or parsed.
    fn load(&self) -> Result<FavoritesRecord>;

    /// Persists the record, replacing whatever was stored before.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails. Callers treat saves as
    /// fire-and-forget; in-memory state is never rolled back on failure.
    fn save(&mut self, record: &FavoritesRecord) -> Result<()>;
}
