//! Storage record models for the persistence layer.
//!
//! These types are the on-disk representation, kept separate from the
//! in-memory store state so the persisted format can evolve without touching
//! store logic.

use serde::{Deserialize, Serialize};

/// Current version of the persisted favorites format.
pub const FAVORITES_FORMAT_VERSION: u32 = 1;

/// The persisted favorites record.
///
/// This is the top-level structure serialized under the favorites namespace.
/// It must round-trip the id list losslessly and stay forward-compatible:
/// every field carries `#[serde(default)]` so records written by older
/// versions still load, and unknown extra fields are ignored on read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoritesRecord {
    /// Version of the storage format for future migrations.
    #[serde(default)]
    pub version: u32,

    /// Favorited listing ids, in the order the user added them.
    #[serde(default)]
    pub favorites: Vec<String>,

    /// Unix timestamp of the last write, `None` for records that predate it.
    #[serde(default)]
    pub updated_at: Option<i64>,
}

impl Default for FavoritesRecord {
    fn default() -> Self {
        Self {
            version: FAVORITES_FORMAT_VERSION,
            favorites: Vec::new(),
            updated_at: None,
        }
    }
}

impl FavoritesRecord {
    /// Creates a record for the given ids, stamped with the current time.
    #[must_use]
    pub fn new(favorites: Vec<String>) -> Self {
        Self {
            version: FAVORITES_FORMAT_VERSION,
            favorites,
            updated_at: Some(chrono::Utc::now().timestamp()),
        }
    }
}
