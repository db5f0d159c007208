//! Storage location resolution.
//!
//! Favorites are persisted per-user under the platform data directory,
//! following the XDG base directory convention with a home-directory
//! fallback. A relative fallback to the working directory keeps the crate
//! usable in environments without a home directory (CI sandboxes).

use std::path::PathBuf;

/// Namespace directory for all Griyaku device-local state.
pub const STORAGE_NAMESPACE: &str = "griyaku";

/// Returns the data directory for Griyaku storage.
///
/// Resolution order: `$XDG_DATA_HOME/griyaku`, then
/// `$HOME/.local/share/griyaku`, then `./griyaku`.
#[must_use]
pub fn data_dir() -> PathBuf {
    let base = std::env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| {
            std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".local").join("share"))
        })
        .unwrap_or_else(|| PathBuf::from("."));

    base.join(STORAGE_NAMESPACE)
}

/// Returns the default location of the persisted favorites record.
#[must_use]
pub fn favorites_file() -> PathBuf {
    data_dir().join("favorites.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn favorites_file_lives_under_namespace() {
        let path = favorites_file();
        assert!(path.ends_with("griyaku/favorites.json"));
    }
}
