//! Device-local persistence layer.
//!
//! Persistence in this crate is deliberately small: the only durable state is
//! the favorites record, written fire-and-forget after each mutation. The
//! [`FavoritesBackend`] trait keeps the store decoupled from any specific
//! storage location; [`JsonFavorites`] is the default file-based backend.

pub mod backend;
pub mod json;
pub mod models;

pub use backend::FavoritesBackend;
pub use json::JsonFavorites;
pub use models::{FavoritesRecord, FAVORITES_FORMAT_VERSION};
