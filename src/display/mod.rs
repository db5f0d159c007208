//! Display-value helpers: price formatting and slugs.
//!
//! Pure functions consumed by page templates. They take domain values and
//! produce strings; nothing here touches the stores.

pub mod harga;
pub mod slug;

pub use harga::{format_harga, format_harga_per_m2};
pub use slug::{listing_slug, slugify};
