//! Domain layer for the Griyaku state core.
//!
//! This module contains the core domain types shared by the stores,
//! independent of any UI framework or infrastructure concern.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`listing`]: The listing record shape served by the hosted data source

pub mod error;
pub mod listing;

pub use error::{GriyakuError, Result};
pub use listing::{JenisProperti, Legalitas, ListingSummary, StatusListing, MAX_LISTING_IMAGES};
