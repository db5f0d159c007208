//! Infrastructure layer: platform-specific utilities.

pub mod paths;

pub use paths::{data_dir, favorites_file, STORAGE_NAMESPACE};
