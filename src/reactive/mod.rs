//! Reactive store primitive.
//!
//! The favorites and search-filter stores are both built on [`Store`], a
//! small subscribe/notify container deliberately decoupled from any UI
//! framework: components register plain closures and are called back
//! synchronously after each mutation.

pub mod store;

pub use store::Store;
