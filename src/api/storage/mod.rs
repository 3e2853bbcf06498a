//! Storage module for the API.
//!
//! Holds the consolidated in-memory project store and storage error types.

pub mod error;
pub mod memory;

pub use error::StorageError;
pub use memory::ProjectStore;
