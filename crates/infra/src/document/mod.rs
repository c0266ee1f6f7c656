//! Whole-document storage abstractions.

pub mod json_file;
pub mod store;

pub use json_file::JsonFileStore;
pub use store::{DocumentStore, InMemoryStore, StoreError};
