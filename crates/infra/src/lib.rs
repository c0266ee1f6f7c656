//! Infrastructure layer: persistence of portal documents.
//!
//! Every portal collection (reservations, apps, cards, banner, ...) is a single
//! JSON document on disk, read and rewritten as a whole.

pub mod document;
pub mod files;

pub use document::{DocumentStore, InMemoryStore, JsonFileStore, StoreError};
pub use files::DataFiles;
