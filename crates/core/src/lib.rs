//! `portal-core` — domain foundation building blocks shared by the portal crates.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;

pub use entity::{Entity, find_by_id, position_by_id};
pub use error::{DomainError, DomainResult};
pub use id::RecordId;
