//! Logging setup shared by the portal binaries and tests.

pub mod subscriber;

pub use subscriber::{LogFormat, init, init_with};
