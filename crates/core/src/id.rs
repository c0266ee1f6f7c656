//! Record identifiers used by the JSON-backed stores.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

static LAST_NANOS: AtomicI64 = AtomicI64::new(0);

/// Identifier of a stored record, shaped `<prefix>_<unix-nanos>` (e.g. `res_1718000000000000000`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    /// Create a new identifier from the current time.
    ///
    /// Strictly increasing within a process, even when the clock does not advance
    /// between two calls.
    pub fn generate(prefix: &str) -> Self {
        let now = Utc::now().timestamp_nanos_opt().unwrap_or(i64::MAX);
        let mut last = LAST_NANOS.load(Ordering::Relaxed);
        let nanos = loop {
            let candidate = now.max(last + 1);
            match LAST_NANOS.compare_exchange_weak(last, candidate, Ordering::Relaxed, Ordering::Relaxed) {
                Ok(_) => break candidate,
                Err(actual) => last = actual,
            }
        };
        Self(format!("{prefix}_{nanos}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for RecordId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<RecordId> for String {
    fn from(value: RecordId) -> Self {
        value.0
    }
}
