use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),
}

/// A single document read and written as a whole.
pub trait DocumentStore<T>: Send + Sync {
    /// Current document; a store that was never written yields `T::default()`.
    fn load(&self) -> Result<T, StoreError>;

    fn save(&self, value: &T) -> Result<(), StoreError>;

    /// Read-modify-write under the store's lock.
    ///
    /// The document is written back only when `f` succeeds and actually changed it.
    fn modify<R, E>(&self, f: impl FnOnce(&mut T) -> Result<R, E>) -> Result<R, E>
    where
        E: From<StoreError>;
}

impl<T, S> DocumentStore<T> for Arc<S>
where
    S: DocumentStore<T> + ?Sized,
{
    fn load(&self) -> Result<T, StoreError> {
        (**self).load()
    }

    fn save(&self, value: &T) -> Result<(), StoreError> {
        (**self).save(value)
    }

    fn modify<R, E>(&self, f: impl FnOnce(&mut T) -> Result<R, E>) -> Result<R, E>
    where
        E: From<StoreError>,
    {
        (**self).modify(f)
    }
}

/// In-memory document store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryStore<T> {
    inner: Mutex<T>,
}

impl<T> InMemoryStore<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(value),
        }
    }
}

impl<T> DocumentStore<T> for InMemoryStore<T>
where
    T: Clone + PartialEq + Send,
{
    fn load(&self) -> Result<T, StoreError> {
        let guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        Ok(guard.clone())
    }

    fn save(&self, value: &T) -> Result<(), StoreError> {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        *guard = value.clone();
        Ok(())
    }

    fn modify<R, E>(&self, f: impl FnOnce(&mut T) -> Result<R, E>) -> Result<R, E>
    where
        E: From<StoreError>,
    {
        let mut guard = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        let mut draft = guard.clone();
        let out = f(&mut draft)?;
        if draft != *guard {
            *guard = draft;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modify_commits_only_on_success() {
        let store = InMemoryStore::new(vec![1, 2]);

        let res: Result<(), StoreError> = store.modify(|v| {
            v.push(3);
            Ok(())
        });
        assert!(res.is_ok());
        assert_eq!(store.load().unwrap(), vec![1, 2, 3]);

        let res: Result<(), String> = store.modify(|v| {
            v.clear();
            Err("rejected".to_string())
        });
        assert!(res.is_err());
        assert_eq!(store.load().unwrap(), vec![1, 2, 3]);
    }

    impl From<StoreError> for String {
        fn from(e: StoreError) -> Self {
            e.to_string()
        }
    }
}
