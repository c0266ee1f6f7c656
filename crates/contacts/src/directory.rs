//! Hash-gated, cached view of the phone directory spreadsheet.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, RwLock};
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, info, warn};

use portal_infra::DocumentStore;

use crate::contact::{ContactData, split_internal};
use crate::table::scan_table;
use crate::workbook::{WorkbookError, file_hash, read_workbook_rows};

/// Result of a [`ContactDirectory::refresh`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The spreadsheet hash matches the loaded data.
    Unchanged,
    /// The spreadsheet was parsed and the data replaced.
    Reloaded { count: usize },
    /// No spreadsheet at the source path; the directory is empty.
    Missing,
    /// The spreadsheet changed but could not be parsed; the directory is empty
    /// until the file changes again.
    Failed(String),
}

/// Phone directory parsed from a spreadsheet and cached as JSON.
pub struct ContactDirectory<S> {
    source: PathBuf,
    cache: S,
    current: RwLock<ContactData>,
    refresh_lock: Mutex<()>,
}

impl<S> ContactDirectory<S>
where
    S: DocumentStore<Option<ContactData>>,
{
    /// Load the cached data, then re-parse only if the spreadsheet changed since.
    pub fn open(source: impl Into<PathBuf>, cache: S) -> Self {
        let cached = match cache.load() {
            Ok(data) => data,
            Err(e) => {
                warn!(error = %e, "ignoring unreadable contact cache");
                None
            }
        };

        let directory = Self {
            source: source.into(),
            cache,
            current: RwLock::new(cached.unwrap_or_else(|| ContactData::empty(Utc::now(), ""))),
            refresh_lock: Mutex::new(()),
        };

        let outcome = directory.refresh();
        info!(?outcome, contacts = directory.total(), "contact directory opened");
        directory
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn snapshot(&self) -> ContactData {
        self.current.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn total(&self) -> usize {
        self.current.read().unwrap_or_else(|e| e.into_inner()).total()
    }

    /// Re-parse the spreadsheet if its content hash differs from the loaded data.
    pub fn refresh(&self) -> RefreshOutcome {
        let _guard = self.refresh_lock.lock().unwrap_or_else(|e| e.into_inner());

        if !self.source.exists() {
            info!(source = %self.source.display(), "contact spreadsheet not found, using empty data");
            self.replace(ContactData::empty(Utc::now(), ""));
            return RefreshOutcome::Missing;
        }

        let hash = match file_hash(&self.source) {
            Ok(hash) => hash,
            Err(e) => {
                warn!(error = %e, "contact spreadsheet hash check failed");
                return RefreshOutcome::Failed(e.to_string());
            }
        };

        if hash == self.current.read().unwrap_or_else(|e| e.into_inner()).file_hash {
            debug!("contact spreadsheet unchanged");
            return RefreshOutcome::Unchanged;
        }

        info!(source = %self.source.display(), "contact spreadsheet changed, parsing");
        match self.parse() {
            Ok(mut data) => {
                data.file_hash = hash;
                let count = data.total();
                if let Err(e) = self.cache.save(&Some(data.clone())) {
                    warn!(error = %e, "could not write contact cache");
                }
                self.replace(data);
                info!(count, "contacts loaded from spreadsheet");
                RefreshOutcome::Reloaded { count }
            }
            Err(e) => {
                warn!(error = %e, "failed to parse contact spreadsheet");
                self.replace(ContactData::empty(Utc::now(), hash));
                RefreshOutcome::Failed(e.to_string())
            }
        }
    }

    fn parse(&self) -> Result<ContactData, WorkbookError> {
        let rows = read_workbook_rows(&self.source)?;
        Ok(split_internal(scan_table(&rows), Utc::now()))
    }

    fn replace(&self, data: ContactData) {
        *self.current.write().unwrap_or_else(|e| e.into_inner()) = data;
    }
}

/// Periodically re-check the spreadsheet on the blocking pool.
pub fn spawn_watcher<S>(directory: Arc<ContactDirectory<S>>, every: Duration) -> tokio::task::JoinHandle<()>
where
    S: DocumentStore<Option<ContactData>> + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(every);
        // The first tick completes immediately; `open` already refreshed.
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let dir = Arc::clone(&directory);
            match tokio::task::spawn_blocking(move || dir.refresh()).await {
                Ok(outcome) => debug!(?outcome, "periodic contact check"),
                Err(e) => warn!(error = %e, "periodic contact check panicked"),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use portal_infra::{InMemoryStore, JsonFileStore};

    use super::*;
    use crate::contact::Contact;

    fn cached(hash: &str) -> ContactData {
        let mut data = ContactData::empty(Utc::now(), hash);
        data.contacts.push(Contact {
            name: "Jana Malá".to_string(),
            position: "Účetní".to_string(),
            ..Contact::default()
        });
        data
    }

    #[test]
    fn missing_spreadsheet_gives_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = InMemoryStore::new(Some(cached("stale")));
        let directory = ContactDirectory::open(dir.path().join("none.xlsx"), store);

        assert_eq!(directory.total(), 0);
        assert_eq!(directory.snapshot().file_hash, "");
        assert_eq!(directory.refresh(), RefreshOutcome::Missing);
    }

    #[test]
    fn matching_cache_skips_parsing() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("seznam.xlsx");
        std::fs::write(&source, b"not really a workbook").unwrap();
        let hash = file_hash(&source).unwrap();

        let directory = ContactDirectory::open(&source, InMemoryStore::new(Some(cached(&hash))));

        assert_eq!(directory.total(), 1);
        assert_eq!(directory.refresh(), RefreshOutcome::Unchanged);
    }

    #[test]
    fn spreadsheet_is_parsed_cached_and_then_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("seznam.xlsx");
        let cache_path = dir.path().join("contacts.json");
        crate::fixture::write_directory(&source);

        let directory = ContactDirectory::open(&source, JsonFileStore::new(&cache_path));
        let data = directory.snapshot();
        assert_eq!(data.file_hash, file_hash(&source).unwrap());

        assert_eq!(data.contacts.len(), 1);
        let jana = &data.contacts[0];
        assert_eq!(jana.name, "Malá Jana");
        assert_eq!(jana.position, "Účetní");
        assert!(jana.phone.is_empty());
        assert_eq!(jana.service_phone, "+420 602123456");
        assert_eq!(jana.phone_flap, "*245");
        assert!(!jana.internal);

        assert_eq!(data.internal_contacts.len(), 1);
        assert_eq!(data.internal_contacts[0].position, "Recepce");
        assert_eq!(data.internal_contacts[0].phone, "100");
        assert!(data.internal_contacts[0].internal);

        let cached = JsonFileStore::<Option<ContactData>>::new(&cache_path).load().unwrap();
        assert_eq!(cached, Some(data));
        assert_eq!(directory.refresh(), RefreshOutcome::Unchanged);
    }

    #[test]
    fn changed_spreadsheet_is_reloaded() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("seznam.xlsx");
        crate::fixture::write_directory(&source);

        let store = InMemoryStore::new(Some(cached("old-hash")));
        let directory = ContactDirectory::open(dir.path().join("later.xlsx"), store);
        assert_eq!(directory.refresh(), RefreshOutcome::Missing);

        std::fs::copy(&source, directory.source()).unwrap();
        assert_eq!(directory.refresh(), RefreshOutcome::Reloaded { count: 2 });
        assert_eq!(directory.total(), 2);
    }

    #[test]
    fn unparsable_change_empties_directory_until_next_change() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("seznam.xlsx");
        std::fs::write(&source, b"garbage v1").unwrap();

        let store = Arc::new(InMemoryStore::new(Some(cached("old-hash"))));
        let directory = ContactDirectory::open(&source, Arc::clone(&store));

        assert_eq!(directory.total(), 0);
        assert_eq!(directory.snapshot().file_hash, file_hash(&source).unwrap());
        assert_eq!(directory.refresh(), RefreshOutcome::Unchanged);
        // The cache keeps the last good parse.
        assert_eq!(store.load().unwrap().map(|d| d.total()), Some(1));

        std::fs::write(&source, b"garbage v2").unwrap();
        assert!(matches!(directory.refresh(), RefreshOutcome::Failed(_)));
    }
}
