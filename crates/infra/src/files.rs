use std::path::{Path, PathBuf};

/// Locations of the portal's JSON documents inside the data directory.
#[derive(Debug, Clone)]
pub struct DataFiles {
    root: PathBuf,
}

impl DataFiles {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn reservations(&self) -> PathBuf {
        self.root.join("reservations.json")
    }

    pub fn apps(&self) -> PathBuf {
        self.root.join("apps.json")
    }

    pub fn cards(&self) -> PathBuf {
        self.root.join("cards.json")
    }

    pub fn banner(&self) -> PathBuf {
        self.root.join("banner.json")
    }

    pub fn visitor_stats(&self) -> PathBuf {
        self.root.join("visitor_stats.json")
    }

    pub fn credentials(&self) -> PathBuf {
        self.root.join("credentials.json")
    }

    pub fn contacts_cache(&self) -> PathBuf {
        self.root.join("contacts.json")
    }
}
