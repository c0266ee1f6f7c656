//! The admin account: a username and a salted SHA-256 password hash.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use uuid::Uuid;

use portal_core::DomainError;
use portal_infra::{DocumentStore, StoreError};

pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin";

#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Persisted form of the admin account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub salt: String,
    pub password_hash: String,
}

impl Credentials {
    pub fn new(username: &str, password: &str) -> Self {
        let salt = Uuid::new_v4().simple().to_string();
        let password_hash = hash_password(&salt, password);
        Self {
            username: username.to_string(),
            salt,
            password_hash,
        }
    }

    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password_hash == hash_password(&self.salt, password)
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Admin account backed by a document store (`credentials.json` in production).
pub struct CredentialStore<S> {
    store: S,
}

impl<S> CredentialStore<S>
where
    S: DocumentStore<Credentials>,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns whether the factory default login was used.
    pub fn authenticate(&self, username: &str, password: &str) -> Result<bool, CredentialError> {
        let current = self.store.load()?;
        if !current.matches(username, password) {
            tracing::warn!(username, "admin login rejected");
            return Err(CredentialError::InvalidCredentials);
        }
        Ok(username == DEFAULT_USERNAME && password == DEFAULT_PASSWORD)
    }

    /// Replace the account after re-checking the current login.
    pub fn update(
        &self,
        current_username: &str,
        current_password: &str,
        new_username: &str,
        new_password: &str,
    ) -> Result<(), CredentialError> {
        let new_username = new_username.trim();
        if new_username.is_empty() || new_password.is_empty() {
            return Err(DomainError::validation("New username and password are required").into());
        }

        self.store.modify(|creds| {
            if !creds.matches(current_username, current_password) {
                return Err(CredentialError::InvalidCredentials);
            }
            *creds = Credentials::new(new_username, new_password);
            Ok(())
        })?;

        tracing::info!(username = new_username, "admin credentials updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_infra::{InMemoryStore, JsonFileStore};

    fn store() -> CredentialStore<InMemoryStore<Credentials>> {
        CredentialStore::new(InMemoryStore::new(Credentials::default()))
    }

    #[test]
    fn default_login_is_flagged() {
        let creds = store();
        assert!(creds.authenticate("admin", "admin").unwrap());
        assert!(matches!(
            creds.authenticate("admin", "wrong"),
            Err(CredentialError::InvalidCredentials)
        ));
    }

    #[test]
    fn update_requires_current_login() {
        let creds = store();
        assert!(matches!(
            creds.update("admin", "nope", "boss", "s3cret"),
            Err(CredentialError::InvalidCredentials)
        ));
        assert!(matches!(
            creds.update("admin", "admin", " ", "s3cret"),
            Err(CredentialError::Domain(DomainError::Validation(_)))
        ));

        creds.update("admin", "admin", "boss", "s3cret").unwrap();
        assert!(!creds.authenticate("boss", "s3cret").unwrap());
        assert!(creds.authenticate("admin", "admin").is_err());
    }

    #[test]
    fn password_is_not_stored_in_clear() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("credentials.json");
        let creds = CredentialStore::new(JsonFileStore::<Credentials>::new(&path));
        creds.update("admin", "admin", "boss", "hunter2").unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains("boss"));
        assert!(!raw.contains("hunter2"));
        assert!(creds.authenticate("boss", "hunter2").is_ok());
    }
}
