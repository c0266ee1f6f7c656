//! Process-wide services shared by all handlers.

use std::sync::Arc;

use portal_auth::{CredentialStore, Credentials, Hs256TokenIssuer};
use portal_contacts::{ContactData, ContactDirectory};
use portal_content::{App, Banner, CardDeck, VisitorStats};
use portal_infra::{DataFiles, DocumentStore, JsonFileStore, StoreError};
use portal_reservations::Reservation;
use portal_trips::{LogMailer, MailError, ReportMailer, SmtpMailer};

use crate::app::errors::ApiError;
use crate::config::AppConfig;

pub type ContactCache = JsonFileStore<Option<ContactData>>;
pub type Contacts = ContactDirectory<ContactCache>;

pub struct AppServices {
    pub reservations: JsonFileStore<Vec<Reservation>>,
    pub apps: JsonFileStore<Vec<App>>,
    pub cards: JsonFileStore<CardDeck>,
    pub banner: JsonFileStore<Banner>,
    pub visits: JsonFileStore<VisitorStats>,
    pub credentials: CredentialStore<JsonFileStore<Credentials>>,
    pub tokens: Hs256TokenIssuer,
    pub contacts: Arc<Contacts>,
    pub mailer: Arc<dyn ReportMailer>,
}

impl AppServices {
    /// Open every store under the configured data directory and load the
    /// phone directory (blocking: may parse the spreadsheet).
    pub fn open(config: &AppConfig, mailer: Arc<dyn ReportMailer>) -> Result<Self, StoreError> {
        let files = DataFiles::new(&config.data_dir);

        let services = Self {
            reservations: JsonFileStore::new(files.reservations()),
            apps: JsonFileStore::new(files.apps()),
            cards: JsonFileStore::new(files.cards()),
            banner: JsonFileStore::new(files.banner()),
            visits: JsonFileStore::new(files.visitor_stats()),
            credentials: CredentialStore::new(JsonFileStore::new(files.credentials())),
            tokens: Hs256TokenIssuer::new(config.jwt_secret.clone().into_bytes()),
            contacts: Arc::new(ContactDirectory::open(
                &config.contacts_xlsx,
                JsonFileStore::new(files.contacts_cache()),
            )),
            mailer,
        };

        services.current_banner()?;
        Ok(services)
    }

    /// Run a closure over the stores on the blocking pool; the JSON stores do
    /// synchronous file I/O under a mutex.
    pub async fn blocking<R, F>(self: &Arc<Self>, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&AppServices) -> Result<R, ApiError> + Send + 'static,
        R: Send + 'static,
    {
        let services = Arc::clone(self);
        tokio::task::spawn_blocking(move || f(&services))
            .await
            .map_err(|e| ApiError::Task(e.to_string()))?
    }

    /// Stored banner; the default one is written when the file is missing or corrupt.
    pub fn current_banner(&self) -> Result<Banner, StoreError> {
        match self.banner.load() {
            Ok(banner) if self.banner.exists() => Ok(banner),
            Ok(banner) => {
                self.banner.save(&banner)?;
                Ok(banner)
            }
            Err(StoreError::Decode { path, source }) => {
                tracing::warn!(path = %path.display(), error = %source, "banner file corrupt, restoring default");
                let banner = Banner::default();
                self.banner.save(&banner)?;
                Ok(banner)
            }
            Err(e) => Err(e),
        }
    }
}

/// SMTP delivery when configured, otherwise reports are only logged.
pub fn mailer_from_config(config: &AppConfig) -> Result<Arc<dyn ReportMailer>, MailError> {
    match &config.smtp {
        Some(settings) => {
            tracing::info!(host = %settings.host, port = settings.port, "smtp delivery enabled");
            Ok(Arc::new(SmtpMailer::new(settings.clone())?))
        }
        None => {
            tracing::warn!("SMTP not configured; trip reports will only be logged");
            Ok(Arc::new(LogMailer))
        }
    }
}
