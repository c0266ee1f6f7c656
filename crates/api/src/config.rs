//! Runtime configuration from environment variables (and an optional `.env`).

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use portal_trips::SmtpSettings;

const DEV_JWT_SECRET: &str = "dev-secret-change-me";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be a number, got {value:?}")]
    InvalidNumber { var: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub port: u16,
    pub data_dir: PathBuf,
    pub static_dir: PathBuf,
    pub uploads_dir: PathBuf,
    pub contacts_xlsx: PathBuf,
    pub contacts_check_interval: Duration,
    pub jwt_secret: String,
    /// `None` when SMTP is not configured; reports are then only logged.
    pub smtp: Option<SmtpSettings>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                tracing::warn!(error = %e, "ignoring unreadable .env file");
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let path = |key: &str, default: &str| PathBuf::from(get(key).unwrap_or_else(|| default.to_string()));

        let port = parse_number(&get, "PORT", 8080)?;
        let interval_secs = parse_number(&get, "CONTACTS_CHECK_INTERVAL_SECS", 3600u64)?;

        let jwt_secret = get("JWT_SECRET").unwrap_or_else(|| {
            tracing::warn!("JWT_SECRET not set; using insecure dev default");
            DEV_JWT_SECRET.to_string()
        });

        let smtp = match (get("SMTP_HOST"), get("MAIL_FROM"), get("MAIL_TO")) {
            (Some(host), Some(from), Some(to)) => Some(SmtpSettings {
                host,
                port: parse_number(&get, "SMTP_PORT", 465)?,
                username: get("SMTP_USERNAME"),
                password: get("SMTP_PASSWORD"),
                from,
                to,
            }),
            _ => None,
        };

        Ok(Self {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            data_dir: path("DATA_DIR", "data"),
            static_dir: path("STATIC_DIR", "."),
            uploads_dir: path("UPLOADS_DIR", "uploads"),
            contacts_xlsx: path("CONTACTS_XLSX", "TelefonniSeznamWeb.xlsx"),
            contacts_check_interval: Duration::from_secs(interval_secs.max(1)),
            jwt_secret,
            smtp,
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    pub fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        std::fs::create_dir_all(&self.uploads_dir)?;
        Ok(())
    }
}

fn parse_number<T: std::str::FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match get(var) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError::InvalidNumber { var, value }),
    }
}
