//! Outbound delivery of trip reports.

use lettre::message::{Mailbox, header::ContentType};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use thiserror::Error;

use crate::report::TripReport;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("invalid mail address {address}: {source}")]
    Address {
        address: String,
        #[source]
        source: lettre::address::AddressError,
    },

    #[error("failed to build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("smtp transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Sends a composed report somewhere a human will read it.
///
/// Implementations block; callers on an async runtime should run `send`
/// on a blocking thread.
pub trait ReportMailer: Send + Sync {
    fn send(&self, report: &TripReport) -> Result<(), MailError>;
}

#[derive(Debug, Clone)]
pub struct SmtpSettings {
    pub host: String,
    pub port: u16,
    pub username: Option<String>,
    pub password: Option<String>,
    pub from: String,
    pub to: String,
}

pub struct SmtpMailer {
    transport: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
}

fn mailbox(address: &str) -> Result<Mailbox, MailError> {
    address.parse::<Mailbox>().map_err(|source| MailError::Address {
        address: address.to_string(),
        source,
    })
}

impl SmtpMailer {
    /// Implicit-TLS relay (port 465 by default).
    pub fn new(settings: SmtpSettings) -> Result<Self, MailError> {
        let mut builder = SmtpTransport::relay(&settings.host)?.port(settings.port);
        if let (Some(user), Some(pass)) = (settings.username, settings.password) {
            builder = builder.credentials(Credentials::new(user, pass));
        }

        Ok(Self {
            transport: builder.build(),
            from: mailbox(&settings.from)?,
            to: mailbox(&settings.to)?,
        })
    }

}

fn compose_message(from: &Mailbox, to: &Mailbox, report: &TripReport) -> Result<Message, MailError> {
    Ok(Message::builder()
        .from(from.clone())
        .to(to.clone())
        .subject(report.subject.clone())
        .header(ContentType::TEXT_HTML)
        .body(report.html.clone())?)
}

impl ReportMailer for SmtpMailer {
    fn send(&self, report: &TripReport) -> Result<(), MailError> {
        let message = compose_message(&self.from, &self.to, report)?;
        self.transport.send(&message)?;
        tracing::info!(to = %self.to, subject = %report.subject, "trip report sent");
        Ok(())
    }
}

/// Fallback when SMTP is not configured: the report only goes to the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMailer;

impl ReportMailer for LogMailer {
    fn send(&self, report: &TripReport) -> Result<(), MailError> {
        tracing::warn!(
            subject = %report.subject,
            html_len = report.html.len(),
            "smtp not configured; trip report logged only"
        );
        tracing::debug!(html = %report.html, "trip report body");
        Ok(())
    }
}
