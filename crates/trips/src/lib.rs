//! Company car trip log.
//!
//! Drivers submit a trip record after returning a company car; the record is
//! validated, rendered as an HTML report in Czech and mailed to the fleet inbox.

pub mod entry;
pub mod mailer;
pub mod report;

pub use entry::{GeoCoords, TripEntry};
pub use mailer::{LogMailer, MailError, ReportMailer, SmtpMailer, SmtpSettings};
pub use report::{TripReport, compose_report, format_czech_date, trip_duration};
