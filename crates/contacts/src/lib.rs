//! Company phone directory.
//!
//! The directory is maintained by HR as a spreadsheet. This crate scans the
//! first sheet into contact records, keeps the parsed result cached as JSON and
//! re-parses only when the spreadsheet's content hash changes.

pub mod contact;
pub mod directory;
pub mod phone;
pub mod table;
pub mod workbook;

pub use contact::{Contact, ContactData, INTERNAL_MARKER, split_internal};
pub use directory::{ContactDirectory, RefreshOutcome, spawn_watcher};
pub use phone::{format_phone_flap, format_phone_number};
pub use table::scan_table;
pub use workbook::{WorkbookError, file_hash, read_workbook_rows};

#[cfg(test)]
pub(crate) mod fixture;
