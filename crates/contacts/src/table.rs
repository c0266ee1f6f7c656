//! Row scanner for the phone directory sheet.
//!
//! Sheet layout: three title/header rows, one contact per row in columns A-E
//! (name, position, phone, service phone, flap extension), and a three-row
//! footer that starts with an "Aktualizace: <date>" line.

use crate::contact::Contact;
use crate::phone::{format_phone_flap, format_phone_number};

const HEADER_ROWS: usize = 3;
const FOOTER_ROWS: usize = 3;
const END_MARKER: &str = "aktualizace";

const NAME_COL: usize = 0;
const POSITION_COL: usize = 1;
const PHONE_COL: usize = 2;
const SERVICE_PHONE_COL: usize = 3;
const FLAP_COL: usize = 4;

/// Scan sheet rows (index 0 is spreadsheet row 1) into contacts.
pub fn scan_table(rows: &[Vec<String>]) -> Vec<Contact> {
    let start = HEADER_ROWS;
    let end = rows.len().saturating_sub(FOOTER_ROWS);
    if end <= start {
        return Vec::new();
    }

    let mut contacts = Vec::new();
    for row in &rows[start..end] {
        let Some(name) = row.get(NAME_COL) else {
            continue;
        };

        if name.to_lowercase().contains(END_MARKER) {
            break;
        }

        contacts.push(Contact {
            name: name.trim().to_string(),
            position: cell(row, POSITION_COL).trim().to_string(),
            phone: format_phone_number(cell(row, PHONE_COL)),
            service_phone: format_phone_number(cell(row, SERVICE_PHONE_COL)),
            internal: false,
            phone_flap: format_phone_flap(cell(row, FLAP_COL)),
        });
    }

    contacts
}

fn cell(row: &[String], index: usize) -> &str {
    row.get(index).map(String::as_str).unwrap_or("")
}
