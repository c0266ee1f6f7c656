use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Name cell used by HR for shared internal lines (reception, workshop, ...).
pub const INTERNAL_MARKER: &str = "Interní";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub name: String,
    pub position: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service_phone: String,
    #[serde(default)]
    pub internal: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub phone_flap: String,
}

/// Parsed directory as served to the contact page and cached on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactData {
    pub contacts: Vec<Contact>,
    pub internal_contacts: Vec<Contact>,
    pub last_updated: DateTime<Utc>,
    /// MD5 of the spreadsheet the data was parsed from; empty when there was none.
    pub file_hash: String,
}

impl ContactData {
    pub fn empty(now: DateTime<Utc>, file_hash: impl Into<String>) -> Self {
        Self {
            contacts: Vec::new(),
            internal_contacts: Vec::new(),
            last_updated: now,
            file_hash: file_hash.into(),
        }
    }

    pub fn total(&self) -> usize {
        self.contacts.len() + self.internal_contacts.len()
    }
}

/// Partition scanned rows into regular and internal contacts.
pub fn split_internal(scanned: Vec<Contact>, now: DateTime<Utc>) -> ContactData {
    let mut data = ContactData::empty(now, "");
    for mut contact in scanned {
        contact.internal = contact.name.trim() == INTERNAL_MARKER;
        if contact.internal {
            data.internal_contacts.push(contact);
        } else {
            data.contacts.push(contact);
        }
    }
    data
}
