use chrono::{DateTime, Utc};

/// Authenticated admin for a request, inserted by the auth middleware.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminContext {
    username: String,
    expires_at: Option<DateTime<Utc>>,
}

impl AdminContext {
    pub fn new(username: String, expires_at: Option<DateTime<Utc>>) -> Self {
        Self { username, expires_at }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }
}
