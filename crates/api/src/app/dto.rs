use serde::{Deserialize, Serialize};

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCredentialsRequest {
    pub current_username: String,
    pub current_password: String,
    pub new_username: String,
    pub new_password: String,
}

/// `GET /api/check-availability` parameters; missing ones arrive empty.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AvailabilityQuery {
    pub vehicle: String,
    pub start_date: String,
    pub start_time: String,
    pub end_date: String,
    pub end_time: String,
}

impl AvailabilityQuery {
    pub fn is_complete(&self) -> bool {
        [&self.vehicle, &self.start_date, &self.start_time, &self.end_date, &self.end_time]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub is_default_credentials: bool,
}
