use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sessions last one working day.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// JWT claims carried by admin session tokens (seconds since the epoch).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Admin username.
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn new(sub: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self {
            sub: sub.into(),
            iat: now.timestamp(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        }
    }

    pub fn issued_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.iat, 0).single()
    }

    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenValidationError {
    #[error("token has expired")]
    Expired,

    #[error("token not yet valid (iat is in the future)")]
    NotYetValid,

    #[error("invalid token time window (exp <= iat)")]
    InvalidTimeWindow,
}

/// Check the claim time window against `now`. Signature checks happen in [`crate::token`].
pub fn validate_claims(claims: &Claims, now: DateTime<Utc>) -> Result<(), TokenValidationError> {
    let now = now.timestamp();
    if claims.exp <= claims.iat {
        return Err(TokenValidationError::InvalidTimeWindow);
    }
    if now < claims.iat {
        return Err(TokenValidationError::NotYetValid);
    }
    if now >= claims.exp {
        return Err(TokenValidationError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 5, 8, 0, 0).unwrap()
    }

    #[test]
    fn fresh_claims_are_valid_for_a_day() {
        let claims = Claims::new("admin", t0());
        assert_eq!(claims.exp - claims.iat, 24 * 3600);
        assert!(validate_claims(&claims, t0()).is_ok());
        assert!(validate_claims(&claims, t0() + Duration::hours(23)).is_ok());
        assert_eq!(
            validate_claims(&claims, t0() + Duration::hours(24)),
            Err(TokenValidationError::Expired)
        );
    }

    #[test]
    fn rejects_future_and_inverted_claims() {
        let claims = Claims::new("admin", t0());
        assert_eq!(
            validate_claims(&claims, t0() - Duration::minutes(1)),
            Err(TokenValidationError::NotYetValid)
        );

        let inverted = Claims {
            exp: claims.iat,
            ..claims
        };
        assert_eq!(validate_claims(&inverted, t0()), Err(TokenValidationError::InvalidTimeWindow));
    }
}
