//! `portal-auth` — admin authentication for the portal.
//!
//! One admin account guards the dashboard. Credentials live in a document
//! store as a salted hash; sessions are HS256 JWTs. Nothing here knows about HTTP.

pub mod claims;
pub mod credentials;
pub mod token;

pub use claims::{Claims, TOKEN_TTL_HOURS, TokenValidationError, validate_claims};
pub use credentials::{CredentialError, CredentialStore, Credentials, DEFAULT_PASSWORD, DEFAULT_USERNAME};
pub use token::{Hs256JwtValidator, Hs256TokenIssuer, JwtValidator, TokenError};
