//! Session token claims

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Lifetime of a session token: one hour from issuance
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Claims set by the issuer; identities supplying them are rejected
pub const REGISTERED_CLAIMS: [&str; 2] = ["iat", "exp"];

/// Claims carried by a session token.
///
/// The caller-supplied identity is embedded verbatim next to the
/// registered `iat`/`exp` claims, so the identity must not carry those keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(flatten)]
    pub identity: Map<String, Value>,
    /// Issued at (seconds since epoch)
    pub iat: i64,
    /// Expires at (seconds since epoch)
    pub exp: i64,
}

impl SessionClaims {
    /// Claims for `identity`, issued at `now` and expiring one hour later.
    pub fn new(identity: Map<String, Value>, now: DateTime<Utc>) -> Self {
        let iat = now.timestamp();
        Self {
            identity,
            iat,
            exp: iat + TOKEN_TTL_SECS,
        }
    }
}
