//! Session context for authenticated requests

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Map, Value};

use crate::claims::SessionClaims;

/// Identity decoded from a verified session token
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub identity: Map<String, Value>,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl SessionContext {
    /// Email claim of the session identity, if it carries one
    pub fn email(&self) -> Option<&str> {
        self.identity.get("email").and_then(Value::as_str)
    }
}

impl From<SessionClaims> for SessionContext {
    fn from(claims: SessionClaims) -> Self {
        Self {
            identity: claims.identity,
            issued_at: Utc.timestamp_opt(claims.iat, 0).single().unwrap_or_default(),
            expires_at: Utc.timestamp_opt(claims.exp, 0).single().unwrap_or_default(),
        }
    }
}
