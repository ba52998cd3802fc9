//! Credential issuer and verifier
//!
//! Holds the signing keys derived from the shared secret. Domain states
//! expose this via `FromRef`:
//! ```ignore
//! impl FromRef<MyDomainState> for AuthBackend {
//!     fn from_ref(state: &MyDomainState) -> Self {
//!         state.auth.clone()
//!     }
//! }
//! ```

use std::sync::Arc;

use axum_extra::extract::cookie::Cookie;
use chrono::{DateTime, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey};
use serde_json::Value;

use crate::claims::{SessionClaims, REGISTERED_CLAIMS};
use crate::config::AuthConfig;
use crate::context::SessionContext;
use crate::cookie::{revoked_cookie, session_cookie};
use crate::error::AuthError;
use crate::jwt::{sign_token, validate_token};

#[derive(Clone)]
pub struct AuthBackend {
    config: Arc<AuthConfig>,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
}

impl AuthBackend {
    pub fn new(config: AuthConfig) -> Self {
        let secret = config.token_secret.as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Mint a session token embedding `identity`, valid for one hour.
    pub fn issue(&self, identity: Value) -> Result<String, AuthError> {
        self.issue_at(identity, Utc::now())
    }

    /// Mint a session token as if issued at `now`.
    pub fn issue_at(&self, identity: Value, now: DateTime<Utc>) -> Result<String, AuthError> {
        let identity = match identity {
            Value::Object(map) => map,
            _ => {
                return Err(AuthError::BadRequest(
                    "identity payload must be a JSON object".to_string(),
                ))
            }
        };

        if let Some(claim) = REGISTERED_CLAIMS
            .iter()
            .find(|claim| identity.contains_key(**claim))
        {
            return Err(AuthError::BadRequest(format!(
                "identity payload must not set the \"{}\" claim",
                claim
            )));
        }

        sign_token(&SessionClaims::new(identity, now), &self.encoding_key)
    }

    /// Verify signature and expiry, returning the embedded identity.
    pub fn verify(&self, token: &str) -> Result<SessionContext, AuthError> {
        validate_token(token, &self.decoding_key).map(SessionContext::from)
    }

    /// Cookie transporting `token` to the client.
    pub fn session_cookie(&self, token: String) -> Cookie<'static> {
        session_cookie(token, &self.config)
    }

    /// Cookie instructing the client to discard its session token.
    pub fn revoked_cookie(&self) -> Cookie<'static> {
        revoked_cookie(&self.config)
    }
}
