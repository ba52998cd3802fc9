//! Session token signing and validation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::claims::SessionClaims;
use crate::error::AuthError;

/// Sign claims with the shared secret (HS256)
pub(crate) fn sign_token(claims: &SessionClaims, key: &EncodingKey) -> Result<String, AuthError> {
    encode(&Header::new(Algorithm::HS256), claims, key).map_err(|e| {
        tracing::error!(error = %e, "Failed to sign session token");
        AuthError::TokenIssueFailed
    })
}

/// Validate signature and expiry of a session token
pub(crate) fn validate_token(token: &str, key: &DecodingKey) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    // Identities are arbitrary objects; an `aud` field in one is not an audience claim
    validation.validate_aud = false;
    validation.leeway = 0;

    let token_data = decode::<SessionClaims>(token, key, &validation).map_err(|e| {
        tracing::debug!(error = %e, "Session token validation failed");
        AuthError::Unauthorized
    })?;

    Ok(token_data.claims)
}
