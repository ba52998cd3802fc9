//! Session cookie transport

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::{Duration, OffsetDateTime};

use crate::claims::TOKEN_TTL_SECS;
use crate::config::AuthConfig;

/// Name of the cookie carrying the session token
pub const SESSION_COOKIE: &str = "token";

fn same_site(config: &AuthConfig) -> SameSite {
    if config.production {
        SameSite::None
    } else {
        SameSite::Strict
    }
}

/// Cookie carrying a freshly issued token
pub(crate) fn session_cookie(token: String, config: &AuthConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .secure(config.production)
        .same_site(same_site(config))
        .max_age(Duration::seconds(TOKEN_TTL_SECS))
        .build()
}

/// Already-expired cookie with matching attributes; clients drop the token
pub(crate) fn revoked_cookie(config: &AuthConfig) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .http_only(true)
        .secure(config.production)
        .same_site(same_site(config))
        .max_age(Duration::ZERO)
        .expires(OffsetDateTime::UNIX_EPOCH)
        .build()
}
