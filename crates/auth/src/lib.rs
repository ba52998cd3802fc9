//! Session authentication for the SoloSphere API
//!
//! Provides the credential issuer (signed session tokens carried in the
//! `token` cookie) and the session guard: an axum extractor that works with
//! any domain state implementing `FromRef<S>` for `AuthBackend`.

mod backend;
mod claims;
mod config;
mod context;
mod cookie;
mod error;
mod extractors;
mod jwt;

pub use backend::AuthBackend;
pub use claims::{SessionClaims, REGISTERED_CLAIMS, TOKEN_TTL_SECS};
pub use config::AuthConfig;
pub use context::SessionContext;
pub use cookie::SESSION_COOKIE;
pub use error::AuthError;
pub use extractors::SessionUser;
