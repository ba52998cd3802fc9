//! Authentication configuration

use solosphere_common::config::Config;

/// Authentication configuration
#[derive(Clone)]
pub struct AuthConfig {
    /// Shared secret for signing and verifying session tokens
    pub token_secret: String,
    /// Production mode: `Secure; SameSite=None` cookies
    pub production: bool,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("token_secret", &"[REDACTED]")
            .field("production", &self.production)
            .finish()
    }
}

impl From<&Config> for AuthConfig {
    fn from(config: &Config) -> Self {
        Self {
            token_secret: config.access_token_secret.clone(),
            production: config.production,
        }
    }
}
