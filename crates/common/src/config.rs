//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables once at process
//! start. Nothing is re-read while the server is running.

use anyhow::Result;
use std::env;

/// Origins allowed to make credentialed cross-origin requests by default
pub const DEFAULT_CORS_ORIGINS: &str = "http://localhost:5173,http://localhost:5174";

/// Default cluster host used when the URI is assembled from credentials
pub const DEFAULT_DB_HOST: &str = "cluster0.qhiqbma.mongodb.net";

#[derive(Clone)]
pub struct Config {
    /// Document store connection string (embeds credentials)
    pub database_url: String,
    /// Database holding the `jobs` and `bids` collections
    pub database_name: String,

    /// Store provider (mongodb, mock)
    pub store_provider: String,

    /// Shared secret used to sign session tokens
    pub access_token_secret: String,
    /// Production mode: cross-site, secure cookies
    pub production: bool,

    /// Origins permitted by the CORS layer
    pub cors_allowed_origins: Vec<String>,

    /// Runtime configuration
    pub log_format: String,
    pub port: u16,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_name", &self.database_name)
            .field("store_provider", &self.store_provider)
            .field("access_token_secret", &"[REDACTED]")
            .field("production", &self.production)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .field("log_format", &self.log_format)
            .field("port", &self.port)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store_provider = lookup("STORE_PROVIDER").unwrap_or_else(|| "mongodb".to_string());

        let database_url = match lookup("MONGODB_URI") {
            Some(uri) => uri,
            None => match (lookup("DB_USER"), lookup("DB_PASS")) {
                (Some(user), Some(pass)) => {
                    let host = lookup("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string());
                    format!(
                        "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority&appName=Cluster0",
                        user, pass, host
                    )
                }
                _ if store_provider == "mock" => String::new(),
                _ => {
                    return Err(anyhow::anyhow!(
                        "MONGODB_URI or DB_USER and DB_PASS are required"
                    ))
                }
            },
        };

        let access_token_secret = lookup("ACCESS_TOKEN_SECRET")
            .filter(|s| !s.is_empty())
            .ok_or_else(|| anyhow::anyhow!("ACCESS_TOKEN_SECRET is required"))?;

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid port number, got {raw}"))?,
            None => 5000,
        };

        Ok(Self {
            database_url,
            database_name: lookup("DB_NAME").unwrap_or_else(|| "SoloSphere".to_string()),
            store_provider,
            access_token_secret,
            production: lookup("NODE_ENV").as_deref() == Some("production"),
            cors_allowed_origins,
            log_format: lookup("LOG_FORMAT").unwrap_or_else(|| "pretty".to_string()),
            port,
        })
    }
}
