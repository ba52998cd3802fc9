//! SoloSphere application composition root
//!
//! Composes all domain routers into a single application.

use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    Router,
};
use solosphere_auth::{AuthBackend, AuthConfig};
use solosphere_bids::{BidsRepositories, BidsState};
use solosphere_common::{config::Config, Error};
use solosphere_jobs::{JobsRepositories, JobsState};
use solosphere_sessions::SessionsState;
use solosphere_store::DocumentStore;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Create the main application router with all routes and middleware
pub fn create_app(config: &Config, store: Arc<dyn DocumentStore>) -> Router {
    let auth = AuthBackend::new(AuthConfig::from(config));

    let sessions_state = SessionsState { auth: auth.clone() };
    let jobs_state = JobsState {
        repos: JobsRepositories::new(store.clone()),
        auth: auth.clone(),
    };
    let bids_state = BidsState {
        repos: BidsRepositories::new(store),
        auth,
    };

    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route("/", axum::routing::get(banner))
        .merge(solosphere_sessions::routes().with_state(sessions_state))
        .merge(solosphere_jobs::routes().with_state(jobs_state))
        .merge(solosphere_bids::routes().with_state(bids_state))
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(&config.cors_allowed_origins))
                .into_inner(),
        )
}

/// CORS for an explicit origin allow-list with credentials (the session cookie)
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true)
        .allow_origin(origins)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

async fn banner() -> &'static str {
    "Hello from SoloSphere Server..."
}

async fn not_found(uri: axum::http::Uri) -> Error {
    Error::NotFound(format!("No route for {}", uri.path()))
}
