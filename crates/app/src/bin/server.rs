// SoloSphere API - Server

use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use solosphere_common::config::Config;
use solosphere_store::{StoreConfig, StoreFactory};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing(&config.log_format);

    info!("Starting SoloSphere server");
    info!(store_provider = %config.store_provider, production = config.production, "Configuration loaded successfully");

    let store = StoreFactory::connect(StoreConfig::from(&config))
        .await
        .map_err(|e| {
            error!("Failed to create document store: {}", e);
            anyhow::anyhow!("Store initialization failed: {}", e)
        })?;

    store.ping().await.map_err(|e| {
        error!("Failed to ping document store: {}", e);
        anyhow::anyhow!("Store ping failed: {}", e)
    })?;

    info!("Pinged your deployment. You successfully connected to the document store!");

    let app = solosphere_app::create_app(&config, store.clone());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("SoloSphere Server is running on port {}", config.port);
    info!("Health check available at http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    store.shutdown().await;
    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(log_format: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if log_format == "json" {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .pretty()
            .init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C signal, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received terminate signal, starting graceful shutdown");
        },
    }
}
