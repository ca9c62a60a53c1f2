use std::sync::Arc;

use clap::Parser;
use mergington_server::{
    config::ServerConfig,
    errors::ServerResult,
    monitoring::{self, MonitoringLayer},
    router, ActivityRegistry, AppState,
};

#[tokio::main]
async fn main() -> ServerResult<()> {
    let config = ServerConfig::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mergington_server=debug,tower_http=debug".into()),
        )
        .init();

    if config.monitoring {
        use colored::*;
        tracing::info!("{}", "🏫 Mergington Activities with Monitoring".bold().cyan());
        tracing::info!("{}", "========================================".cyan());
        tracing::info!("");
    }

    let monitoring_layer = if config.monitoring {
        let (tx, rx) = tokio::sync::mpsc::channel(1000);
        monitoring::spawn_monitoring_display(rx).await;
        Some(MonitoringLayer::new(tx))
    } else {
        None
    };

    let registry = ActivityRegistry::with_default_catalog();
    tracing::info!(
        activities = registry.get_all().await.len(),
        "Loaded activity catalog"
    );

    let app_state = Arc::new(AppState::new(registry, monitoring_layer));
    let app = router(app_state, &config.static_dir);

    tracing::info!(
        "Starting activities server on {} (static files from {})",
        config.bind_address,
        config.static_dir.display()
    );

    let listener = tokio::net::TcpListener::bind(&config.bind_address)
        .await
        .inspect_err(|e| tracing::error!(%e, addr = %config.bind_address, "Failed to bind"))?;

    axum::serve(listener, app)
        .await
        .inspect_err(|e| tracing::error!(%e, addr = %config.bind_address, "Server stopped"))?;

    Ok(())
}
