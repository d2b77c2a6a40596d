use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use charter_api::{app, AppState};
use charter_booking::BookingRules;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "charter_api=debug,charter_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = charter_store::Config::load().context("Failed to load config")?;
    tracing::info!("Starting charter API on port {}", config.server.port);

    let catalog = charter_store::load_catalog(config.catalog.seed_path.as_deref())
        .context("Failed to load charter catalog")?;

    let rules = BookingRules {
        max_passengers: config.business_rules.max_passengers,
    };
    let app = app(AppState::new(Arc::new(catalog), rules));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
