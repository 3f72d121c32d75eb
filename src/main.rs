use affiliate_payout::{
    app::build_router,
    config::Config,
    handlers::AppState,
    services::{EthereumService, MySqlPayoutStore, PayoutAggregator, PayoutStore},
};
use anyhow::Result;
use std::sync::Arc;
use std::time::Instant;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting affiliate payout API v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {:?}", config.environment);

    let store: Arc<dyn PayoutStore> = Arc::new(MySqlPayoutStore::connect_lazy(&config.database));

    // The service still starts when MySQL is down; requests fail until it is back.
    match store.ping().await {
        Ok(()) => tracing::info!("Connected to the database."),
        Err(e) => tracing::error!("Database connection failed: {}", e),
    }

    let ethereum = Arc::new(EthereumService::new(&config.eth_rpc_url));
    let aggregator = Arc::new(PayoutAggregator::new(store.clone(), ethereum));

    let app = build_router(AppState {
        aggregator,
        store,
        started_at: Instant::now(),
    });

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server is running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for ctrl+c: {}", e);
        return;
    }
    tracing::info!("Shutting down gracefully...");
}
