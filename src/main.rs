use chrono::Utc;
use fourth_trimester::{
    insight::{GeminiClient, InsightProvider},
    load_data, router, AppState, Config, Store,
};
use std::{net::SocketAddr, sync::Arc};
use tracing::{info, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    if config.api_key.is_none() {
        warn!("no API key configured, insights will use the built-in fallback");
    }

    let store = Store::new(&config.data_dir);
    tokio::fs::create_dir_all(store.dir()).await?;
    let data = load_data(&store, Utc::now().timestamp_millis()).await;

    let client = GeminiClient::new(&config.api_base, config.api_key.clone())?;
    let insights = InsightProvider::new(
        Arc::new(client),
        &config.primary_model,
        &config.secondary_model,
    );
    let state = AppState::new(store, data, insights, &config.community_location);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("shutting down");
        })
        .await?;

    Ok(())
}
