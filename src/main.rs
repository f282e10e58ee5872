use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use weekly_notifications::{AppConfig, AppState, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env()?;
    let bind_addr = config.bind_addr;
    let app = router(Arc::new(AppState::new(&config)?));

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("Weekly notifications listening on {}", bind_addr);
    axum::serve(listener, app).await?;

    Ok(())
}
