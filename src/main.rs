use anyhow::Result;
use tracing::info;
use voting_app::{create_router, AppConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber to log to stdout
    tracing_subscriber::fmt::init();
    tracing::info!("Starting voting server...");

    let config = AppConfig::from_env()?;
    let app = create_router()?;

    info!("Starting at endpoint:{}", config.server.bind_addr);
    info!("Starting Voting API server v{}...", env!("CARGO_PKG_VERSION"));

    let listener = tokio::net::TcpListener::bind(&config.server.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
