use std::env;
use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use pediguide_api::{router, ApiConfig, AppState};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;
    let state = AppState::from_config(&config).await;
    let app = router(state);

    if env::var_os("AWS_LAMBDA_RUNTIME_API").is_some() {
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, storage = %config.storage, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
