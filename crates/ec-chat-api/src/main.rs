//! Engine diagnostic chat server.
//!
//! Loads the reference dataset, then serves the chat page and the
//! `/chat` endpoint until the process is stopped.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use ec_chat_api::config::ApiConfig;
use ec_chat_api::routes;
use ec_chat_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "ec-chat-api starting");

    let config = ApiConfig::from_args()?;
    tracing::info!(
        host = %config.host,
        port = config.port,
        dataset = %config.dataset_path.display(),
        "config loaded"
    );

    // The table must be in memory before the first request is accepted.
    let state = AppState::from_dataset(&config.dataset_path).with_context(|| {
        format!(
            "loading reference dataset {}",
            config.dataset_path.display()
        )
    })?;

    let app = routes::build_router(state);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(addr = %addr, "listening");

    axum::serve(listener, app).await?;

    Ok(())
}
