mod model;
mod server;

use dioxus_logger::tracing;
use tokio::net::TcpListener;

use crate::server::{
    config::Config,
    error::{internal::InternalError, AppError},
    router, startup,
    state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_logging(&config)?;

    let db = startup::connect_to_database(&config).await?;
    let app = router::router(&config, AppState::new(db))?;

    let listener = TcpListener::bind(config.server_addr)
        .await
        .map_err(|source| InternalError::Bind {
            addr: config.server_addr.to_string(),
            source,
        })?;

    tracing::info!("Starting server on {}", config.server_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(InternalError::Serve)?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", err);
    }

    tracing::info!("Shutting down");
}
