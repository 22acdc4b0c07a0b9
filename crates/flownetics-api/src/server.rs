//! Server startup and shutdown.

use tokio::net::TcpListener;

use crate::config::AppConfig;
use crate::routes;
use crate::state::AppState;
use crate::Result;

/// Build the application from `config` and serve it until Ctrl-C.
pub async fn serve(config: AppConfig) -> Result<()> {
    config.validate()?;
    let state = AppState::from_config(&config).await?;

    let app = match &config.server.static_dir {
        Some(dir) => {
            tracing::info!(dir = %dir.display(), "serving frontend");
            routes::router_with_static(state, dir)
        }
        None => routes::router(state),
    };

    let address = config.server.bind_address();
    let listener = TcpListener::bind(&address).await?;
    tracing::info!(address = %address, "flownetics API listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
