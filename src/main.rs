mod model;
mod server;

use dioxus_logger::tracing::{self, Level};

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    if let Err(e) = dioxus_logger::init(Level::INFO) {
        eprintln!("Failed to initialize logger: {}", e);
    }

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let listener = startup::bind_listener(&config).await?;

    tracing::info!("Starting server");

    axum::serve(listener, router::app(AppState::new(db)))
        .with_graceful_shutdown(startup::shutdown_signal())
        .await
        .map_err(|e| AppError::InternalError(format!("Server error: {}", e)))?;

    tracing::info!("Server stopped");

    Ok(())
}
