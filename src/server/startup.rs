use dioxus_logger::tracing;
use tokio::net::TcpListener;

use crate::server::{config::Config, error::AppError};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, then
/// runs all pending SeaORM migrations so the schema exists and the default categories
/// are seeded before the first request is served.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Binds the TCP listener for the HTTP server.
///
/// # Returns
/// - `Ok(TcpListener)` - Listener bound to the configured host and port
/// - `Err(AppError::InternalError)` - Address could not be bound
pub async fn bind_listener(config: &Config) -> Result<TcpListener, AppError> {
    let address = config.bind_address();

    let listener = TcpListener::bind(&address)
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to bind {}: {}", address, e)))?;

    tracing::info!("Listening on {}", address);

    Ok(listener)
}

/// Resolves when the process receives Ctrl-C, letting in-flight requests finish.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }

    tracing::info!("Shutting down");
}
