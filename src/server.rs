//! HTTP server initialization and runtime setup.
//!
//! Picks the storage backend from configuration, applies migrations when
//! running on PostgreSQL, and drives the Axum server lifecycle.

use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::time::Duration;
use tower::Layer;
use tower_http::normalize_path::NormalizePathLayer;

/// Runs the HTTP server with the given configuration.
///
/// With `DATABASE_URL` set this connects a PostgreSQL pool and applies the
/// embedded migrations; otherwise the service runs on the in-memory
/// catalog.
///
/// # Errors
///
/// Returns an error if the database connection, migration run, or server
/// bind fails, or on a server runtime error.
pub async fn run(config: Config) -> Result<()> {
    let state = match &config.database_url {
        Some(url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.db_max_connections)
                .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
                .idle_timeout(Duration::from_secs(config.db_idle_timeout))
                .max_lifetime(Duration::from_secs(config.db_max_lifetime))
                .connect(url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Connected to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to migrate")?;

            tracing::info!("Storage backend: postgres");
            AppState::postgres(pool)
        }
        None => {
            tracing::info!("DATABASE_URL not set, storage backend: memory");
            AppState::in_memory()
        }
    };

    let app = NormalizePathLayer::trim_trailing_slash().layer(app_router(state));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
