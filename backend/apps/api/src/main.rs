//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors; request-level errors go through
//! `kernel::error::AppError` inside the combo crate.

mod config;
mod static_files;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
};
use combo::{PgComboRepository, combo_router};
use config::ServerConfig;
use static_files::static_files;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// How long the startup connection attempt may wait for the database
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,combo=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    if !config.database_url_from_env {
        tracing::warn!(
            database_url = %config.database_url,
            "DATABASE_URL not set, using default"
        );
    }

    let pool = connect_pool(&config).await?;

    let app = build_app(combo_router(PgComboRepository::new(pool)), &config);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(static_dir = %config.static_dir.display(), "Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(platform::shutdown::shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Connect to the database, or fall back to a lazy pool
///
/// An unreachable database does not stop the server: requests then fail with
/// the store error envelope until the database comes up. Migrations only run
/// when the startup connection succeeded.
async fn connect_pool(config: &ServerConfig) -> anyhow::Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(CONNECT_TIMEOUT);

    match options.clone().connect(&config.database_url).await {
        Ok(pool) => {
            tracing::info!("Connected to database");

            match sqlx::migrate!("../../../database/migrations").run(&pool).await {
                Ok(()) => tracing::info!("Migrations completed"),
                Err(e) => tracing::error!(error = %e, "Migrations failed, continuing anyway"),
            }

            Ok(pool)
        }
        Err(e) => {
            tracing::warn!(
                error = %e,
                "Database unavailable, starting without it"
            );
            Ok(options.connect_lazy(&config.database_url)?)
        }
    }
}

/// Assemble the full application around the combo routes
fn build_app(combos: Router, config: &ServerConfig) -> Router {
    Router::new()
        .nest("/api/combos", combos)
        .fallback_service(static_files(&config.static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&config.frontend_origins))
}

/// Any origin when `origins` is empty, otherwise only the listed ones
fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::permissive();
    }

    let allowed_origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]))
}
