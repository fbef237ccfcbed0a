//! Tiercast API server binary entrypoint.

use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use tiercast_common::config::AppConfig;
use tiercast_common::db::{create_pool, run_migrations};
use tiercast_common::redis_pool::create_redis_pool;
use tiercast_engine::cache::RedisCacheRepository;
use tiercast_engine::service::NotifyService;
use tiercast_engine::store::PgUserRepository;
use tiercast_notifier::build_notifiers;

use tiercast_api::routes::create_router;
use tiercast_api::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("tiercast_api=debug,tiercast_engine=debug,tower_http=debug")
        }))
        .init();

    tracing::info!("Starting Tiercast API server...");

    // Load configuration
    let config = AppConfig::from_env()?;

    // Create database connection pool
    let pool = create_pool(&config.database_url, config.db_max_connections).await?;
    run_migrations(&pool).await?;

    // Create Redis connection
    let redis = create_redis_pool(&config.redis_url).await?;

    let (email, phone) = build_notifiers(&config)?;

    let service = NotifyService::from_ports(
        Arc::new(PgUserRepository::new(pool)),
        Arc::new(RedisCacheRepository::new(redis)),
        email,
        phone,
    );

    // Build router
    let app = create_router(AppState::new(service))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api_port));
    tracing::info!("API server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Received shutdown signal, stopping gracefully...");
        })
        .await?;

    Ok(())
}
