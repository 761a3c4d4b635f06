//! Taphouse API - beer and customer CRUD over MongoDB.
//!
//! # Architecture
//!
//! - Axum handlers over per-resource services
//! - Services orchestrate repositories and explicit entity/DTO mappers
//! - MongoDB document store via the official driver
//!
//! All persistent state lives in the store; the process holds no caches and
//! no cross-request mutable state.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use taphouse_api::config::ApiConfig;
use taphouse_api::db::{self, MongoBeerRepository, MongoCustomerRepository};
use taphouse_api::state::AppState;
use taphouse_api::{bootstrap, routes};

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = ApiConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "taphouse_api=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Initialize the store client
    let database = db::connect(&config)
        .await
        .expect("Failed to create store client");
    tracing::info!(database = %config.mongo_database, "store client created");

    let beers = Arc::new(MongoBeerRepository::new(&database));
    let customers = Arc::new(MongoCustomerRepository::new(&database));

    // Reseed sample data unless disabled
    if config.seed_data {
        bootstrap::seed(beers.as_ref(), customers.as_ref())
            .await
            .expect("Failed to seed sample data");
    }

    // Build application state and router
    let state = AppState::new(config.clone(), beers, customers);

    let app = routes::routes()
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("taphouse api listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
