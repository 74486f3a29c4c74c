use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use todos_core::{MemoryStore, TodoRepository, TodoService, TodoStore};
use tokio::sync::Notify;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todos_api::config::{ServerConfig, StoreBackend};
use todos_api::router::build_app_router;
use todos_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todos_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = %config.port,
        store = config.store.name(),
        "Loaded server configuration",
    );

    // --- Store ---
    let (store, pool): (Arc<dyn TodoStore>, Option<todos_db::DbPool>) = match &config.store {
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory store; todos are lost on restart");
            let store: Arc<dyn TodoStore> = Arc::new(MemoryStore::new());
            (store, None)
        }
        StoreBackend::Postgres { database_url } => {
            let pool = todos_db::create_pool(database_url)
                .await
                .expect("Failed to connect to database");
            tracing::info!("Database connection pool created");

            todos_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            tracing::info!("Database health check passed");

            todos_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            let store: Arc<dyn TodoStore> = Arc::new(todos_db::PgTodoStore::new(pool.clone()));
            (store, Some(pool))
        }
    };

    // --- App state ---
    let state = AppState {
        todos: TodoService::new(TodoRepository::new(store)),
        pool,
        config: Arc::new(config.clone()),
    };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    // The signal stops new connections; in-flight requests then get
    // `SHUTDOWN_TIMEOUT_SECS` to finish.
    let signalled = Arc::new(Notify::new());
    let server = axum::serve(listener, app).with_graceful_shutdown({
        let signalled = Arc::clone(&signalled);
        async move {
            shutdown_signal().await;
            signalled.notify_one();
        }
    })
    .into_future();
    let drain = Duration::from_secs(config.shutdown_timeout_secs);

    tokio::select! {
        result = server => result.expect("Server error"),
        () = async {
            signalled.notified().await;
            tokio::time::sleep(drain).await;
        } => {
            tracing::warn!(timeout_secs = drain.as_secs(), "Shutdown drain timed out");
        }
    }

    tracing::info!("Graceful shutdown complete");
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
