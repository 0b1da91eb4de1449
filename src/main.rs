use campus_portal::{
    AppState,
    config::{AppConfig, Env},
    create_router,
    repository::{PostgresRepository, RepositoryState},
};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// The asynchronous entry point: initializes configuration, logging, the
/// database pool, and the HTTP server, in that order.
#[tokio::main]
async fn main() {
    // 1. Configuration & Environment Loading (fail-fast)
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging Filter Setup
    // Prioritizes RUST_LOG, falling back to sensible local defaults.
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "campus_portal=debug,tower_http=info,axum=trace".into());

    // 3. Initialize logging based on environment: pretty output for local
    // debugging, JSON for log aggregators in production.
    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // 4. Database Initialization (Postgres)
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.db_url)
        .await
        .expect("FATAL: Failed to connect to Postgres. Check DATABASE_URL.");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("FATAL: Failed to run database migrations.");

    let repo = Arc::new(PostgresRepository::new(pool)) as RepositoryState;

    // 5. Unified State Assembly
    let port = config.port;
    let app_state = AppState { repo, config };

    // 6. Router and Server Startup
    let app = create_router(app_state);

    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .expect("FATAL: Failed to bind server port");

    tracing::info!("HTTP server bound successfully.");
    tracing::info!("Listening on 0.0.0.0:{port}");
    tracing::info!("API Documentation (Swagger UI) available at: /swagger-ui");

    axum::serve(listener, app).await.unwrap();
}
