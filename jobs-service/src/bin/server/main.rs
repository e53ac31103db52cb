use std::sync::Arc;

use auth::JwtHandler;
use jobs_service::config::Config;
use jobs_service::domain::job::service::JobService;
use jobs_service::inbound::http::router::create_router;
use jobs_service::outbound::repositories::PostgresJobRepository;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const MAX_DB_CONNECTIONS: u32 = 5;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "jobs_service=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        service = "jobs-service",
        version = env!("CARGO_PKG_VERSION"),
        "Service starting"
    );

    let config = Config::load()?;

    tracing::info!(http_port = config.server.http_port, "Configuration loaded");

    let pg_pool = PgPoolOptions::new()
        .max_connections(MAX_DB_CONNECTIONS)
        .connect(&config.database.url)
        .await?;
    tracing::info!(
        max_connections = MAX_DB_CONNECTIONS,
        database = "postgresql",
        "Database connection pool created"
    );

    sqlx::migrate!("./migrations").run(&pg_pool).await?;
    tracing::info!(database = "postgresql", "Database migrations completed");

    let job_repository = Arc::new(PostgresJobRepository::new(pg_pool));
    let job_service = Arc::new(JobService::new(job_repository));
    // Verification only: this service never mints tokens.
    let token_codec = Arc::new(JwtHandler::new(config.jwt.secret.as_bytes()));

    let http_address = format!("0.0.0.0:{}", config.server.http_port);
    let http_listener = tokio::net::TcpListener::bind(&http_address).await?;
    tracing::info!(
        address = %http_address,
        port = config.server.http_port,
        protocol = "http",
        "Http server listening"
    );

    axum::serve(http_listener, create_router(job_service, token_codec)).await?;

    tracing::info!("Server exited");

    Ok(())
}
