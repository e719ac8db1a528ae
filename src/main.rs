mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, queue::JobQueue, router, service::token::TokenService,
    startup, state::AppState,
};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    if let Err(err) = run().await {
        tracing::error!("Fatal server error: {err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), AppError> {
    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let tokens = TokenService::new(&config);

    // Notification worker runs for the lifetime of the process; enqueue is
    // fire-and-forget and never fails a request.
    let queue = JobQueue::start();

    tracing::info!("Starting server");

    let app = router::router()
        .with_state(AppState::new(db, tokens, queue))
        .layer(tower_http::cors::CorsLayer::permissive());

    let listener = tokio::net::TcpListener::bind(&config.app_addr)
        .await
        .map_err(|e| AppError::InternalError(format!("failed to bind {}: {e}", config.app_addr)))?;

    tracing::info!("Listening on {}", config.app_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::InternalError(e.to_string()))
}
