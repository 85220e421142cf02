mod auth;
mod config;
mod db;
mod errors;
mod llm_client;
mod models;
mod notes;
mod pdf;
mod recommendations;
mod routes;
mod state;
#[cfg(test)]
mod test_support;
mod users;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::JwtIdentityResolver;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::users::repository::PgUserRepository;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting PrepWise API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize generation client
    let llm = GeminiClient::new(config.gemini_api_key.clone(), config.generation_timeout)?;
    info!(
        "Generation client initialized (model: {}, timeout: {:?})",
        llm_client::MODEL,
        config.generation_timeout
    );

    // Initialize session verification
    let identity =
        JwtIdentityResolver::from_rsa_pem(&config.clerk_jwt_public_key, config.clerk_issuer.as_deref())?;

    let state = AppState {
        users: Arc::new(PgUserRepository::new(db)),
        llm: Arc::new(llm),
        identity: Arc::new(identity),
        generation_timeout: config.generation_timeout,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the deployed web frontend

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
