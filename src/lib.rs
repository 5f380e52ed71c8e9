pub mod bot;
pub mod config;
pub mod db;
pub mod errors;
mod http;
mod middleware;
pub mod models;
pub mod moderation;
pub mod state;

use std::{net::SocketAddr, sync::Arc};

use axum::{Json, Router, http::StatusCode, middleware as axum_middleware};
use sqlx::postgres::PgPoolOptions;
use tower_http::trace::TraceLayer;

use crate::{
    bot::TelegramTransport,
    config::Config,
    db::{PgReviewStore, ensure_schema},
    errors::{AppError, ErrorBody},
    middleware::{cors_layer, create_rate_limiter, rate_limit_middleware},
    state::AppState,
};

/// The relay's routes, without the network-facing middleware.
pub fn app(state: AppState) -> Router {
    http::create_http_routes(state)
        .fallback(|| async {
            (
                StatusCode::NOT_FOUND,
                Json(ErrorBody {
                    error: "Not found".into(),
                }),
            )
        })
        .layer(TraceLayer::new_for_http())
}

pub async fn start_server() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = Config::from_env()?;

    let postgres = PgPoolOptions::new()
        .max_connections(5)
        .connect_with(config.database.clone())
        .await
        .map_err(|e| AppError::DatabaseError(format!("Failed to connect to database: {}", e)))?;
    ensure_schema(&postgres).await?;

    let moderator_bot = TelegramTransport::new(&config.approval_bot_token);
    let public_bot = TelegramTransport::new(&config.public_bot_token);

    if let Some(url) = config.webhook_url.clone() {
        moderator_bot
            .register_webhook(url, config.webhook_secret.as_deref())
            .await?;
    }

    let port = config.port;
    let rate_limiter = create_rate_limiter();
    let cors = cors_layer(&config.allowed_origins);

    let state = AppState::new(
        Arc::new(PgReviewStore::new(postgres)),
        Arc::new(moderator_bot),
        Arc::new(public_bot),
        config,
    );

    let router = app(state)
        .layer(axum_middleware::from_fn(move |req, next| {
            rate_limit_middleware(rate_limiter.clone(), req, next)
        }))
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .map_err(|e| AppError::ServerError(format!("Failed to bind port {}: {}", port, e)))?;

    tracing::info!("Review relay listening on port {}", port);

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .map_err(|e| AppError::ServerError(e.to_string()))
}
