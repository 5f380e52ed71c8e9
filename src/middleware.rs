use axum::{
    extract::{ConnectInfo, Request},
    http::{HeaderValue, StatusCode},
    middleware::Next,
    response::Response,
};
use governor::{Quota, RateLimiter, clock::DefaultClock, state::keyed::DefaultKeyedStateStore};
use std::{net::SocketAddr, num::NonZeroU32, sync::Arc, time::Duration};
use tower_http::cors::CorsLayer;

pub type IpRateLimiter = Arc<RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>>;

const REQUESTS_PER_MINUTE: u32 = 120;

// Telegram delivers every update from a small pool of addresses.
const UNLIMITED_PATHS: &[&str] = &["/webhook"];

pub fn create_rate_limiter() -> IpRateLimiter {
    rate_limiter_per_minute(REQUESTS_PER_MINUTE)
}

fn rate_limiter_per_minute(requests: u32) -> IpRateLimiter {
    let quota = Quota::per_minute(NonZeroU32::new(requests).unwrap_or(NonZeroU32::MIN));
    Arc::new(RateLimiter::keyed(quota))
}

pub async fn rate_limit_middleware(
    rate_limiter: IpRateLimiter,
    request: Request,
    next: Next,
) -> Result<Response, StatusCode> {
    if UNLIMITED_PATHS.contains(&request.uri().path()) {
        return Ok(next.run(request).await);
    }

    let client_ip =
        if let Some(ConnectInfo(addr)) = request.extensions().get::<ConnectInfo<SocketAddr>>() {
            addr.ip().to_string()
        } else {
            "unknown".to_string()
        };

    match rate_limiter.check_key(&client_ip) {
        Ok(_) => Ok(next.run(request).await),
        Err(_) => {
            tracing::warn!("Rate limit exceeded for IP: {}", client_ip);
            Err(StatusCode::TOO_MANY_REQUESTS)
        }
    }
}

pub fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins = allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect::<Vec<_>>();

    tracing::info!("CORS allowed origins: {:?}", allowed_origins);

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([axum::http::Method::GET, axum::http::Method::POST])
        .allow_headers([axum::http::header::CONTENT_TYPE, axum::http::header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, body::Body, http::Request as HttpRequest, middleware::from_fn, routing::post};
    use tower::ServiceExt;

    fn limited_router(limiter: IpRateLimiter) -> Router {
        Router::new()
            .route("/webhook", post(|| async { "OK" }))
            .route("/notify", post(|| async { "sent" }))
            .layer(from_fn(move |req, next| {
                rate_limit_middleware(limiter.clone(), req, next)
            }))
    }

    async fn status_of(router: &Router, uri: &str) -> StatusCode {
        let request = HttpRequest::builder()
            .method("POST")
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        router.clone().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_webhook_bypasses_rate_limit() {
        let router = limited_router(rate_limiter_per_minute(1));

        for _ in 0..5 {
            assert_eq!(status_of(&router, "/webhook").await, StatusCode::OK);
        }

        assert_eq!(status_of(&router, "/notify").await, StatusCode::OK);
        assert_eq!(
            status_of(&router, "/notify").await,
            StatusCode::TOO_MANY_REQUESTS
        );
    }
}
