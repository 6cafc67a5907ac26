use crate::config::Config;
use crate::handlers::{self, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_governor::{
    governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor, GovernorLayer,
};
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Routes subject to rate limiting and the body size cap.
pub fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        // API Documentation
        .route("/docs", get(handlers::serve_swagger_ui))
        .route("/api-docs/openapi.yml", get(handlers::serve_openapi_spec))
        // API endpoints
        .route("/credit-score", post(handlers::credit_score))
        .route("/auth/signin", post(handlers::sign_in))
}

/// Caps request bodies at `max_bytes` (413 beyond that).
pub fn with_body_limit(routes: Router<Arc<AppState>>, max_bytes: usize) -> Router<Arc<AppState>> {
    routes.layer(RequestBodyLimitLayer::new(max_bytes))
}

/// API routes behind the body cap and a per client IP rate limiter.
///
/// The client IP comes from `X-Forwarded-For` / `X-Real-IP` / `Forwarded`,
/// falling back to the peer address, so the server must be started with
/// connect info.
pub fn protected_routes(config: &Config) -> anyhow::Result<Router<Arc<AppState>>> {
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(config.rate_limit_per_second)
            .burst_size(config.rate_limit_burst)
            .key_extractor(SmartIpKeyExtractor)
            .finish()
            .ok_or_else(|| anyhow::anyhow!("invalid rate limiter configuration"))?,
    );

    Ok(
        with_body_limit(api_routes(), config.max_body_bytes).layer(
            ServiceBuilder::new().layer(GovernorLayer {
                config: governor_conf,
            }),
        ),
    )
}

/// Final app: health check outside the API layers, then tracing and CORS.
pub fn build_app(state: Arc<AppState>, api: Router<Arc<AppState>>) -> Router {
    Router::new()
        .route("/health", get(handlers::health))
        .merge(api)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
