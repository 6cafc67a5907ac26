use crate::config::Config;
use crate::errors::AppError;
use crate::models::{CreditReport, User};
use crate::profiles::ProfileTable;
use crate::scoring::{document_fingerprint, ScoreResolver};
use crate::validation::validate_applicant;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde_json::{json, Value};
use std::sync::Arc;

const OPENAPI_SPEC: &str = include_str!("../openapi.yml");

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Config,
    /// Resolver over the read-only canned profile table.
    pub resolver: ScoreResolver,
}

impl AppState {
    /// Loads the profile table named by `config`, or the embedded one.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let profiles = match config.profiles_path.as_deref() {
            Some(path) => ProfileTable::from_path(path)
                .map_err(|e| anyhow::anyhow!("failed to load {}: {}", path, e))?,
            None => ProfileTable::embedded()?,
        };

        Ok(Self {
            config,
            resolver: ScoreResolver::new(Arc::new(profiles)),
        })
    }
}

/// Health check endpoint.
///
/// Returns the service status, version, and health information.
pub async fn health() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// POST /credit-score
///
/// Validates the applicant form and returns a mock credit report.
///
/// # Returns
///
/// * `200` - The [`CreditReport`] for the submitted CPF.
/// * `400` - `{"error": "invalid data", "details": [...]}` when validation fails.
/// * `500` - `{"error": "internal server error"}` for unreadable bodies.
pub async fn credit_score(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<CreditReport>, AppError> {
    let payload: Value = serde_json::from_slice(&body)?;
    let applicant = validate_applicant(&payload)?;
    let fingerprint = document_fingerprint(&applicant.document_id);

    tracing::info!("POST /credit-score - document {}", fingerprint);

    if let Some(delay) = state.config.simulated_delay() {
        tokio::time::sleep(delay).await;
    }

    let report = state
        .resolver
        .resolve(&applicant.document_id, &mut rand::thread_rng());

    tracing::info!(
        "Resolved document {} to {:?} (score {})",
        fingerprint,
        report.analysis.status,
        report.score
    );

    Ok(Json(report))
}

/// POST /auth/signin
///
/// Mock sign-in: any syntactically valid email is accepted and echoed back
/// as a user. Nothing is stored server-side.
pub async fn sign_in(body: Bytes) -> Result<Json<User>, AppError> {
    let payload: Value = serde_json::from_slice(&body)?;
    let email = payload.get("email").and_then(Value::as_str);
    let user = User::from_email(email)?;

    tracing::info!("POST /auth/signin - user {}", user.name);

    Ok(Json(user))
}

/// Serves the OpenAPI specification YAML file.
pub async fn serve_openapi_spec() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/yaml")],
        OPENAPI_SPEC,
    )
}

/// Serves the Swagger UI HTML page.
///
/// The page loads the specification served by [`serve_openapi_spec`].
pub async fn serve_swagger_ui() -> impl IntoResponse {
    let html = r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Credit Score API - Swagger UI</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css">
    <style>
        body { margin: 0; padding: 0; }
    </style>
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            window.ui = SwaggerUIBundle({
                url: "/api-docs/openapi.yml",
                dom_id: '#swagger-ui',
                deepLinking: true
            });
        };
    </script>
</body>
</html>
"#;
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
        html,
    )
}
