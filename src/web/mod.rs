// Web server: Axum JSON API in front of the check pipeline.
//
// One stateless endpoint per concern. Every request builds its own RNG and
// runs an independent check; nothing is shared between requests except
// the HTTP client.

use std::sync::Arc;

use anyhow::Result;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::CheckError;
use crate::pipeline::check::{self, CheckOptions};
use crate::scoring::revenue::CATEGORY_RPM;
use crate::youtube::traits::YoutubeApi;

/// Shared application state threaded through all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn YoutubeApi>,
    pub options: Arc<CheckOptions>,
    /// Fixed seed for reproducible responses (tests, demos).
    pub seed: Option<u64>,
}

/// Start the Axum web server and block until it exits.
pub async fn run_server(state: AppState, port: u16, bind: &str) -> Result<()> {
    let app = build_router(state);

    let addr = format!("{bind}:{port}");
    info!("ytmonetize API listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/check", get(check_handler))
        .route("/api/categories", get(categories))
        .layer(
            CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods([axum::http::Method::GET, axum::http::Method::OPTIONS])
                .allow_headers([header::CONTENT_TYPE]),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(serde_json::json!({ "status": "ok" })))
}

#[derive(Deserialize)]
pub struct CheckParams {
    url: String,
}

/// GET /api/check?url=…: run one check and return the assessment.
async fn check_handler(
    State(state): State<AppState>,
    query: Result<Query<CheckParams>, QueryRejection>,
) -> Response {
    let Ok(Query(params)) = query else {
        return api_error(StatusCode::BAD_REQUEST, "Missing required query parameter: url");
    };

    let mut rng = match state.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    match check::check_url(
        state.api.as_ref(),
        &params.url,
        &state.options,
        &mut rng,
        Utc::now(),
    )
    .await
    {
        Ok(assessment) => Json(assessment).into_response(),
        Err(e) => {
            warn!(url = params.url.as_str(), error = %e, "Check failed");
            api_error(status_for(&e), &e.to_string())
        }
    }
}

/// GET /api/categories: the static RPM table.
async fn categories() -> impl IntoResponse {
    let rows: Vec<_> = CATEGORY_RPM
        .iter()
        .map(|(name, rpm)| serde_json::json!({ "category": name, "rpm": rpm }))
        .collect();
    Json(rows)
}

/// Map a check failure to the HTTP status the client sees.
pub fn status_for(err: &CheckError) -> StatusCode {
    match err {
        CheckError::InvalidInput => StatusCode::BAD_REQUEST,
        CheckError::NotFound(_) => StatusCode::NOT_FOUND,
        CheckError::UpstreamFailure { .. } | CheckError::Transport(_) => StatusCode::BAD_GATEWAY,
    }
}

/// Typed JSON error response helper.
pub fn api_error(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}
