//! HTTP surface: the axum router and its handlers.
//!
//! All state is the immutable dataset behind an `Arc`; every request is
//! independent and side-effect-free, so no locking is needed.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::dataset::IconSet;
use crate::query::{self, IconParams};

/// Shared server state: the dataset, loaded once at startup.
pub struct ServerState {
    pub icons: IconSet,
}

/// Build the router over a loaded dataset.
pub fn router(icons: IconSet) -> Router {
    let state = Arc::new(ServerState { icons });
    Router::new()
        .route("/health", get(health))
        .route("/api/icons", get(list_names))
        .route("/api/svgs", get(raw_dataset))
        .route("/icon", get(compose_icon))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Serialize)]
struct HealthResponse {
    status: String,
    version: String,
    icons: usize,
    names: usize,
}

async fn health(State(state): State<Arc<ServerState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        icons: state.icons.len(),
        names: state.icons.base_names().len(),
    })
}

/// `GET /api/icons` — every canonical base name, dataset key order.
async fn list_names(State(state): State<Arc<ServerState>>) -> Json<Vec<String>> {
    Json(state.icons.base_names().to_vec())
}

/// `GET /api/svgs` — the dataset source JSON, byte-for-byte.
async fn raw_dataset(State(state): State<Arc<ServerState>>) -> Response {
    (
        [(header::CONTENT_TYPE, "application/json;charset=UTF-8")],
        state.icons.raw_json().to_owned(),
    )
        .into_response()
}

/// `GET /icon` — compose the requested icons into one SVG document.
async fn compose_icon(
    State(state): State<Arc<ServerState>>,
    Query(params): Query<IconParams>,
) -> Result<Response, (StatusCode, String)> {
    let svg = query::render_svg(&state.icons, &params).map_err(|e| {
        tracing::debug!("rejected /icon request: {e}");
        (StatusCode::BAD_REQUEST, e.to_string())
    })?;
    Ok(([(header::CONTENT_TYPE, "image/svg+xml")], svg).into_response())
}
