//! HTTP facade over the ranked index
//!
//! Two query endpoints plus a health check. CORS is permissive so a browser
//! frontend can talk to the API directly; request tracing rides on the
//! `tracing` subscriber initialized in `main`.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use podium_core::limits::{LEADERBOARD_PAGE_SIZE, SEARCH_PARTIAL_LIMIT};
use podium_core::Error;
use podium_index::RankedIndex;

/// Build the router over a shared index.
pub fn router(index: Arc<RankedIndex>) -> Router {
    Router::new()
        .route("/leaderboard", get(leaderboard))
        .route("/search", get(search))
        .route("/health", get(health))
        .with_state(index)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
}

#[derive(Debug, Deserialize)]
struct SearchParams {
    #[serde(default)]
    username: String,
}

/// Top page of the board in rank order. Success status only; fewer than a
/// full page when the population is smaller.
async fn leaderboard(State(index): State<Arc<RankedIndex>>) -> impl IntoResponse {
    Json(index.top(LEADERBOARD_PAGE_SIZE))
}

/// Exact plus partial username search. An empty or missing query is a
/// client error; zero matches is a success with an empty array.
async fn search(
    State(index): State<Arc<RankedIndex>>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    match index.search(&params.username, SEARCH_PARTIAL_LIMIT) {
        Ok(results) => (StatusCode::OK, Json(json!(results))),
        Err(err @ Error::EmptyQuery) => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": err.to_string() })),
        ),
        Err(err) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": err.to_string() })),
        ),
    }
}

async fn health() -> &'static str {
    "OK"
}
