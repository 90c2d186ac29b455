use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    Json,
};
use serde_json::json;

use crate::console::page::render_page;
use crate::dashboard::Dashboard;
use crate::dispatcher::{CommandDispatcher, UnblockOutcome};
use crate::models::command::UnblockRequest;

/// Shared state handed to every console handler.
#[derive(Clone)]
pub struct AppState {
    pub dashboard: Arc<Dashboard>,
    pub dispatcher: Arc<CommandDispatcher>,
    pub push_interval: Duration,
}

/// GET / – the operator page with current content pre-rendered.
pub async fn get_page(State(state): State<AppState>) -> Html<String> {
    Html(render_page(&state.dashboard.document()))
}

/// GET /api/view – the whole document as JSON.
pub async fn get_view(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.dashboard.document())
}

/// POST /api/unblock
pub async fn unblock(
    State(state): State<AppState>,
    Json(body): Json<UnblockRequest>,
) -> impl IntoResponse {
    match state.dispatcher.unblock(&body.mac).await {
        Ok(UnblockOutcome::Unblocked) => {
            (StatusCode::OK, Json(json!({ "success": true }))).into_response()
        }
        Ok(UnblockOutcome::Rejected(message)) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "success": false, "error": message })),
        )
            .into_response(),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "success": false, "error": format!("Backend unreachable: {}", e) })),
        )
            .into_response(),
    }
}

/// POST /api/clear_alerts
pub async fn clear_alerts(State(state): State<AppState>) -> impl IntoResponse {
    match state.dispatcher.clear_alerts().await {
        Ok(()) => (StatusCode::OK, Json(json!({ "success": true }))),
        Err(e) => (
            StatusCode::BAD_GATEWAY,
            Json(json!({ "success": false, "error": format!("Backend unreachable: {}", e) })),
        ),
    }
}
