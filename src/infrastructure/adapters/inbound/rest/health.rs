//! Health check endpoint for container orchestration.
//!
//! Used by Kubernetes, ECS, systemd, and load balancers to verify the service is alive.

use axum::extract::State;

use crate::infrastructure::state::AppState;

/// Health check handler.
///
/// Asks the health query port for the current status and writes its text form
/// (`OK`) as the plain-text body.
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", content_type = "text/plain", body = String)
    ),
    tag = "Health"
)]
pub async fn health(State(state): State<AppState>) -> &'static str {
    let status = state.health_query.get_health_status().await;
    tracing::debug!(%status, "Health check answered");
    status.as_str()
}
