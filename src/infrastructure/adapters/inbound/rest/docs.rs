//! OpenAPI document endpoint.

use axum::Json;
use utoipa::OpenApi;

use crate::infrastructure::configuration::ApiDoc;

/// Serves the generated OpenAPI document as JSON.
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
