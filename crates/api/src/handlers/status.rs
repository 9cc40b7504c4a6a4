use axum::Json;

use crate::response::StatusResponse;

/// GET /status
///
/// Liveness probe. Always `{"status":"OK"}`.
pub async fn get_status() -> Json<StatusResponse> {
    Json(StatusResponse::ok())
}
