//! Shared response payloads for API handlers.

use serde::Serialize;

/// Status reported by `GET /status`.
pub const STATUS_OK: &str = "OK";

/// Status reported after a successful delete.
pub const STATUS_DELETED: &str = "deleted";

/// `{ "status": ... }` response body.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: STATUS_OK }
    }

    pub fn deleted() -> Self {
        Self {
            status: STATUS_DELETED,
        }
    }
}
