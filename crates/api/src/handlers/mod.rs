pub mod categories;
pub mod questions;
pub mod status;

use axum::http::Uri;

use crate::error::AppError;

/// Fallback for paths that match no route.
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::RouteNotFound(uri.path().to_string())
}

/// Fallback for known paths hit with an unsupported method.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Treat an absent or empty string field as missing.
pub(crate) fn required_field(
    value: Option<String>,
    field: &'static str,
) -> Result<String, AppError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or(AppError::FieldMissing(field))
}
