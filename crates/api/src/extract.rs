//! Request extractors with the service's own JSON error mapping.

use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// JSON object body deserialized into `T`.
///
/// Unlike `axum::Json`, the request `Content-Type` is not inspected, and
/// every failure (unreadable body, malformed JSON, non-object payload,
/// wrongly typed field) is reported as [`AppError::InvalidJson`].
///
/// ```ignore
/// async fn create(JsonBody(input): JsonBody<CreateCategory>) -> AppResult<Json<Category>> {
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidJson(e.body_text()))?;

        parse_object(&bytes).map(JsonBody)
    }
}

/// Path parameters deserialized into `T`.
///
/// Wraps `axum::extract::Path` so that a parameter which cannot be decoded
/// (for example invalid UTF-8 after percent-decoding) is reported through
/// [`AppError::InvalidPath`] with the usual JSON error body.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct PathParam<T>(pub T);

/// Parse `bytes` as a JSON object and deserialize it into `T`.
pub fn parse_object<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, AppError> {
    let mut value: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|e| AppError::InvalidJson(e.to_string()))?;

    // A bare `null` is well-formed and carries no fields.
    if value.is_null() {
        value = serde_json::Value::Object(serde_json::Map::new());
    }

    if !value.is_object() {
        return Err(AppError::InvalidJson("expected a JSON object".into()));
    }

    serde_json::from_value(value).map_err(|e| AppError::InvalidJson(e.to_string()))
}
