use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use txcat_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds the request-shape and
/// routing failures that only exist at the HTTP boundary. Implements
/// [`IntoResponse`] to produce the `{"errors":[{"title": ...}]}` body.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `txcat_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The body is not a JSON object, or a field has the wrong JSON type.
    #[error("request JSON invalid: {0}")]
    InvalidJson(String),

    /// A required field is absent from the body.
    #[error("a required field is missing from the request: {0}")]
    FieldMissing(&'static str),

    /// `options` is present but not a list of strings.
    #[error("options is invalid: {0}")]
    OptionsInvalid(String),

    /// A path parameter could not be decoded.
    #[error("path parameter invalid: {0}")]
    InvalidPath(String),

    #[error("no route for {0}")]
    RouteNotFound(String),

    #[error("method not allowed")]
    MethodNotAllowed,

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

/// One entry of the error body.
#[derive(Debug, Serialize)]
pub struct ErrorEntry {
    pub title: &'static str,
    pub detail: String,
}

/// Response body for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub errors: Vec<ErrorEntry>,
}

impl AppError {
    /// Machine-readable kind, sent as the error title.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Core(core) => core.kind(),
            AppError::InvalidJson(_) => "InvalidJSON",
            AppError::FieldMissing(_) => "FieldMissing",
            AppError::OptionsInvalid(_) => "OptionsInvalid",
            AppError::InvalidPath(_) => "InvalidPath",
            AppError::RouteNotFound(_) => "RouteNotFound",
            AppError::MethodNotAllowed => "MethodNotAllowed",
            AppError::InternalError(_) => "InternalError",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Core(core) => core_status(core),
            AppError::InvalidJson(_)
            | AppError::FieldMissing(_)
            | AppError::OptionsInvalid(_)
            | AppError::InvalidPath(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::RouteNotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::InvalidPath(rejection.body_text())
    }
}

/// HTTP status for each domain error kind.
fn core_status(err: &CoreError) -> StatusCode {
    match err {
        CoreError::CategoryNotFound(_)
        | CoreError::QuestionNotFound(_)
        | CoreError::QuestionDoesntBelongToCategory { .. } => StatusCode::NOT_FOUND,

        CoreError::DuplicateCategoryName(_) | CoreError::DuplicateTitle(_) => StatusCode::CONFLICT,

        CoreError::InvalidCategoryName(_)
        | CoreError::ParentIdNotFound(_)
        | CoreError::CategoryTooNested(_)
        | CoreError::InvalidTitle(_) => StatusCode::UNPROCESSABLE_ENTITY,

        CoreError::TitleEmpty
        | CoreError::TypeEmpty
        | CoreError::InvalidType(_)
        | CoreError::OptionEmpty
        | CoreError::DuplicateOption(_) => StatusCode::BAD_REQUEST,
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = self.kind();

        let detail = match &self {
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                "An internal error occurred".to_string()
            }
            other => {
                tracing::debug!(kind, status = status.as_u16(), error = %other, "Request rejected");
                other.to_string()
            }
        };

        let body = ErrorBody {
            errors: vec![ErrorEntry {
                title: kind,
                detail,
            }],
        };

        (status, axum::Json(body)).into_response()
    }
}
