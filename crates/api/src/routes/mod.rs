pub mod categories;
pub mod status;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// Route hierarchy:
///
/// ```text
/// /status                                              service status
///
/// /categories                                          list, create
/// /categories/{category_id}                            get, rename, delete
/// /categories/{category_id}/questions                  list, create
/// /categories/{category_id}/questions/{question_id}    get, rename, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(status::router())
        .merge(categories::router())
}
