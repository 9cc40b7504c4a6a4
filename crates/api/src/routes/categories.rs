//! Route definitions for categories and their nested questions.

use axum::routing::get;
use axum::Router;

use crate::handlers::{categories, questions};
use crate::state::AppState;

/// Category and question routes.
///
/// ```text
/// GET    /categories                                          -> list_categories
/// POST   /categories                                          -> create_category
/// GET    /categories/{category_id}                            -> get_category
/// PATCH  /categories/{category_id}                            -> rename_category
/// DELETE /categories/{category_id}                            -> delete_category
/// GET    /categories/{category_id}/questions                  -> list_questions
/// POST   /categories/{category_id}/questions                  -> create_question
/// GET    /categories/{category_id}/questions/{question_id}    -> get_question
/// PATCH  /categories/{category_id}/questions/{question_id}    -> rename_question
/// DELETE /categories/{category_id}/questions/{question_id}    -> delete_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/{category_id}",
            get(categories::get_category)
                .patch(categories::rename_category)
                .delete(categories::delete_category),
        )
        .route(
            "/categories/{category_id}/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route(
            "/categories/{category_id}/questions/{question_id}",
            get(questions::get_question)
                .patch(questions::rename_question)
                .delete(questions::delete_question),
        )
}
