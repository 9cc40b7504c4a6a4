//! Handlers for the `/categories` resource.
//!
//! Each mutating handler runs its checks in a fixed order and stops at the
//! first failure, so a request that breaks several rules always reports
//! the same error.

use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use txcat_core::error::CoreError;
use txcat_core::validation::validate_category_name;
use txcat_db::models::category::{CreateCategory, RenameCategory};

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam};
use crate::handlers::required_field;
use crate::response::StatusResponse;
use crate::state::AppState;

/// GET /categories
///
/// List every category, top-level and nested, in insertion order.
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    Ok(Json(state.categories.list().await))
}

/// GET /categories/{id}
///
/// A category plus its immediate children.
pub async fn get_category(
    State(state): State<AppState>,
    PathParam(category_id): PathParam<String>,
) -> AppResult<impl IntoResponse> {
    let view = state
        .categories
        .find_with_children(&category_id)
        .await
        .ok_or(AppError::Core(CoreError::CategoryNotFound(category_id)))?;

    Ok(Json(view))
}

/// POST /categories
///
/// Checks, in order: `name` present, name not taken, name format,
/// `parentID` present, parent exists, parent is top-level.
pub async fn create_category(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let name = required_field(input.name, "name")?;

    if state.categories.name_exists(&name).await {
        return Err(CoreError::DuplicateCategoryName(name).into());
    }
    validate_category_name(&name)?;

    let parent_id = input.parent_id.ok_or(AppError::FieldMissing("parentID"))?;

    // Remaining checks (parent existence, depth) run under the store's write lock.
    let category = state.categories.create(&name, &parent_id).await?;

    tracing::info!(
        category_id = %category.id,
        parent_id = %category.parent_id,
        "Category created",
    );

    let location = format!("/categories/{}", category.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(category)))
}

/// PATCH /categories/{id}
///
/// Checks, in order: `name` present, category exists, name not taken,
/// name format.
pub async fn rename_category(
    State(state): State<AppState>,
    PathParam(category_id): PathParam<String>,
    JsonBody(input): JsonBody<RenameCategory>,
) -> AppResult<impl IntoResponse> {
    let name = required_field(input.name, "name")?;

    let category = state.categories.rename(&category_id, &name).await?;

    tracing::info!(category_id = %category.id, name = %category.name, "Category renamed");

    Ok(Json(category))
}

/// DELETE /categories/{id}
///
/// Removes the category and its subcategories, then every question that
/// was attached to any of them.
pub async fn delete_category(
    State(state): State<AppState>,
    PathParam(category_id): PathParam<String>,
) -> AppResult<impl IntoResponse> {
    let removed = state.categories.delete(&category_id).await?;
    let removed_questions = state.questions.delete_for_categories(&removed).await;

    tracing::info!(
        category_id = %category_id,
        categories = removed.len(),
        questions = removed_questions,
        "Category deleted",
    );

    Ok(Json(StatusResponse::deleted()))
}
