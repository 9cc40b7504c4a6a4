//! Handlers for questions nested under a category
//! (`/categories/{category_id}/questions`).

use axum::extract::State;
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use txcat_core::error::CoreError;
use txcat_core::validation::{validate_options, validate_question_title};
use txcat_db::models::question::{CreateQuestion, NewQuestion, QuestionType, RenameQuestion};
use txcat_db::repositories::QuestionLookup;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, PathParam};
use crate::handlers::required_field;
use crate::response::StatusResponse;
use crate::state::AppState;

/// GET /categories/{category_id}/questions
///
/// Questions attached to the category. An unknown category yields an
/// empty list rather than an error.
pub async fn list_questions(
    State(state): State<AppState>,
    PathParam(category_id): PathParam<String>,
) -> AppResult<impl IntoResponse> {
    Ok(Json(state.questions.list_for_category(&category_id).await))
}

/// GET /categories/{category_id}/questions/{question_id}
pub async fn get_question(
    State(state): State<AppState>,
    PathParam((category_id, question_id)): PathParam<(String, String)>,
) -> AppResult<impl IntoResponse> {
    ensure_category_exists(&state, &category_id).await?;

    match state.questions.locate(&question_id, &category_id).await {
        QuestionLookup::Found(question) => Ok(Json(question)),
        QuestionLookup::Missing => Err(CoreError::QuestionNotFound(question_id).into()),
        QuestionLookup::WrongCategory => Err(CoreError::QuestionDoesntBelongToCategory {
            question_id,
            category_id,
        }
        .into()),
    }
}

/// POST /categories/{category_id}/questions
///
/// Checks, in order: `title` and `type` present, title non-empty, type
/// non-empty, type known, options well-formed, title unique in the
/// category, category exists.
pub async fn create_question(
    State(state): State<AppState>,
    PathParam(category_id): PathParam<String>,
    JsonBody(input): JsonBody<CreateQuestion>,
) -> AppResult<impl IntoResponse> {
    let new_question = parse_new_question(input)?;

    if state
        .questions
        .title_exists(&category_id, &new_question.title)
        .await
    {
        return Err(CoreError::DuplicateTitle(new_question.title).into());
    }
    ensure_category_exists(&state, &category_id).await?;

    let question = state.questions.create(&category_id, new_question).await?;

    tracing::info!(
        question_id = %question.id,
        category_id = %category_id,
        kind = %question.kind,
        "Question created",
    );

    let location = format!("/categories/{category_id}/questions/{}", question.id);
    Ok((StatusCode::CREATED, [(LOCATION, location)], Json(question)))
}

/// PATCH /categories/{category_id}/questions/{question_id}
///
/// Checks, in order: `title` present, title format, category exists,
/// question exists, question belongs to the category, title unique in
/// the category.
pub async fn rename_question(
    State(state): State<AppState>,
    PathParam((category_id, question_id)): PathParam<(String, String)>,
    JsonBody(input): JsonBody<RenameQuestion>,
) -> AppResult<impl IntoResponse> {
    let title = required_field(input.title, "title")?;

    validate_question_title(&title)?;
    ensure_category_exists(&state, &category_id).await?;

    let question = state
        .questions
        .rename(&question_id, &category_id, &title)
        .await?;

    tracing::info!(question_id = %question.id, title = %question.title, "Question renamed");

    Ok(Json(question))
}

/// DELETE /categories/{category_id}/questions/{question_id}
pub async fn delete_question(
    State(state): State<AppState>,
    PathParam((category_id, question_id)): PathParam<(String, String)>,
) -> AppResult<impl IntoResponse> {
    ensure_category_exists(&state, &category_id).await?;

    let question = state.questions.delete(&question_id, &category_id).await?;

    tracing::info!(question_id = %question.id, category_id = %category_id, "Question deleted");

    Ok(Json(StatusResponse::deleted()))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn ensure_category_exists(state: &AppState, category_id: &str) -> AppResult<()> {
    if state.categories.exists(category_id).await {
        Ok(())
    } else {
        Err(CoreError::CategoryNotFound(category_id.to_string()).into())
    }
}

/// Turn the raw request body into a validated [`NewQuestion`].
fn parse_new_question(input: CreateQuestion) -> AppResult<NewQuestion> {
    let (Some(title), Some(kind)) = (input.title, input.kind) else {
        return Err(AppError::FieldMissing("title, type"));
    };

    if title.is_empty() {
        return Err(CoreError::TitleEmpty.into());
    }
    let kind: QuestionType = kind.parse()?;

    let options = match input.options {
        None => Vec::new(),
        Some(value) => {
            let options: Vec<String> = serde_json::from_value(value)
                .map_err(|e| AppError::OptionsInvalid(e.to_string()))?;
            validate_options(&options)?;
            options
        }
    };

    Ok(NewQuestion {
        title,
        kind,
        options,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use serde_json::json;

    use super::*;

    fn body(value: serde_json::Value) -> CreateQuestion {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn missing_type_is_field_missing() {
        let err = parse_new_question(body(json!({"title": "foo"}))).unwrap_err();
        assert_matches!(err, AppError::FieldMissing(_));
    }

    #[test]
    fn empty_title_checked_before_empty_type() {
        let err = parse_new_question(body(json!({"title": "", "type": ""}))).unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::TitleEmpty));
    }

    #[test]
    fn empty_and_unknown_types() {
        let err = parse_new_question(body(json!({"title": "foo", "type": ""}))).unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::TypeEmpty));

        let err = parse_new_question(body(json!({"title": "foo", "type": "foo"}))).unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::InvalidType(_)));
    }

    #[test]
    fn options_must_be_a_list_of_strings() {
        let err = parse_new_question(body(
            json!({"title": "foo", "type": "string", "options": ""}),
        ))
        .unwrap_err();
        assert_matches!(err, AppError::OptionsInvalid(_));

        let err = parse_new_question(body(
            json!({"title": "foo", "type": "string", "options": [1, 2]}),
        ))
        .unwrap_err();
        assert_matches!(err, AppError::OptionsInvalid(_));
    }

    #[test]
    fn options_checked_for_empties_and_duplicates() {
        let err = parse_new_question(body(
            json!({"title": "foo", "type": "string", "options": ["a", ""]}),
        ))
        .unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::OptionEmpty));

        let err = parse_new_question(body(
            json!({"title": "foo", "type": "string", "options": ["a", "a"]}),
        ))
        .unwrap_err();
        assert_matches!(err, AppError::Core(CoreError::DuplicateOption(_)));
    }

    #[test]
    fn null_options_treated_as_absent() {
        let parsed = parse_new_question(body(
            json!({"title": "foo", "type": "string", "options": null}),
        ))
        .unwrap();
        assert!(parsed.options.is_empty());
        assert_eq!(parsed.kind, QuestionType::String);
    }
}
