//! Repository for questions and their answer options.
//!
//! Question titles are unique per category, not globally.

use tokio::sync::RwLock;
use txcat_core::error::CoreError;
use txcat_core::types::{new_id, EntityId};
use txcat_core::validation::{validate_options, validate_question_title};

use crate::models::question::{NewQuestion, Question, QuestionList, QuestionOption};

/// Outcome of looking a question up within a category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionLookup {
    /// No question has the given id.
    Missing,
    /// The question exists but is attached to another category.
    WrongCategory,
    Found(Question),
}

/// Provides CRUD operations over the question list.
#[derive(Debug, Default)]
pub struct QuestionRepo {
    questions: RwLock<Vec<Question>>,
}

impl QuestionRepo {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository seeded with existing questions, kept in the given order.
    pub fn with_questions(questions: Vec<Question>) -> Self {
        Self {
            questions: RwLock::new(questions),
        }
    }

    // -----------------------------------------------------------------------
    // Reads
    // -----------------------------------------------------------------------

    /// Every question, across all categories, in insertion order.
    pub async fn list(&self) -> QuestionList {
        QuestionList {
            questions: self.questions.read().await.clone(),
        }
    }

    /// Questions attached to `category_id`; empty when none match.
    pub async fn list_for_category(&self, category_id: &str) -> QuestionList {
        let questions = self
            .questions
            .read()
            .await
            .iter()
            .filter(|q| q.category_id == category_id)
            .cloned()
            .collect();
        QuestionList { questions }
    }

    pub async fn find_by_id(&self, id: &str) -> Option<Question> {
        self.questions
            .read()
            .await
            .iter()
            .find(|q| q.id == id)
            .cloned()
    }

    /// Look a question up and check that it belongs to `category_id`.
    pub async fn locate(&self, id: &str, category_id: &str) -> QuestionLookup {
        let questions = self.questions.read().await;
        match questions.iter().find(|q| q.id == id) {
            None => QuestionLookup::Missing,
            Some(q) if q.category_id != category_id => QuestionLookup::WrongCategory,
            Some(q) => QuestionLookup::Found(q.clone()),
        }
    }

    pub async fn exists(&self, id: &str) -> bool {
        self.questions.read().await.iter().any(|q| q.id == id)
    }

    /// Whether `title` is already used by a question in `category_id`.
    pub async fn title_exists(&self, category_id: &str, title: &str) -> bool {
        title_taken(&self.questions.read().await, category_id, title)
    }

    /// True only when the question exists and is attached to `category_id`.
    pub async fn belongs_to_category(&self, id: &str, category_id: &str) -> bool {
        matches!(
            self.locate(id, category_id).await,
            QuestionLookup::Found(_)
        )
    }

    // -----------------------------------------------------------------------
    // Mutations
    // -----------------------------------------------------------------------

    /// Append a new question to `category_id`.
    ///
    /// Checks, in order: title non-empty, options, title unique within the
    /// category. String questions get a fresh id per option; number
    /// questions never store options. The caller is responsible for
    /// confirming that the category exists.
    pub async fn create(
        &self,
        category_id: &str,
        input: NewQuestion,
    ) -> Result<Question, CoreError> {
        if input.title.is_empty() {
            return Err(CoreError::TitleEmpty);
        }
        validate_options(&input.options)?;

        let mut questions = self.questions.write().await;

        if title_taken(&questions, category_id, &input.title) {
            return Err(CoreError::DuplicateTitle(input.title));
        }

        let options = input.kind.has_options().then(|| {
            input
                .options
                .into_iter()
                .map(|title| QuestionOption { id: new_id(), title })
                .collect()
        });

        let question = Question {
            id: new_id(),
            title: input.title,
            category_id: category_id.to_string(),
            kind: input.kind,
            options,
        };
        questions.push(question.clone());

        tracing::debug!(question_id = %question.id, total = questions.len(), "Question stored");
        Ok(question)
    }

    /// Rename a question in place.
    ///
    /// Checks, in order: title format, question exists, question belongs
    /// to `category_id`, title unique within the category.
    pub async fn rename(
        &self,
        id: &str,
        category_id: &str,
        title: &str,
    ) -> Result<Question, CoreError> {
        validate_question_title(title)?;

        let mut questions = self.questions.write().await;
        let index = position_in_category(&questions, id, category_id)?;

        if title_taken(&questions, category_id, title) {
            return Err(CoreError::DuplicateTitle(title.to_string()));
        }

        questions[index].title = title.to_string();
        Ok(questions[index].clone())
    }

    /// Delete a question that belongs to `category_id`, returning it.
    pub async fn delete(&self, id: &str, category_id: &str) -> Result<Question, CoreError> {
        let mut questions = self.questions.write().await;
        let index = position_in_category(&questions, id, category_id)?;
        Ok(questions.remove(index))
    }

    /// Delete every question attached to any of `category_ids`.
    ///
    /// Returns the number of questions removed.
    pub async fn delete_for_categories(&self, category_ids: &[EntityId]) -> usize {
        let mut questions = self.questions.write().await;
        let before = questions.len();
        questions.retain(|q| !category_ids.contains(&q.category_id));
        before - questions.len()
    }
}

// ---------------------------------------------------------------------------
// Helpers (operate on an already-locked slice)
// ---------------------------------------------------------------------------

fn title_taken(questions: &[Question], category_id: &str, title: &str) -> bool {
    questions
        .iter()
        .any(|q| q.category_id == category_id && q.title == title)
}

fn position_in_category(
    questions: &[Question],
    id: &str,
    category_id: &str,
) -> Result<usize, CoreError> {
    let index = questions
        .iter()
        .position(|q| q.id == id)
        .ok_or_else(|| CoreError::QuestionNotFound(id.to_string()))?;

    if questions[index].category_id != category_id {
        return Err(CoreError::QuestionDoesntBelongToCategory {
            question_id: id.to_string(),
            category_id: category_id.to_string(),
        });
    }
    Ok(index)
}
