use crate::types::EntityId;

/// Domain errors raised when a category or question invariant is violated.
///
/// Each variant maps to one stable kind string (see [`CoreError::kind`])
/// that clients receive as the error title.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("categoryID not found: {0}")]
    CategoryNotFound(EntityId),

    #[error("name is a duplicate: {0}")]
    DuplicateCategoryName(String),

    #[error("name is invalid: {0}")]
    InvalidCategoryName(String),

    #[error("parentID not found: {0}")]
    ParentIdNotFound(EntityId),

    #[error("category would be too nested under parent {0}")]
    CategoryTooNested(EntityId),

    #[error("question not found: {0}")]
    QuestionNotFound(EntityId),

    #[error("title is empty")]
    TitleEmpty,

    #[error("title is invalid: {0}")]
    InvalidTitle(String),

    #[error("title is a duplicate: {0}")]
    DuplicateTitle(String),

    #[error("type is empty")]
    TypeEmpty,

    #[error("type is invalid: {0}")]
    InvalidType(String),

    #[error("option is empty")]
    OptionEmpty,

    #[error("options list has a duplicate: {0}")]
    DuplicateOption(String),

    #[error("question {question_id} does not belong to category {category_id}")]
    QuestionDoesntBelongToCategory {
        question_id: EntityId,
        category_id: EntityId,
    },
}

impl CoreError {
    /// Machine-readable kind string used as the wire-level error title.
    pub fn kind(&self) -> &'static str {
        match self {
            CoreError::CategoryNotFound(_) => "CategoryNotFound",
            CoreError::DuplicateCategoryName(_) => "DuplicateCategoryName",
            CoreError::InvalidCategoryName(_) => "InvalidCategoryName",
            CoreError::ParentIdNotFound(_) => "ParentIDNotFound",
            CoreError::CategoryTooNested(_) => "CategoryTooNested",
            CoreError::QuestionNotFound(_) => "QuestionNotFound",
            CoreError::TitleEmpty => "TitleEmpty",
            CoreError::InvalidTitle(_) => "InvalidTitle",
            CoreError::DuplicateTitle(_) => "DuplicateTitle",
            CoreError::TypeEmpty => "TypeEmpty",
            CoreError::InvalidType(_) => "InvalidType",
            CoreError::OptionEmpty => "OptionEmpty",
            CoreError::DuplicateOption(_) => "DuplicateOption",
            CoreError::QuestionDoesntBelongToCategory { .. } => "QuestionDoesntBelongToCategory",
        }
    }
}
