//! Question and option models and DTOs.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use txcat_core::error::CoreError;
use txcat_core::types::EntityId;

// ---------------------------------------------------------------------------
// Entity structs
// ---------------------------------------------------------------------------

/// The kind of answer a question expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    Number,
    String,
}

impl QuestionType {
    pub fn as_str(self) -> &'static str {
        match self {
            QuestionType::Number => "number",
            QuestionType::String => "string",
        }
    }

    /// Whether questions of this type carry answer options.
    pub fn has_options(self) -> bool {
        matches!(self, QuestionType::String)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuestionType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "number" => Ok(QuestionType::Number),
            "string" => Ok(QuestionType::String),
            "" => Err(CoreError::TypeEmpty),
            other => Err(CoreError::InvalidType(other.to_string())),
        }
    }
}

/// A single selectable answer of a `string` question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: EntityId,
    pub title: String,
}

/// A stored question.
///
/// `options` is `Some` only for [`QuestionType::String`]; for number
/// questions the field is left out of the JSON entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: EntityId,
    pub title: String,
    #[serde(rename = "categoryID")]
    pub category_id: EntityId,
    #[serde(rename = "type")]
    pub kind: QuestionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<QuestionOption>>,
}

/// Response body for `GET /categories/{id}/questions`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionList {
    pub questions: Vec<Question>,
}

/// Validated input for [`QuestionRepo::create`](crate::repositories::QuestionRepo::create).
///
/// `options` holds the raw option titles; ids are assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub title: String,
    pub kind: QuestionType,
    pub options: Vec<String>,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Body of `POST /categories/{id}/questions`.
///
/// `options` is kept as raw JSON so that a wrongly shaped value can be
/// reported as `OptionsInvalid` rather than as unparseable JSON.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateQuestion {
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub options: Option<serde_json::Value>,
}

/// Body of `PATCH /categories/{id}/questions/{id}`. Only the title is mutable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RenameQuestion {
    pub title: Option<String>,
}
