//! Choice text validation and the persisted choice row

use serde::Serialize;
use sqlx::FromRow;

use super::ValidationError;

/// Choice record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Choice {
    pub id: i32,
    pub choice_text: String,
    pub is_correct: bool,
    pub question_id: i32,
}

/// Validated choice text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceText(String);

impl ChoiceText {
    /// Create a new choice text. Non-empty after trimming.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        Self::validate(s, || "choice_text".to_owned())
    }

    fn validate(s: &str, field: impl FnOnce() -> String) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty { field: field() });
        }

        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ChoiceText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated choice awaiting its owning question's id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChoice {
    pub text: ChoiceText,
    pub is_correct: bool,
}

impl NewChoice {
    pub fn new(choice_text: &str, is_correct: bool) -> Result<Self, ValidationError> {
        Ok(Self {
            text: ChoiceText::new(choice_text)?,
            is_correct,
        })
    }

    /// Same as `new`, with the error naming the choice's position in the request.
    pub(crate) fn at(idx: usize, choice_text: &str, is_correct: bool) -> Result<Self, ValidationError> {
        let text = ChoiceText::validate(choice_text, || format!("choices[{}].choice_text", idx))?;
        Ok(Self { text, is_correct })
    }
}
