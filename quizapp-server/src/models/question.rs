//! Question text validation and the persisted question row

use serde::Serialize;
use sqlx::FromRow;

use super::{NewChoice, ValidationError};

/// Question record from database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question_text: String,
}

/// Validated question text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionText(String);

impl QuestionText {
    /// Create a new question text.
    ///
    /// # Rules
    /// - Non-empty (after trimming whitespace)
    ///
    /// # Example
    /// ```
    /// use quizapp_server::models::QuestionText;
    ///
    /// assert!(QuestionText::new("2+2?").is_ok());
    /// assert!(QuestionText::new("").is_err());
    /// assert!(QuestionText::new("   ").is_err());  // whitespace only
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Empty {
                field: "question_text".into(),
            });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the text as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for QuestionText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A fully validated question creation payload.
///
/// Choices keep their submitted order; that order becomes their id order
/// once persisted. Zero choices is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub text: QuestionText,
    pub choices: Vec<NewChoice>,
}

impl NewQuestion {
    /// Validate raw question text and `(choice_text, is_correct)` pairs.
    ///
    /// Fails on the first invalid field, reporting choice positions as
    /// `choices[i].choice_text`.
    pub fn new<'a, I>(question_text: &str, choices: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (&'a str, bool)>,
    {
        let text = QuestionText::new(question_text)?;
        let choices = choices
            .into_iter()
            .enumerate()
            .map(|(idx, (choice_text, is_correct))| NewChoice::at(idx, choice_text, is_correct))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { text, choices })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_texts() {
        assert!(QuestionText::new("2+2?").is_ok());
        assert!(QuestionText::new("a").is_ok());
    }

    #[test]
    fn rejects_whitespace_only() {
        assert!(matches!(
            QuestionText::new(" \t\n").unwrap_err(),
            ValidationError::Empty { .. }
        ));
    }

    #[test]
    fn trims_whitespace() {
        let text = QuestionText::new("  What is Rust?  ").unwrap();
        assert_eq!(text.as_str(), "What is Rust?");
    }

    #[test]
    fn new_question_keeps_choice_order() {
        let q = NewQuestion::new("2+2?", [("3", false), ("4", true)]).unwrap();
        assert_eq!(q.text.as_str(), "2+2?");
        let texts: Vec<_> = q.choices.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, ["3", "4"]);
        assert!(!q.choices[0].is_correct);
        assert!(q.choices[1].is_correct);
    }

    #[test]
    fn new_question_without_choices() {
        let q = NewQuestion::new("Open question", []).unwrap();
        assert!(q.choices.is_empty());
    }

    #[test]
    fn new_question_reports_choice_position() {
        let err = NewQuestion::new("2+2?", [("3", false), ("", true)]).unwrap_err();
        assert_eq!(
            err,
            ValidationError::Empty {
                field: "choices[1].choice_text".into()
            }
        );
    }

    #[test]
    fn question_text_checked_before_choices() {
        let err = NewQuestion::new("", [("", true)]).unwrap_err();
        assert_eq!(err.to_string(), "question_text cannot be empty");
    }
}
