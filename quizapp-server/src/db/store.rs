//! Persistence client contract shared by the Postgres and in-memory stores

use async_trait::async_trait;

use crate::models::{Choice, NewQuestion, Question};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}

/// Persistence client injected into the HTTP handlers.
///
/// Every call is self-contained: it acquires whatever connection it needs
/// and releases it before returning, whether it succeeds or fails.
#[async_trait]
pub trait QuizStore: Send + Sync {
    /// Persist a question and all of its choices as one unit.
    ///
    /// Either every row is written or none is.
    async fn create_question(&self, question: NewQuestion) -> Result<Question, DbError>;

    /// Look up a question by id, `DbError::NotFound` when absent.
    async fn question(&self, id: i32) -> Result<Question, DbError>;

    /// All choices referencing `question_id`, in insertion order.
    ///
    /// An unknown question id yields an empty list, not an error.
    async fn choices(&self, question_id: i32) -> Result<Vec<Choice>, DbError>;

    /// Round-trip to the backing store.
    async fn ping(&self) -> Result<(), DbError>;
}
