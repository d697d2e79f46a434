//! Request-scoped database session
//!
//! A `Session` owns one pooled connection inside a transaction. Dropping it
//! without `commit()` rolls the transaction back and hands the connection
//! back to the pool. That holds for early `?` returns and for a handler
//! future dropped mid-flight, so callers never close anything by hand.

use sqlx::{PgPool, Postgres, Transaction};

use super::DbError;
use crate::models::{Choice, NewChoice, Question, QuestionText};

/// Scoped unit of work over a single transaction
pub struct Session {
    tx: Transaction<'static, Postgres>,
}

impl Session {
    /// Acquire a connection from the pool and open a transaction on it.
    pub async fn begin(pool: &PgPool) -> Result<Self, DbError> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    /// Stage a question row, returning its assigned id.
    pub async fn insert_question(&mut self, text: &QuestionText) -> Result<i32, DbError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO questions (question_text)
            VALUES ($1)
            RETURNING id
            "#,
        )
        .bind(text.as_str())
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(id)
    }

    /// Stage a choice row owned by `question_id`, returning its assigned id.
    pub async fn insert_choice(
        &mut self,
        question_id: i32,
        choice: &NewChoice,
    ) -> Result<i32, DbError> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO choices (choice_text, is_correct, question_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(choice.text.as_str())
        .bind(choice.is_correct)
        .bind(question_id)
        .fetch_one(&mut *self.tx)
        .await?;

        Ok(id)
    }

    pub async fn question_by_id(&mut self, id: i32) -> Result<Option<Question>, DbError> {
        let question = sqlx::query_as::<_, Question>(
            "SELECT id, question_text FROM questions WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&mut *self.tx)
        .await?;

        Ok(question)
    }

    /// Choices whose foreign key equals `question_id`, ordered by id.
    pub async fn choices_by_question(&mut self, question_id: i32) -> Result<Vec<Choice>, DbError> {
        let choices = sqlx::query_as::<_, Choice>(
            r#"
            SELECT id, choice_text, is_correct, question_id
            FROM choices
            WHERE question_id = $1
            ORDER BY id
            "#,
        )
        .bind(question_id)
        .fetch_all(&mut *self.tx)
        .await?;

        Ok(choices)
    }

    /// Make everything staged in this session durable.
    pub async fn commit(self) -> Result<(), DbError> {
        self.tx.commit().await?;
        Ok(())
    }
}
