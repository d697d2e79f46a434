//! PostgreSQL-backed `QuizStore`

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, QuizStore, Session};
use crate::models::{Choice, NewQuestion, Question};

/// Quiz store over a sqlx connection pool
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl QuizStore for PgStore {
    async fn create_question(&self, question: NewQuestion) -> Result<Question, DbError> {
        let mut session = Session::begin(&self.pool).await?;

        let id = session.insert_question(&question.text).await?;
        for choice in &question.choices {
            session.insert_choice(id, choice).await?;
        }

        session.commit().await?;

        tracing::info!(question_id = id, choices = question.choices.len(), "question created");
        Ok(Question {
            id,
            question_text: question.text.as_str().to_owned(),
        })
    }

    async fn question(&self, id: i32) -> Result<Question, DbError> {
        let mut session = Session::begin(&self.pool).await?;

        let question = session
            .question_by_id(id)
            .await?
            .ok_or_else(|| DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            })?;

        tracing::debug!(question_id = id, "question loaded");
        Ok(question)
    }

    async fn choices(&self, question_id: i32) -> Result<Vec<Choice>, DbError> {
        let mut session = Session::begin(&self.pool).await?;
        let choices = session.choices_by_question(question_id).await?;

        tracing::debug!(question_id, count = choices.len(), "choices loaded");
        Ok(choices)
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
