//! In-process `QuizStore` for tests and database-less local runs
//!
//! Ids are assigned from 1 upward per table, like `SERIAL` columns.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DbError, QuizStore};
use crate::models::{Choice, NewQuestion, Question};

#[derive(Debug, Default)]
struct Tables {
    questions: BTreeMap<i32, Question>,
    choices: Vec<Choice>,
    last_question_id: i32,
    last_choice_id: i32,
}

/// Quiz store held in memory behind a shared lock
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizStore for MemoryStore {
    async fn create_question(&self, question: NewQuestion) -> Result<Question, DbError> {
        // Single write lock: readers never observe a question without its choices
        let mut tables = self.tables.write().await;

        tables.last_question_id += 1;
        let id = tables.last_question_id;
        let created = Question {
            id,
            question_text: question.text.as_str().to_owned(),
        };
        tables.questions.insert(id, created.clone());

        for choice in &question.choices {
            tables.last_choice_id += 1;
            let choice_id = tables.last_choice_id;
            tables.choices.push(Choice {
                id: choice_id,
                choice_text: choice.text.as_str().to_owned(),
                is_correct: choice.is_correct,
                question_id: id,
            });
        }

        tracing::info!(question_id = id, choices = question.choices.len(), "question created");
        Ok(created)
    }

    async fn question(&self, id: i32) -> Result<Question, DbError> {
        self.tables
            .read()
            .await
            .questions
            .get(&id)
            .cloned()
            .ok_or_else(|| DbError::NotFound {
                resource: "question",
                id: id.to_string(),
            })
    }

    async fn choices(&self, question_id: i32) -> Result<Vec<Choice>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .choices
            .iter()
            .filter(|c| c.question_id == question_id)
            .cloned()
            .collect())
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}
