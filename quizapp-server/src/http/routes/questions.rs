//! Question endpoints

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::{QuestionId, ValidJson};
use crate::http::server::AppState;
use crate::models::{NewQuestion, Question};

/// Create question request
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question_text: String,
    pub choices: Vec<ChoiceRequest>,
}

/// One submitted choice
#[derive(Debug, Deserialize)]
pub struct ChoiceRequest {
    pub choice_text: String,
    pub is_correct: bool,
}

/// Create question response
#[derive(Debug, Serialize)]
pub struct CreateQuestionResponse {
    pub message: &'static str,
    pub question_id: i32,
}

/// POST /questions/ - create a question with its choices
async fn create_question(
    State(state): State<Arc<AppState>>,
    ValidJson(req): ValidJson<CreateQuestionRequest>,
) -> Result<Json<CreateQuestionResponse>, ApiError> {
    let new = NewQuestion::new(
        &req.question_text,
        req.choices
            .iter()
            .map(|c| (c.choice_text.as_str(), c.is_correct)),
    )?;

    let question = state.store.create_question(new).await?;

    Ok(Json(CreateQuestionResponse {
        message: "Question added successfully!",
        question_id: question.id,
    }))
}

/// GET /questions/{question_id} - get a single question
async fn get_question(
    State(state): State<Arc<AppState>>,
    id: QuestionId,
) -> Result<Json<Question>, ApiError> {
    let id = id.or_not_found("question")?;
    let question = state.store.question(id).await?;
    Ok(Json(question))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/questions/", post(create_question))
        .route("/questions", post(create_question))
        .route("/questions/{question_id}", get(get_question))
}
