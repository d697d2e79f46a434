//! Choice endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::QuestionId;
use crate::http::server::AppState;
use crate::models::Choice;

/// GET /choices/{question_id} - choices belonging to a question
///
/// An empty result is reported as 404, so "question has no choices" and
/// "question does not exist" look the same to callers.
async fn list_choices(
    State(state): State<Arc<AppState>>,
    id: QuestionId,
) -> Result<Json<Vec<Choice>>, ApiError> {
    let question_id = id.or_not_found("choices for question")?;
    let choices = state.store.choices(question_id).await?;

    if choices.is_empty() {
        return Err(ApiError::NotFound {
            resource: "choices for question",
            id: question_id.to_string(),
        });
    }

    Ok(Json(choices))
}

/// Choice routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/choices/{question_id}", get(list_choices))
}
