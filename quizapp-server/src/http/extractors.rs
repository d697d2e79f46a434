//! Custom Axum extractors
//!
//! Both turn framework rejections into `ApiError::Validation`, so malformed
//! input gets the same JSON error shape as every other failure.

use std::num::IntErrorKind;

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use crate::models::ValidationError;

/// JSON body whose parse/shape failures become a 400 validation error
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "body",
                    reason: rejection.body_text(),
                })
            })?;

        Ok(Self(value))
    }
}

/// Integer question id taken from the path.
///
/// Integers that don't fit the `questions.id` column can't name any row,
/// so they are kept apart and answered as not found by the handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionId {
    Row(i32),
    OutOfRange(String),
}

impl QuestionId {
    /// The row id, or `ApiError::NotFound` for `resource` when out of range.
    pub fn or_not_found(self, resource: &'static str) -> Result<i32, ApiError> {
        match self {
            Self::Row(id) => Ok(id),
            Self::OutOfRange(raw) => Err(ApiError::NotFound { resource, id: raw }),
        }
    }
}

impl<S> FromRequestParts<S> for QuestionId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::InvalidFormat {
                    field: "question_id",
                    reason: rejection.body_text(),
                })
            })?;

        match raw.parse::<i32>() {
            Ok(id) => Ok(Self::Row(id)),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                Ok(Self::OutOfRange(raw))
            }
            Err(_) => Err(ApiError::Validation(ValidationError::InvalidFormat {
                field: "question_id",
                reason: format!("'{}' is not an integer", raw),
            })),
        }
    }
}
