//! Custom Axum extractors

use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::Deserialize;

use super::error::ApiError;
use crate::models::{NewQuestion, ValidationError};

/// Create question request body, before validation
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
}

/// Extract and validate a question/answer pair from a JSON body.
///
/// Unreadable bodies are reported like missing fields so every bad
/// create request gets the same 400 response.
pub struct QuestionInput(pub NewQuestion);

impl<S> FromRequest<S> for QuestionInput
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body): Json<CreateQuestionRequest> = Json::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::Validation(ValidationError::Malformed {
                    reason: rejection.body_text(),
                })
            })?;

        let question = NewQuestion::new(body.question, body.answer)?;
        Ok(Self(question))
    }
}
