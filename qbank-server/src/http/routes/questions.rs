//! Question endpoints

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::SecondsFormat;
use serde::Serialize;

use crate::db::{InsertOutcome, Question};
use crate::http::error::ApiError;
use crate::http::extractors::QuestionInput;
use crate::http::server::AppState;

const FETCH_FAILED: &str = "Failed to fetch questions";
const ADD_FAILED: &str = "Failed to add question";

/// Question response
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<Question> for QuestionResponse {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question: q.question,
            answer: q.answer,
            created_at: q.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// Raw insertion result
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResponse {
    pub acknowledged: bool,
    pub inserted_id: String,
}

impl From<InsertOutcome> for InsertResponse {
    fn from(o: InsertOutcome) -> Self {
        Self {
            acknowledged: o.acknowledged,
            inserted_id: o.inserted_id,
        }
    }
}

/// GET /questions - all questions, newest first
async fn list_questions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<QuestionResponse>>, ApiError> {
    let questions = state
        .store
        .list_newest_first()
        .await
        .map_err(|e| ApiError::storage(FETCH_FAILED, e))?;

    Ok(Json(questions.into_iter().map(QuestionResponse::from).collect()))
}

/// POST /questions - add a question
async fn create_question(
    State(state): State<Arc<AppState>>,
    QuestionInput(question): QuestionInput,
) -> Result<(StatusCode, Json<InsertResponse>), ApiError> {
    let outcome = state
        .store
        .insert(question)
        .await
        .map_err(|e| ApiError::storage(ADD_FAILED, e))?;

    tracing::debug!(id = %outcome.inserted_id, "Question added");
    Ok((StatusCode::CREATED, Json(InsertResponse::from(outcome))))
}

/// Question routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/questions", get(list_questions).post(create_question))
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    #[test]
    fn response_uses_wire_field_names() {
        let q = Question {
            id: "65f0c0ffee0000000000abcd".into(),
            question: "Q?".into(),
            answer: "A.".into(),
            created_at: Utc.timestamp_millis_opt(1_714_557_600_000).unwrap(),
        };

        let value = serde_json::to_value(QuestionResponse::from(q)).unwrap();
        assert_eq!(value["_id"], "65f0c0ffee0000000000abcd");
        assert_eq!(value["createdAt"], "2024-05-01T10:00:00.000Z");
        assert_eq!(value["question"], "Q?");
    }

    #[test]
    fn insert_response_is_camel_case() {
        let value = serde_json::to_value(InsertResponse::from(InsertOutcome {
            acknowledged: true,
            inserted_id: "abc".into(),
        }))
        .unwrap();

        assert_eq!(value["acknowledged"], true);
        assert_eq!(value["insertedId"], "abc");
    }
}
