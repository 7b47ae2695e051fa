//! MongoDB-backed question store
//!
//! Documents are shaped `{ _id, question, answer, createdAt }` so records
//! written by other clients of the same collection decode unchanged.

use std::future::IntoFuture;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, DateTime as BsonDateTime};
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use super::{stored_now, DbError, InsertOutcome, Question, QuestionStore, StoreConfig};
use crate::models::NewQuestion;

/// Stored document layout
#[derive(Debug, Clone, Serialize, Deserialize)]
struct QuestionDocument {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    id: Option<ObjectId>,
    question: String,
    answer: String,
    #[serde(rename = "createdAt")]
    created_at: BsonDateTime,
}

impl QuestionDocument {
    fn new(question: NewQuestion, created_at: BsonDateTime) -> Self {
        let (question, answer) = question.into_parts();
        Self {
            id: None,
            question,
            answer,
            created_at,
        }
    }
}

impl TryFrom<QuestionDocument> for Question {
    type Error = DbError;

    fn try_from(d: QuestionDocument) -> Result<Self, Self::Error> {
        let id = d
            .id
            .ok_or_else(|| DbError::Unexpected("document without _id".into()))?;
        let created_at = DateTime::<Utc>::from_timestamp_millis(d.created_at.timestamp_millis())
            .ok_or_else(|| DbError::Unexpected(format!("createdAt out of range on {}", id)))?;

        Ok(Self {
            id: id.to_hex(),
            question: d.question,
            answer: d.answer,
            created_at,
        })
    }
}

/// Question store backed by a single MongoDB client.
///
/// The client pools connections internally and is cheap to clone.
#[derive(Clone)]
pub struct MongoStore {
    client: Client,
    collection: Collection<QuestionDocument>,
    op_timeout: Duration,
}

impl MongoStore {
    /// Connect and verify the server answers a `ping`.
    ///
    /// # Errors
    ///
    /// Returns an error if the URI is invalid, the server is unreachable,
    /// or either step exceeds `config.op_timeout`.
    pub async fn connect(config: &StoreConfig) -> Result<Self, DbError> {
        let client = bounded(
            config.op_timeout,
            "connect",
            Client::with_uri_str(&config.uri),
        )
        .await?;

        let database = client.database(&config.database);
        bounded(
            config.op_timeout,
            "ping",
            database.run_command(doc! { "ping": 1 }),
        )
        .await?;

        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "Connected to MongoDB"
        );

        Ok(Self {
            collection: database.collection(&config.collection),
            client,
            op_timeout: config.op_timeout,
        })
    }

    /// Close pooled connections and stop background monitoring.
    pub async fn shutdown(&self) {
        self.client.clone().shutdown().await;
        tracing::info!("MongoDB client shut down");
    }
}

#[async_trait]
impl QuestionStore for MongoStore {
    async fn count(&self) -> Result<u64, DbError> {
        bounded(
            self.op_timeout,
            "count",
            self.collection.count_documents(doc! {}),
        )
        .await
    }

    async fn list_newest_first(&self) -> Result<Vec<Question>, DbError> {
        let docs: Vec<QuestionDocument> = bounded(self.op_timeout, "find", async {
            let cursor = self
                .collection
                .find(doc! {})
                .sort(doc! { "createdAt": -1 })
                .await?;
            cursor.try_collect().await
        })
        .await?;

        docs.into_iter().map(Question::try_from).collect()
    }

    async fn insert(&self, question: NewQuestion) -> Result<InsertOutcome, DbError> {
        let created_at = BsonDateTime::from_millis(stored_now().timestamp_millis());
        let document = QuestionDocument::new(question, created_at);

        let result = bounded(
            self.op_timeout,
            "insert",
            self.collection.insert_one(&document),
        )
        .await?;

        let inserted_id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| {
                DbError::Unexpected(format!("non-ObjectId _id: {}", result.inserted_id))
            })?
            .to_hex();

        Ok(InsertOutcome {
            acknowledged: true,
            inserted_id,
        })
    }

    async fn insert_many(&self, questions: Vec<NewQuestion>) -> Result<usize, DbError> {
        if questions.is_empty() {
            return Ok(0);
        }

        let created_at = BsonDateTime::from_millis(stored_now().timestamp_millis());
        let documents: Vec<QuestionDocument> = questions
            .into_iter()
            .map(|q| QuestionDocument::new(q, created_at))
            .collect();

        let result = bounded(
            self.op_timeout,
            "insert_many",
            self.collection.insert_many(&documents),
        )
        .await?;

        Ok(result.inserted_ids.len())
    }
}

/// Run a driver call, failing with [`DbError::Timeout`] once `after` elapses.
async fn bounded<T, F>(after: Duration, operation: &'static str, call: F) -> Result<T, DbError>
where
    F: IntoFuture<Output = Result<T, mongodb::error::Error>>,
{
    match tokio::time::timeout(after, call.into_future()).await {
        Ok(result) => result.map_err(DbError::from),
        Err(_) => Err(DbError::Timeout { operation, after }),
    }
}
