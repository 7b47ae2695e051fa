//! Storage layer - question store trait and its backends
//!
//! # Design Principles
//!
//! - One client per process, injected into handlers as `Arc<dyn QuestionStore>`
//! - Every remote call is bounded by a per-operation timeout
//! - The store stamps `created_at`; callers never supply timestamps
//! - No check-then-insert guarantees: seeding is count-then-insert, not atomic

pub mod memory;
pub mod mongo;

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Timelike, Utc};

use crate::models::NewQuestion;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

/// Database holding the question collection.
pub const DATABASE_NAME: &str = "interview-app";

/// Collection holding question records.
pub const COLLECTION_NAME: &str = "questions";

/// Default bound on a single storage operation.
pub const DEFAULT_OP_TIMEOUT: Duration = Duration::from_secs(10);

/// Question record as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Storage-assigned identifier (ObjectId hex).
    pub id: String,
    pub question: String,
    pub answer: String,
    pub created_at: DateTime<Utc>,
}

/// Acknowledgement returned by a single insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertOutcome {
    pub acknowledged: bool,
    pub inserted_id: String,
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Mongo(#[from] mongodb::error::Error),

    #[error("{operation} timed out after {}ms", .after.as_millis())]
    Timeout {
        operation: &'static str,
        after: Duration,
    },

    #[error("unexpected storage response: {0}")]
    Unexpected(String),
}

impl DbError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Connection settings for [`MongoStore`].
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// MongoDB connection string
    pub uri: String,
    pub database: String,
    pub collection: String,
    /// Upper bound for each storage call
    pub op_timeout: Duration,
}

impl StoreConfig {
    /// Config for the fixed database and collection names.
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: DATABASE_NAME.to_owned(),
            collection: COLLECTION_NAME.to_owned(),
            op_timeout: DEFAULT_OP_TIMEOUT,
        }
    }

    pub fn with_op_timeout(mut self, op_timeout: Duration) -> Self {
        self.op_timeout = op_timeout;
        self
    }
}

/// Question persistence.
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait QuestionStore: Send + Sync {
    /// Number of records in the collection.
    async fn count(&self) -> Result<u64, DbError>;

    /// All records, newest `created_at` first.
    async fn list_newest_first(&self) -> Result<Vec<Question>, DbError>;

    /// Insert one record stamped with the current time.
    async fn insert(&self, question: NewQuestion) -> Result<InsertOutcome, DbError>;

    /// Insert records in order, all stamped with one shared timestamp.
    /// Returns the number inserted.
    async fn insert_many(&self, questions: Vec<NewQuestion>) -> Result<usize, DbError>;
}

/// Current time at the millisecond precision BSON dates carry.
pub(crate) fn stored_now() -> DateTime<Utc> {
    let now = Utc::now();
    let millis = now.nanosecond() / 1_000_000 * 1_000_000;
    now.with_nanosecond(millis).unwrap_or(now)
}
