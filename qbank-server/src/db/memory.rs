//! In-process question store
//!
//! Holds records in a `Vec` behind a tokio `RwLock`. Used by tests and
//! `qbank serve --in-memory`; nothing survives a restart.

use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;
use tokio::sync::RwLock;

use super::{stored_now, DbError, InsertOutcome, Question, QuestionStore};
use crate::models::NewQuestion;

#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<Vec<Question>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with existing records, in insertion order.
    pub fn with_records(records: Vec<Question>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

fn record(question: NewQuestion, created_at: chrono::DateTime<chrono::Utc>) -> Question {
    let (question, answer) = question.into_parts();
    Question {
        id: ObjectId::new().to_hex(),
        question,
        answer,
        created_at,
    }
}

#[async_trait]
impl QuestionStore for MemoryStore {
    async fn count(&self) -> Result<u64, DbError> {
        Ok(self.records.read().await.len() as u64)
    }

    async fn list_newest_first(&self) -> Result<Vec<Question>, DbError> {
        // Reverse first so equal timestamps list the latest insert first.
        let mut out: Vec<Question> = self.records.read().await.iter().rev().cloned().collect();
        out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(out)
    }

    async fn insert(&self, question: NewQuestion) -> Result<InsertOutcome, DbError> {
        let rec = record(question, stored_now());
        let inserted_id = rec.id.clone();
        self.records.write().await.push(rec);

        Ok(InsertOutcome {
            acknowledged: true,
            inserted_id,
        })
    }

    async fn insert_many(&self, questions: Vec<NewQuestion>) -> Result<usize, DbError> {
        let created_at = stored_now();
        let mut records = self.records.write().await;
        let count = questions.len();
        records.extend(questions.into_iter().map(|q| record(q, created_at)));
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    fn pair(q: &str, a: &str) -> NewQuestion {
        NewQuestion::new(Some(q.into()), Some(a.into())).unwrap()
    }

    #[tokio::test]
    async fn insert_assigns_distinct_ids() {
        let store = MemoryStore::new();
        let first = store.insert(pair("one", "1")).await.unwrap();
        let second = store.insert(pair("two", "2")).await.unwrap();

        assert_ne!(first.inserted_id, second.inserted_id);
        assert_eq!(first.inserted_id.len(), 24);
        assert_eq!(store.count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn list_orders_by_created_at_desc() {
        let at = |secs| Utc.timestamp_opt(secs, 0).unwrap();
        let store = MemoryStore::with_records(vec![
            Question {
                id: "a".into(),
                question: "old".into(),
                answer: "x".into(),
                created_at: at(100),
            },
            Question {
                id: "b".into(),
                question: "new".into(),
                answer: "x".into(),
                created_at: at(300),
            },
            Question {
                id: "c".into(),
                question: "mid".into(),
                answer: "x".into(),
                created_at: at(200),
            },
        ]);

        let listed = store.list_newest_first().await.unwrap();
        let order: Vec<_> = listed.iter().map(|q| q.question.as_str()).collect();
        assert_eq!(order, ["new", "mid", "old"]);
    }

    #[tokio::test]
    async fn insert_many_shares_timestamp() {
        let store = MemoryStore::new();
        let n = store
            .insert_many(vec![pair("one", "1"), pair("two", "2"), pair("three", "3")])
            .await
            .unwrap();
        assert_eq!(n, 3);

        let listed = store.list_newest_first().await.unwrap();
        assert!(listed.iter().all(|q| q.created_at == listed[0].created_at));
        // Equal timestamps: latest insert first.
        assert_eq!(listed[0].question, "three");
    }

    #[tokio::test]
    async fn concurrent_inserts_are_all_kept() {
        let store = std::sync::Arc::new(MemoryStore::new());
        let handles: Vec<_> = (0..10)
            .map(|i| {
                let store = store.clone();
                tokio::spawn(async move {
                    store
                        .insert(pair(&format!("q{}", i), "a"))
                        .await
                        .expect("insert failed")
                })
            })
            .collect();

        for handle in handles {
            handle.await.expect("task panicked");
        }
        assert_eq!(store.count().await.unwrap(), 10);
    }
}
