//! Sample data for an empty question collection
//!
//! Seeding is count-then-insert and is not atomic; two processes starting
//! against the same empty collection can both insert.

use crate::db::{DbError, QuestionStore};
use crate::models::NewQuestion;

/// Sample question/answer pairs, inserted in this order.
pub const SAMPLE_QUESTIONS: [(&str, &str); 5] = [
    (
        "What is closure in JavaScript?",
        "A closure is the combination of a function and the lexical environment within which that function was declared. It allows a function to access variables in its outer scope even after the outer function has returned.",
    ),
    (
        "Explain the difference between let, const, and var.",
        "var is function-scoped and can be redeclared, let is block-scoped and can be reassigned but not redeclared, const is block-scoped and cannot be reassigned or redeclared. Both let and const are hoisted but not initialized, creating a temporal dead zone.",
    ),
    (
        "What is event delegation in JavaScript?",
        "Event delegation is a technique where you attach an event listener to a parent element to handle events on its children, even those added dynamically. It's based on event bubbling and can improve performance by reducing the number of event listeners.",
    ),
    (
        "Explain Promise and async/await in JavaScript.",
        "Promises are objects representing the eventual completion or failure of an asynchronous operation. async/await is syntactic sugar over promises that makes asynchronous code look and behave more like synchronous code. An async function always returns a promise, and await can only be used inside async functions.",
    ),
    (
        "What is prototypal inheritance in JavaScript?",
        "Prototypal inheritance is JavaScript's mechanism for sharing properties and methods between objects. Each object has a private property that holds a link to another object called its prototype. That prototype object has its own prototype, forming a chain until reaching an object with null as its prototype.",
    ),
];

/// Result of a seeding attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// Collection was empty; sample records were inserted
    Inserted { count: usize },
    /// Collection already held records; nothing was written
    AlreadySeeded { existing: u64 },
}

/// Insert the sample questions if, and only if, the collection is empty.
///
/// Errors are returned to the caller, which decides whether startup continues.
pub async fn ensure_seeded(store: &dyn QuestionStore) -> Result<SeedOutcome, DbError> {
    let existing = store.count().await?;
    if existing > 0 {
        tracing::debug!(existing, "Collection already populated, skipping seed");
        return Ok(SeedOutcome::AlreadySeeded { existing });
    }

    let samples = SAMPLE_QUESTIONS
        .iter()
        .map(|(q, a)| NewQuestion::new(Some((*q).to_owned()), Some((*a).to_owned())))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| DbError::Unexpected(format!("invalid sample question: {}", e)))?;

    let count = store.insert_many(samples).await?;
    Ok(SeedOutcome::Inserted { count })
}

/// Seed an empty collection during server startup.
///
/// The outcome is logged here. A failure leaves the collection unseeded
/// and returns `None` so startup can continue.
pub async fn seed_on_startup(store: &dyn QuestionStore) -> Option<SeedOutcome> {
    match ensure_seeded(store).await {
        Ok(outcome) => {
            match outcome {
                SeedOutcome::Inserted { count } => {
                    tracing::info!(count, "Sample questions inserted successfully");
                }
                SeedOutcome::AlreadySeeded { existing } => {
                    tracing::info!(existing, "Question collection already populated");
                }
            }
            Some(outcome)
        }
        Err(e) => {
            tracing::error!(error = %e, "Error initializing database, continuing unseeded");
            None
        }
    }
}
