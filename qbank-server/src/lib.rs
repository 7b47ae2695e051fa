//! qbank-server: question/answer HTTP service
//!
//! Lists and creates question records in a MongoDB collection,
//! seeding sample questions into an empty collection on startup.

pub mod db;
pub mod http;
pub mod models;
pub mod seed;

pub use db::{DbError, MemoryStore, MongoStore, QuestionStore, StoreConfig};
pub use http::{build_router, run_server, startup_router, AppState, ServerConfig, ServerError};
pub use seed::{ensure_seeded, seed_on_startup, SeedOutcome};
