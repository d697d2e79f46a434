//! quizapp-server: HTTP API over questions and their multiple-choice answers
//!
//! Accepts a question with nested choices, persists both in PostgreSQL and
//! serves them back by id.

pub mod db;
pub mod http;
pub mod models;

pub use db::{DbError, MemoryStore, PgStore, QuizStore};
pub use http::{build_router, run_server, ApiError, AppState, ServerConfig};
