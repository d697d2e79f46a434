//! Database layer - connection pool, scoped sessions and stores
//!
//! # Design Principles
//!
//! - Handlers only see `QuizStore`; the pool is never global
//! - One `Session` (transaction) per store call, released on drop
//! - Question + choices are written in a single transaction
//! - Rely on DB constraints for the choice -> question reference

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod schema;
pub mod session;
pub mod store;

pub use memory::MemoryStore;
pub use pool::{create_pool, create_pool_with_options};
pub use postgres::PgStore;
pub use session::Session;
pub use store::{DbError, QuizStore};
