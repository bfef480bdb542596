//! Storage crate: user-id set and per-chat session persistence on SQLite.
//!
//! ## Modules
//!
//! - [`models`] – SessionRecord
//! - [`user_repo`] – UserRepository (record, list, count)
//! - [`session_repo`] – SessionRepository (save, load with TTL, purge)
//! - [`sqlite_pool`] – SqlitePoolManager

mod models;
mod session_repo;
mod sqlite_pool;
mod user_repo;


pub use models::SessionRecord;
pub use session_repo::SessionRepository;
pub use sqlite_pool::SqlitePoolManager;
pub use user_repo::UserRepository;
