//! Lookupd Infrastructure Layer
//!
//! Adapters behind the application ports: the hickory-resolver DNS client
//! and the SQLite-backed history repository.
pub mod database;
pub mod dns;
pub mod repositories;

pub use dns::HickoryAResolver;
pub use repositories::SqliteHistoryRepository;
