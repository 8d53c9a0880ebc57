// Storage layer for Eventboard
// Decision: Support both PostgreSQL (production) and in-memory (dev mode)
//
// Two collections: users (credential store) and events (event store).

pub mod backend;
pub mod memory;
pub mod models;
pub mod password;
pub mod repositories;

pub use backend::StorageBackend;
pub use memory::InMemoryDatabase;
pub use models::*;
pub use repositories::Database;
