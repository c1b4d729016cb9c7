//! # Scribe Infrastructure
//!
//! Concrete implementations of the ports defined in `scribe-core`.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No external dependencies, in-memory only
//! - `postgres` - PostgreSQL database support via SeaORM

pub mod database;

// Re-exports - In-Memory
pub use database::InMemoryPostRepository;

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;
