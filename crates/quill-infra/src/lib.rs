//! # Quill Infrastructure
//!
//! Concrete implementations of the ports defined in `quill-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL repositories via SeaORM
//!
//! Without `postgres`, only the in-memory repositories are available; the
//! server falls back to them when no database is configured.

pub mod auth;
pub mod database;

// Re-exports - In-Memory
pub use database::memory::{InMemoryBlogRepository, InMemoryBookmarkRepository, InMemoryUserRepository};

pub use auth::{JwtConfig, JwtTokenService};

pub use database::DatabaseConfig;

// Re-exports - PostgreSQL
#[cfg(feature = "postgres")]
pub use database::{PostgresBlogRepository, PostgresBookmarkRepository, PostgresUserRepository};
