//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::ports::{BlogRepository, BookmarkRepository, UserRepository};
use quill_infra::database::DatabaseConfig;
use quill_infra::database::memory::{
    InMemoryBlogRepository, InMemoryBookmarkRepository, InMemoryUserRepository,
};

#[cfg(feature = "postgres")]
use quill_infra::database::{
    PostgresBlogRepository, PostgresBookmarkRepository, PostgresUserRepository, connect,
};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
    pub bookmarks: Arc<dyn BookmarkRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        match db_config {
            Some(config) => match connect(config).await {
                Ok(conn) => {
                    tracing::info!("Application state initialized (postgres)");
                    return Self {
                        blogs: Arc::new(PostgresBlogRepository::new(conn.clone())),
                        bookmarks: Arc::new(PostgresBookmarkRepository::new(conn.clone())),
                        users: Arc::new(PostgresUserRepository::new(conn)),
                    };
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
            }
        }

        #[cfg(not(feature = "postgres"))]
        {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repositories");
        }

        Self::in_memory()
    }

    /// Repositories backed by process-local maps. The fallback when no
    /// database is configured, and the substrate for handler tests.
    pub fn in_memory() -> Self {
        Self {
            blogs: Arc::new(InMemoryBlogRepository::new()),
            bookmarks: Arc::new(InMemoryBookmarkRepository::new()),
            users: Arc::new(InMemoryUserRepository::new()),
        }
    }
}
