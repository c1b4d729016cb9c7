//! Application state - shared across all handlers.

use std::sync::Arc;

use scribe_core::ports::PostRepository;
use scribe_infra::database::{DatabaseConfig, InMemoryPostRepository};

#[cfg(feature = "postgres")]
use scribe_infra::database::{PostgresPostRepository, connect};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
}

impl AppState {
    /// Build the application state with the appropriate repository backend.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let posts: Arc<dyn PostRepository> = {
            if let Some(config) = db_config {
                match connect(config).await {
                    Ok(conn) => Arc::new(PostgresPostRepository::new(conn)),
                    Err(e) => {
                        tracing::error!(
                            "Failed to connect to database: {}. Using in-memory fallback.",
                            e
                        );
                        Arc::new(InMemoryPostRepository::new())
                    }
                }
            } else {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Arc::new(InMemoryPostRepository::new())
            }
        };

        #[cfg(not(feature = "postgres"))]
        let posts: Arc<dyn PostRepository> = {
            if db_config.is_some() {
                tracing::warn!(
                    "DATABASE_URL set but the postgres feature is disabled - using in-memory repository"
                );
            }
            Arc::new(InMemoryPostRepository::new())
        };

        tracing::info!("Application state initialized");

        Self { posts }
    }
}
