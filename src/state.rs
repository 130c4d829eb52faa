//! Application state management
//!
//! Contains shared state accessible across all handlers.

use crate::error::AppError;
use deadpool_postgres::Pool;
use std::sync::Arc;

/// Application state shared across all handlers
pub struct AppState {
    /// Database connection pool; absent in hello mode
    db_pool: Option<Pool>,
}

impl AppState {
    /// Create state backed by a database pool (tables mode)
    pub fn with_pool(pool: Pool) -> Self {
        Self { db_pool: Some(pool) }
    }

    /// Create state without a database (hello mode)
    pub fn without_pool() -> Self {
        Self { db_pool: None }
    }

    /// Pool accessor for handlers that need the database
    pub fn pool(&self) -> Result<&Pool, AppError> {
        self.db_pool.as_ref().ok_or_else(|| {
            AppError::NotConnected(
                "No database configured. Set DATABASE_URL and run in tables mode.".to_string(),
            )
        })
    }
}

/// Type alias for shared state
pub type SharedState = Arc<AppState>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_accessor_errors_without_pool() {
        let state = AppState::without_pool();
        assert!(matches!(state.pool(), Err(AppError::NotConnected(_))));
    }
}
