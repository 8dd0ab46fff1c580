//! Shared application state for all routes.

use sqlx::PgPool;

/// Built once at startup and cloned into every handler. Each request checks a
/// connection out of the pool for the duration of its query or transaction.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    pub fn new(pool: PgPool) -> Self {
        AppState { pool }
    }
}
