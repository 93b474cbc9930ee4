/**
 * Application State Management
 *
 * `AppState` is the state handed to the router. It is built once at startup
 * from an already opened pool and cloned into every request; there is no
 * process-wide database handle.
 *
 * # State Extraction
 *
 * The `FromRef` implementation lets handlers take just the pool:
 *
 * ```rust
 * use axum::extract::State;
 * use sqlx::SqlitePool;
 *
 * async fn handler(State(pool): State<SqlitePool>) {
 *     // run queries against `pool`
 * }
 * ```
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

/// Application state shared by all handlers
///
/// # Thread Safety
///
/// `SqlitePool` is a cheaply clonable handle over a connection pool; all
/// handlers use it concurrently without further locking. Ordering of
/// concurrent writes is whatever SQLite's own locking provides.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: SqlitePool,
}

impl AppState {
    pub fn new(db_pool: SqlitePool) -> Self {
        Self { db_pool }
    }
}

/// Implement FromRef for SqlitePool
///
/// This allows Axum handlers to extract `SqlitePool` directly from
/// `AppState` using `State(SqlitePool)`.
impl FromRef<AppState> for SqlitePool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
