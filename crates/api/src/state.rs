/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the pool is reference-counted internally. It is the
/// only state shared between requests.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, created by the binary and injected here.
    pub pool: duties_db::DbPool,
}
