//! Route definitions for the `/duties` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::duty;
use crate::state::AppState;

/// Duty routes, mounted at the root.
///
/// ```text
/// GET    /duties        -> list
/// POST   /duties        -> create
/// PUT    /duties/{id}   -> update
/// DELETE /duties/{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/duties", get(duty::list).post(duty::create))
        .route("/duties/{id}", put(duty::update).delete(duty::delete))
}
