//! API route composition.

use axum::Router;
use axum::routing::{get, post};

use crate::api::handlers::{calendar_handler, submit_handler};
use crate::api::middleware::rate_limit;
use crate::state::AppState;

/// Builds the `/api` sub-router.
///
/// The submission endpoint sits behind the stricter write limiter; calendar
/// reads get the wider public one. No authentication anywhere: the calendar
/// protects future content through the date gate, not through identity.
pub fn routes() -> Router<AppState> {
    let write_routes = Router::new()
        .route("/submissions", post(submit_handler))
        .layer(rate_limit::secure_layer());

    let read_routes = Router::new()
        .route("/calendar", get(calendar_handler))
        .layer(rate_limit::layer());

    write_routes.merge(read_routes)
}
