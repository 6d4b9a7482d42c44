//! Liveness endpoint.

use axum::{Router, routing::get};

use crate::state::AppState;

/// GET /
async fn liveness() -> &'static str {
    "Server is running! Try /check-data to see database contents."
}

/// Returns the liveness router.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(liveness))
}
