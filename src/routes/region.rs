//! Region CRUD routes. Each path is served with and without the trailing slash.

use crate::handlers::region::{create, delete as delete_handler, list, read, update};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn region_routes(state: AppState) -> Router {
    Router::new()
        .route("/regions/", get(list).post(create))
        .route("/regions", get(list).post(create))
        .route("/regions/:id/", get(read).put(update).delete(delete_handler))
        .route("/regions/:id", get(read).put(update).delete(delete_handler))
        .with_state(state)
}
