//! Router assembly: region CRUD under `/api`, operational routes, OpenAPI document.

mod common;
mod region;

pub use common::common_routes;
pub use region::region_routes;

use crate::openapi::openapi_routes;
use crate::state::AppState;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Request bodies above this size are rejected with 413.
pub const BODY_LIMIT_BYTES: usize = 64 * 1024;

pub fn app(state: AppState) -> Router {
    Router::new()
        .nest("/api", region_routes(state.clone()))
        .merge(common_routes(state))
        .merge(openapi_routes())
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(BODY_LIMIT_BYTES)),
        )
}
