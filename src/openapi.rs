//! OpenAPI document for the region routes, served at `/openapi.json`.

use crate::handlers::region;
use crate::models::Region;
use crate::schemas::{RegionIn, RegionPatch};
use axum::{routing::get, Json, Router};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(region::create, region::list, region::read, region::update, region::delete),
    components(schemas(Region, RegionIn, RegionPatch)),
    tags((name = "regions", description = "Region CRUD"))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

pub fn openapi_routes() -> Router {
    Router::new().route("/openapi.json", get(openapi_json))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_region_paths() {
        let doc = serde_json::to_value(ApiDoc::openapi()).unwrap();
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/api/regions/"));
        assert!(paths.contains_key("/api/regions/{id}/"));
        assert!(doc["components"]["schemas"].get("Region").is_some());
    }
}
