//! Shared application state for all routes.

use crate::error::ConfigError;
use crate::models::RegionService;
use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub regions: RegionService,
}

impl AppState {
    pub fn new(pool: PgPool) -> Result<Self, ConfigError> {
        let regions = RegionService::new(pool.clone())?;
        Ok(AppState { pool, regions })
    }
}
