//! Per-entity binding of the generic CRUD operations.

use crate::entity::Entity;
use crate::error::{AppError, ConfigError};
use crate::service::crud::{self, Page};
use serde_json::Value;
use sqlx::PgPool;
use std::collections::HashMap;
use std::marker::PhantomData;

pub struct CrudService<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E> Clone for CrudService<E> {
    fn clone(&self) -> Self {
        CrudService {
            pool: self.pool.clone(),
            _entity: PhantomData,
        }
    }
}

impl<E: Entity> CrudService<E> {
    /// Binds `E` to the pool. Fails when the entity metadata cannot back CRUD (no table, bad key).
    pub fn new(pool: PgPool) -> Result<Self, ConfigError> {
        E::META.validate()?;
        Ok(CrudService {
            pool,
            _entity: PhantomData,
        })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn create(&self, payload: &HashMap<String, Value>) -> Result<E, AppError> {
        crud::create::<E>(&self.pool, payload).await
    }

    pub async fn retrieve(&self, id: i64) -> Result<E, AppError> {
        crud::retrieve::<E>(&self.pool, id).await
    }

    pub async fn list(&self, page: Page) -> Result<Vec<E>, AppError> {
        crud::list::<E>(&self.pool, page).await
    }

    pub async fn update(&self, id: i64, payload: &HashMap<String, Value>) -> Result<E, AppError> {
        crud::update::<E>(&self.pool, id, payload).await
    }

    pub async fn delete(&self, id: i64) -> Result<E, AppError> {
        crud::delete::<E>(&self.pool, id).await
    }
}
