//! Generic CRUD execution against PostgreSQL, one session per operation.

use crate::entity::Entity;
use crate::error::AppError;
use crate::session::Session;
use crate::sql::{self, PgBindValue, QueryBuf};
use serde_json::Value;
use sqlx::{PgConnection, PgPool};
use std::collections::HashMap;

/// List bounds. `None` on either axis means no bound.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Page {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
}

/// Insert one row and return it as stored. The payload may omit the key when it has a default;
/// an explicit key also advances the key's sequence so later generated ids stay free.
pub async fn create<E: Entity>(
    pool: &PgPool,
    payload: &HashMap<String, Value>,
) -> Result<E, AppError> {
    let mut session = Session::begin(pool).await?;
    let outcome = create_in::<E>(session.conn(), payload).await;
    session.close(outcome).await
}

async fn create_in<E: Entity>(
    conn: &mut PgConnection,
    payload: &HashMap<String, Value>,
) -> Result<E, AppError> {
    let q = sql::insert(&E::META, payload);
    let created = fetch_optional::<E>(conn, &q)
        .await?
        .ok_or(AppError::Db(sqlx::Error::RowNotFound))?;
    if let Some(sync) = sql::sync_key_sequence(&E::META, payload) {
        execute(conn, &sync).await?;
    }
    Ok(created)
}

/// Fetch one row by primary key.
pub async fn retrieve<E: Entity>(pool: &PgPool, id: i64) -> Result<E, AppError> {
    let mut session = Session::begin(pool).await?;
    let outcome = find::<E>(session.conn(), id, false).await;
    session.close(outcome).await
}

/// Fetch rows ordered by primary key within the page bounds.
pub async fn list<E: Entity>(pool: &PgPool, page: Page) -> Result<Vec<E>, AppError> {
    let q = sql::select_list(&E::META, page.offset, page.limit);
    let mut session = Session::begin(pool).await?;
    let outcome = fetch_all::<E>(session.conn(), &q).await;
    session.close(outcome).await
}

/// Lock the row, apply the payload's non-key columns, and return the row as stored afterwards.
pub async fn update<E: Entity>(
    pool: &PgPool,
    id: i64,
    payload: &HashMap<String, Value>,
) -> Result<E, AppError> {
    let mut session = Session::begin(pool).await?;
    let outcome = update_in::<E>(session.conn(), id, payload).await;
    session.close(outcome).await
}

async fn update_in<E: Entity>(
    conn: &mut PgConnection,
    id: i64,
    payload: &HashMap<String, Value>,
) -> Result<E, AppError> {
    let current = find::<E>(conn, id, true).await?;
    let Some(q) = sql::update(&E::META, id, payload) else {
        return Ok(current);
    };
    fetch_optional::<E>(conn, &q)
        .await?
        .ok_or_else(|| AppError::not_found(E::META.table_name, id))
}

/// Lock the row, remove it, and return its last state.
pub async fn delete<E: Entity>(pool: &PgPool, id: i64) -> Result<E, AppError> {
    let mut session = Session::begin(pool).await?;
    let outcome = delete_in::<E>(session.conn(), id).await;
    session.close(outcome).await
}

async fn delete_in<E: Entity>(conn: &mut PgConnection, id: i64) -> Result<E, AppError> {
    find::<E>(conn, id, true).await?;
    let q = sql::delete(&E::META, id);
    fetch_optional::<E>(conn, &q)
        .await?
        .ok_or_else(|| AppError::not_found(E::META.table_name, id))
}

async fn find<E: Entity>(
    conn: &mut PgConnection,
    id: i64,
    for_update: bool,
) -> Result<E, AppError> {
    let q = sql::select_by_id(&E::META, id, for_update);
    fetch_optional::<E>(conn, &q)
        .await?
        .ok_or_else(|| AppError::not_found(E::META.table_name, id))
}

async fn fetch_optional<E: Entity>(
    conn: &mut PgConnection,
    q: &QueryBuf,
) -> Result<Option<E>, AppError> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query_as::<_, E>(&q.sql);
    for p in &q.params {
        query = query.bind(PgBindValue::from_json(p));
    }
    Ok(query.fetch_optional(&mut *conn).await?)
}

async fn fetch_all<E: Entity>(conn: &mut PgConnection, q: &QueryBuf) -> Result<Vec<E>, AppError> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query_as::<_, E>(&q.sql);
    for p in &q.params {
        query = query.bind(PgBindValue::from_json(p));
    }
    Ok(query.fetch_all(&mut *conn).await?)
}

async fn execute(conn: &mut PgConnection, q: &QueryBuf) -> Result<(), AppError> {
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query(&q.sql);
    for p in &q.params {
        query = query.bind(PgBindValue::from_json(p));
    }
    query.execute(&mut *conn).await?;
    Ok(())
}
