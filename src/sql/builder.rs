//! Builds parameterized INSERT, SELECT, UPDATE, DELETE from entity metadata.

use crate::entity::EntityMeta;
use serde_json::Value;
use std::collections::HashMap;

/// Quote identifier for PostgreSQL (safe: only from entity metadata).
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }
}

fn select_column_list(entity: &EntityMeta) -> String {
    entity
        .columns
        .iter()
        .map(|c| quoted(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Placeholder cast to the column's storage type so untyped JSON values bind cleanly.
fn cast_placeholder(entity: &EntityMeta, col: &str, n: u32) -> String {
    match entity.column(col) {
        Some(c) => format!("${}::{}", n, c.pg_type),
        None => format!("${}", n),
    }
}

/// SELECT by primary key. With `for_update`, the row is locked until the session ends.
pub fn select_by_id(entity: &EntityMeta, id: i64, for_update: bool) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(Value::from(id));
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} = ${}{}",
        select_column_list(entity),
        quoted(entity.table_name),
        quoted(entity.pk_column),
        n,
        if for_update { " FOR UPDATE" } else { "" }
    );
    q
}

/// SELECT list ordered by primary key; a `None` bound leaves that axis open.
pub fn select_list(entity: &EntityMeta, offset: Option<u64>, limit: Option<u64>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sql = format!(
        "SELECT {} FROM {} ORDER BY {}",
        select_column_list(entity),
        quoted(entity.table_name),
        quoted(entity.pk_column)
    );
    if let Some(limit) = limit {
        let n = q.push_param(Value::from(limit));
        sql.push_str(&format!(" LIMIT ${}", n));
    }
    if let Some(offset) = offset {
        let n = q.push_param(Value::from(offset));
        sql.push_str(&format!(" OFFSET ${}", n));
    }
    q.sql = sql;
    q
}

/// INSERT of the body's known columns, in metadata order.
/// The primary key is written only when supplied.
pub fn insert(entity: &EntityMeta, body: &HashMap<String, Value>) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for c in entity.columns {
        if let Some(v) = body.get(c.name) {
            let n = q.push_param(v.clone());
            cols.push(quoted(c.name));
            placeholders.push(cast_placeholder(entity, c.name, n));
        }
    }
    let table = quoted(entity.table_name);
    let returning = select_column_list(entity);
    q.sql = if cols.is_empty() {
        format!("INSERT INTO {} DEFAULT VALUES RETURNING {}", table, returning)
    } else {
        format!(
            "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
            table,
            cols.join(", "),
            placeholders.join(", "),
            returning
        )
    };
    q
}

/// Moves the key's sequence past the largest stored key after an explicit-key insert.
/// `None` unless the body supplies a key that has a default. Keys without a sequence are a no-op.
pub fn sync_key_sequence(entity: &EntityMeta, body: &HashMap<String, Value>) -> Option<QueryBuf> {
    let pk = entity.pk()?;
    if !pk.has_default || !body.contains_key(pk.name) {
        return None;
    }
    let mut q = QueryBuf::new();
    let t = q.push_param(Value::from(quoted(entity.table_name)));
    let c = q.push_param(Value::from(pk.name));
    let key = quoted(pk.name);
    q.sql = format!(
        "SELECT setval(pg_get_serial_sequence(${}, ${}), COALESCE(MAX({}), 1), MAX({}) IS NOT NULL) FROM {}",
        t,
        c,
        key,
        key,
        quoted(entity.table_name)
    );
    Some(q)
}

/// UPDATE of the body's known non-key columns. `None` when there is nothing to set.
pub fn update(entity: &EntityMeta, id: i64, body: &HashMap<String, Value>) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for c in entity.columns {
        if c.name == entity.pk_column {
            continue;
        }
        if let Some(v) = body.get(c.name) {
            let n = q.push_param(v.clone());
            sets.push(format!("{} = {}", quoted(c.name), cast_placeholder(entity, c.name, n)));
        }
    }
    if sets.is_empty() {
        return None;
    }
    let n = q.push_param(Value::from(id));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = ${} RETURNING {}",
        quoted(entity.table_name),
        sets.join(", "),
        quoted(entity.pk_column),
        n,
        select_column_list(entity)
    );
    Some(q)
}

/// DELETE by primary key, returning the removed row.
pub fn delete(entity: &EntityMeta, id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(Value::from(id));
    q.sql = format!(
        "DELETE FROM {} WHERE {} = ${} RETURNING {}",
        quoted(entity.table_name),
        quoted(entity.pk_column),
        n,
        select_column_list(entity)
    );
    q
}
