//! Table DDL derived from entity metadata: create on startup, drop for test teardown.

use crate::entity::{ColumnInfo, Entity, EntityMeta};
use crate::error::AppError;
use crate::sql::quoted;
use sqlx::PgPool;

/// Storage type for DDL: defaulted integer keys become serials, bounded strings carry their length.
fn ddl_type(column: &ColumnInfo, is_pk: bool) -> String {
    if is_pk && column.has_default {
        match column.pg_type {
            "smallint" => return "SMALLSERIAL".into(),
            "integer" => return "SERIAL".into(),
            "bigint" => return "BIGSERIAL".into(),
            _ => {}
        }
    }
    match column.max_length {
        Some(n) => format!("{}({})", column.pg_type.to_uppercase(), n),
        None => column.pg_type.to_uppercase(),
    }
}

pub fn create_table_sql(entity: &EntityMeta) -> String {
    let mut defs: Vec<String> = entity
        .columns
        .iter()
        .map(|c| {
            let mut def = format!("{} {}", quoted(c.name), ddl_type(c, c.name == entity.pk_column));
            if !c.nullable {
                def.push_str(" NOT NULL");
            }
            def
        })
        .collect();
    defs.push(format!(
        "CONSTRAINT {} PRIMARY KEY ({})",
        quoted(&format!("pk_{}", entity.table_name)),
        quoted(entity.pk_column)
    ));
    format!(
        "CREATE TABLE IF NOT EXISTS {} ({})",
        quoted(entity.table_name),
        defs.join(", ")
    )
}

pub fn drop_table_sql(entity: &EntityMeta) -> String {
    format!("DROP TABLE IF EXISTS {}", quoted(entity.table_name))
}

/// Create the entity's table if missing. Idempotent.
pub async fn ensure_table<E: Entity>(pool: &PgPool) -> Result<(), AppError> {
    let sql = create_table_sql(&E::META);
    tracing::debug!(sql = %sql, "ddl");
    sqlx::query(&sql).execute(pool).await?;
    Ok(())
}

pub async fn drop_table<E: Entity>(pool: &PgPool) -> Result<(), AppError> {
    let sql = drop_table_sql(&E::META);
    tracing::debug!(sql = %sql, "ddl");
    sqlx::query(&sql).execute(pool).await?;
    Ok(())
}
