//! Static entity metadata: table, primary key and columns, used to build SQL for any mapped record.

use crate::error::ConfigError;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::FromRow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: &'static str,
    /// PostgreSQL type name used to cast bound parameters (e.g. "smallint", "varchar").
    pub pg_type: &'static str,
    pub nullable: bool,
    /// Whether the column has a DB default (sequence for serial keys).
    pub has_default: bool,
    /// Length limit for character columns.
    pub max_length: Option<u32>,
}

impl ColumnInfo {
    pub const fn new(name: &'static str, pg_type: &'static str) -> Self {
        ColumnInfo {
            name,
            pg_type,
            nullable: true,
            has_default: false,
            max_length: None,
        }
    }

    pub const fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub const fn with_default(mut self) -> Self {
        self.has_default = true;
        self
    }

    pub const fn max_length(mut self, n: u32) -> Self {
        self.max_length = Some(n);
        self
    }
}

#[derive(Clone, Copy, Debug)]
pub struct EntityMeta {
    pub table_name: &'static str,
    pub pk_column: &'static str,
    pub columns: &'static [ColumnInfo],
}

impl EntityMeta {
    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn pk(&self) -> Option<&ColumnInfo> {
        self.column(self.pk_column)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Checks that the metadata can back a CRUD binding.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_name.trim().is_empty() {
            return Err(ConfigError::Entity("entity has no table name".into()));
        }
        if self.columns.is_empty() {
            return Err(ConfigError::Entity(format!(
                "entity '{}' has no columns",
                self.table_name
            )));
        }
        if self.pk().is_none() {
            return Err(ConfigError::InvalidPrimaryKey {
                table: self.table_name.to_string(),
                column: self.pk_column.to_string(),
            });
        }
        Ok(())
    }
}

/// A record mapped to one table.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin + 'static {
    const META: EntityMeta;
}
