//! Northwind region service: generic CRUD over PostgreSQL behind an axum REST API.

pub mod config;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod migration;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod schemas;
pub mod service;
pub mod session;
pub mod sql;
pub mod state;
pub mod store;
pub mod util;

pub use config::Settings;
pub use entity::{ColumnInfo, Entity, EntityMeta};
pub use error::{AppError, ConfigError, FieldError};
pub use migration::{drop_table, ensure_table};
pub use models::{Region, RegionService};
pub use routes::app;
pub use service::{CrudService, Page};
pub use session::Session;
pub use state::AppState;
pub use store::{connect, ensure_database_exists};
