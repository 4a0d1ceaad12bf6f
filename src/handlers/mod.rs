//! HTTP handlers for region CRUD.

pub mod region;
pub use region::*;
