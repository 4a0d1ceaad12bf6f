//! Request extractors that validate before any handler logic runs.

pub mod body;
pub mod params;

pub use body::JsonBody;
pub use params::{EntityId, ListParams};
