//! Mapped entities.

pub mod region;

pub use region::{Region, RegionService};
