//! Process configuration from environment variables.

pub mod settings;

pub use settings::{DatabaseSettings, Settings};
