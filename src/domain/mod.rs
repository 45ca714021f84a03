//! Domain - world configuration and its errors.

pub mod config;
pub mod error;

pub use config::{HistoryConfig, WorldConfig};
pub use error::ConfigError;
