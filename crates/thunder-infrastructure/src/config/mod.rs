//! Configuration management
//!
//! `ConfigLoader` merges defaults, a TOML file and `THUNDER_`-prefixed
//! environment variables into an [`AppConfig`].

pub mod loader;
pub mod types;

pub use loader::{ConfigBuilder, ConfigLoader};
pub use types::{AppConfig, LoggingConfig, RegistryConfig};
