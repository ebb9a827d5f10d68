//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns around the data provider registry.
//!
//! ### Configuration & Bootstrap
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | TOML + environment configuration via figment |
//! | [`bootstrap`] | Applies configuration to the process-wide registry |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability & Errors
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |
//! | [`error_ext`] | Context extension for foreign errors |

pub mod bootstrap;
pub mod config;
pub mod constants;
pub mod error_ext;
pub mod logging;

// Linking the provider crate is what puts the built-ins into the registry slice
pub use thunder_providers as providers;

// Re-export commonly used types
pub use bootstrap::{apply_registry_config, bootstrap, bootstrap_registry};
pub use config::{AppConfig, ConfigLoader, LoggingConfig, RegistryConfig};
pub use error_ext::ErrorContext;
