//! # Thunder
//!
//! Resolve the SQL dialect provider for a database client identifier.
//!
//! A data-access layer names its database technology with a client identifier
//! such as `"System.Data.SqlClient"`. Thunder maps that identifier to a
//! [`DataProvider`] that knows the dialect's parameter prefix, field quoting,
//! paging syntax and identity retrieval, so the rest of the layer stays
//! agnostic of the database behind a connection.
//!
//! ## Example
//!
//! ```rust
//! use thunder::{DataProvider, Error, resolve_provider};
//!
//! let provider = resolve_provider("MySql.Data.MySqlClient")?;
//! assert_eq!(provider.format_field("Name"), "`Name`");
//! assert_eq!(
//!     provider.select_take_query("*", "FROM Cars", 5),
//!     "SELECT * FROM Cars LIMIT 5"
//! );
//!
//! assert!(matches!(
//!     resolve_provider("Invalid.Provider"),
//!     Err(Error::ProviderNotFound { .. })
//! ));
//! # Ok::<(), thunder::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - `domain` - Provider ports, errors and SQL values
//! - `application` - Provider registry and resolution
//! - `providers` - Built-in SQL Server, Oracle and MySQL dialects
//! - `infrastructure` - Configuration, logging and registry bootstrap

use std::sync::Arc;

/// Domain layer - provider ports, errors and value objects
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use thunder_domain::*;
}

/// Application layer - provider registry and resolution
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use thunder_application::*;
}

/// Built-in data providers
///
/// Re-exports from the providers crate for convenience
pub mod providers {
    pub use thunder_providers::*;
}

/// Infrastructure layer - configuration, logging and bootstrap
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use thunder_infrastructure::*;
}

// Re-export commonly used types at the crate root
pub use domain::{CommandExecutor, DataProvider, Error, Result, SqlValue};
pub use application::{
    DataProviderConfig, ProviderDescriptor, ProviderFactory, ProviderRegistry,
    clear_custom_resolver, has_custom_resolver, list_builtin_data_providers, list_data_providers,
    lookup_data_provider, reset_data_providers, set_custom_resolver,
};
pub use infrastructure::{AppConfig, ConfigLoader, bootstrap};
pub use providers::{MySqlProvider, NullCommandExecutor, OracleProvider, SqlServerProvider};

/// Resolve the data provider for `identifier`
///
/// The custom resolver, when set, answers every identifier. Otherwise the bound
/// implementation is instantiated, or `Error::ProviderNotFound` carrying the
/// identifier verbatim is returned.
pub fn resolve_provider(identifier: &str) -> Result<Arc<dyn DataProvider>> {
    application::resolve_data_provider(identifier)
}

/// Resolve `config.provider`, creating the provider with the config's executor
pub fn resolve_provider_with(config: &DataProviderConfig) -> Result<Arc<dyn DataProvider>> {
    application::resolve_data_provider_with(config)
}

/// Bind `identifier` to the provider type `T`
///
/// Registering the same `T` again is a no-op. Registering a different type
/// under a bound identifier, built-ins included, fails with
/// `Error::ProviderConflict`.
pub fn register_provider<T: ProviderFactory>(identifier: &str) -> Result<()> {
    application::register_data_provider::<T>(identifier)
}

/// Bind `identifier` to an already built descriptor
pub fn register_provider_descriptor(
    identifier: &str,
    descriptor: ProviderDescriptor,
) -> Result<()> {
    application::register_data_provider_descriptor(identifier, descriptor)
}
